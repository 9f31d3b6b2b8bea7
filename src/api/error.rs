use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// 協力者（認可・書籍リポジトリ）のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// 貸出サービスは協力者のエラーを変換しないため、ここで初めて利用者向けの形に整える。
#[derive(Debug)]
pub struct ApiError(Box<dyn std::error::Error + Send + Sync>);

impl From<Box<dyn std::error::Error + Send + Sync>> for ApiError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
        tracing::error!("Loan collaborator error: {}", self.0);

        let body = Json(ErrorResponse::new(
            "COLLABORATOR_ERROR",
            "Loan collaborator failed",
        ));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
