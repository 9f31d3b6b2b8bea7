use crate::application::loan::LoanService;
use axum::{Json, extract::State};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{LoanOutcomeResponse, LoanRequest},
};

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub loan_service: LoanService,
}

/// POST /loans - 書籍の貸出を申請
///
/// 判定結果（成功・利用者未認可・書籍貸出不可）をそのまま返す。
/// 協力者の障害のみが500になる。
pub async fn request_loan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoanRequest>,
) -> Result<Json<LoanOutcomeResponse>, ApiError> {
    let cmd = req.to_command();
    let outcome = state
        .loan_service
        .request_loan(cmd.user_id, cmd.book_id)
        .await?;

    Ok(Json(LoanOutcomeResponse::from(outcome)))
}
