use serde::{Deserialize, Serialize};

use crate::domain::{BookId, LoanOutcome, RequestLoan, UserId};

/// 貸出申請リクエスト（POST /loans）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    pub user_id: u64,
    pub book_id: u64,
}

impl LoanRequest {
    /// APIリクエストをドメインコマンドに変換
    pub fn to_command(&self) -> RequestLoan {
        RequestLoan::new(UserId::new(self.user_id), BookId::new(self.book_id))
    }
}

/// 貸出判定レスポンス
///
/// 3つの判定結果はいずれもエラーではないため、常に200で返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanOutcomeResponse {
    /// 機械可読なコード（"success" など）
    pub outcome: LoanOutcome,
    /// 利用者向けメッセージ（"Préstamo exitoso" など）
    pub message: String,
}

impl From<LoanOutcome> for LoanOutcomeResponse {
    fn from(outcome: LoanOutcome) -> Self {
        Self {
            outcome,
            message: outcome.message().to_string(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
