use crate::domain::value_objects::{BookId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 書籍リポジトリ実装が保持する貸出記録
///
/// 貸出サービスはこの型を知らない。記録の形式はリポジトリ実装の責務。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub loan_id: Uuid,
    pub user_id: UserId,
    pub book_id: BookId,
    pub loaned_at: DateTime<Utc>,
}

impl LoanRecord {
    pub fn new(user_id: UserId, book_id: BookId, loaned_at: DateTime<Utc>) -> Self {
        Self {
            loan_id: Uuid::new_v4(),
            user_id,
            book_id,
            loaned_at,
        }
    }
}
