use crate::adapters::loan_record::LoanRecord;
use crate::domain::value_objects::{BookId, UserId};
use crate::ports::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

/// 規則ベースの書籍リポジトリスタブ
///
/// IDが偶数の書籍のみ貸出可能。貸出を記録しても貸出可否は変わらないため、
/// 同じ申請を繰り返すと毎回成功する。
#[derive(Debug, Default)]
pub struct BookRepository {
    loans: Mutex<Vec<LoanRecord>>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録された貸出の一覧（記録順）
    pub fn loans(&self) -> Vec<LoanRecord> {
        self.loans
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn is_available(&self, book_id: BookId) -> Result<bool> {
        Ok(book_id.value() % 2 == 0)
    }

    async fn register_loan(&self, user_id: UserId, book_id: BookId) -> Result<()> {
        let record = LoanRecord::new(user_id, book_id, Utc::now());
        tracing::debug!(loan_id = %record.loan_id, %user_id, %book_id, "stub loan recorded");
        self.loans
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record);
        Ok(())
    }
}
