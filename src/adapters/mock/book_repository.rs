use crate::adapters::loan_record::LoanRecord;
use crate::domain::value_objects::{BookId, UserId};
use crate::ports::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// 書籍リポジトリモックのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// 蔵書に登録されていない書籍
    #[error("Book {0} is not in the catalog")]
    UnknownBook(BookId),

    /// 既に貸出中の書籍
    #[error("Book {0} is already on loan")]
    AlreadyOnLoan(BookId),
}

#[derive(Debug, Default)]
struct Catalog {
    available: HashSet<BookId>,
    on_loan: HashMap<BookId, LoanRecord>,
}

/// BookRepositoryのモック実装
///
/// 書籍IDを保存することで状態を持ったテストをサポート。
/// 貸出を記録すると書籍は貸出不可になる。
#[derive(Debug, Default)]
pub struct BookRepository {
    catalog: Mutex<Catalog>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト用に貸出可能な書籍を登録
    pub fn add_available_book(&self, book_id: BookId) {
        let mut catalog = self.catalog();
        catalog.on_loan.remove(&book_id);
        catalog.available.insert(book_id);
    }

    /// 書籍の貸出記録を取得
    pub fn loan_for(&self, book_id: BookId) -> Option<LoanRecord> {
        self.catalog().on_loan.get(&book_id).cloned()
    }

    /// 貸出中の冊数
    pub fn loan_count(&self) -> usize {
        self.catalog().on_loan.len()
    }

    fn catalog(&self) -> MutexGuard<'_, Catalog> {
        self.catalog
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    /// 登録された書籍の中で貸出可能かチェック
    async fn is_available(&self, book_id: BookId) -> Result<bool> {
        Ok(self.catalog().available.contains(&book_id))
    }

    /// 貸出を記録し、書籍を貸出不可にする
    async fn register_loan(&self, user_id: UserId, book_id: BookId) -> Result<()> {
        let mut catalog = self.catalog();

        if catalog.on_loan.contains_key(&book_id) {
            return Err(Box::new(RepositoryError::AlreadyOnLoan(book_id)));
        }
        if !catalog.available.remove(&book_id) {
            return Err(Box::new(RepositoryError::UnknownBook(book_id)));
        }

        let record = LoanRecord::new(user_id, book_id, Utc::now());
        tracing::debug!(loan_id = %record.loan_id, %user_id, %book_id, "loan recorded");
        catalog.on_loan.insert(book_id, record);
        Ok(())
    }
}
