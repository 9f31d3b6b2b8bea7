#![allow(dead_code)]

use async_trait::async_trait;
use library_loan::domain::value_objects::{BookId, UserId};
use library_loan::ports::{BookRepository, Result, UserAuthorizer};
use std::sync::Mutex;
use thiserror::Error;

/// テスト用の協力者障害
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("collaborator is down: {0}")]
pub struct CollaboratorDown(pub &'static str);

/// 呼び出しを記録する認可テストダブル
///
/// 判定は渡された関数に委ね、問い合わせられた利用者IDを順に記録する。
pub struct RecordingAuthorizer {
    rule: fn(UserId) -> bool,
    failure: Option<CollaboratorDown>,
    calls: Mutex<Vec<UserId>>,
}

impl RecordingAuthorizer {
    pub fn new(rule: fn(UserId) -> bool) -> Self {
        Self {
            rule,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// IDが0より大きい利用者を認可する
    pub fn positive_ids() -> Self {
        Self::new(|user_id| user_id.value() > 0)
    }

    /// 常に失敗する
    pub fn failing(failure: CollaboratorDown) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new(|_| true)
        }
    }

    pub fn calls(&self) -> Vec<UserId> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserAuthorizer for RecordingAuthorizer {
    async fn is_authorized(&self, user_id: UserId) -> Result<bool> {
        self.calls.lock().unwrap().push(user_id);
        match &self.failure {
            Some(failure) => Err(Box::new(failure.clone())),
            None => Ok((self.rule)(user_id)),
        }
    }
}

/// 呼び出しを記録する書籍リポジトリテストダブル
pub struct RecordingBookRepository {
    rule: fn(BookId) -> bool,
    availability_failure: Option<CollaboratorDown>,
    register_failure: Option<CollaboratorDown>,
    availability_checks: Mutex<Vec<BookId>>,
    registered_loans: Mutex<Vec<(UserId, BookId)>>,
}

impl RecordingBookRepository {
    pub fn new(rule: fn(BookId) -> bool) -> Self {
        Self {
            rule,
            availability_failure: None,
            register_failure: None,
            availability_checks: Mutex::new(Vec::new()),
            registered_loans: Mutex::new(Vec::new()),
        }
    }

    /// IDが偶数の書籍を貸出可能とする
    pub fn even_ids() -> Self {
        Self::new(|book_id| book_id.value() % 2 == 0)
    }

    /// 貸出可否の確認で失敗する
    pub fn failing_availability(failure: CollaboratorDown) -> Self {
        Self {
            availability_failure: Some(failure),
            ..Self::new(|_| true)
        }
    }

    /// 貸出の記録で失敗する（貸出可否は常に可）
    pub fn failing_registration(failure: CollaboratorDown) -> Self {
        Self {
            register_failure: Some(failure),
            ..Self::new(|_| true)
        }
    }

    pub fn availability_checks(&self) -> Vec<BookId> {
        self.availability_checks.lock().unwrap().clone()
    }

    pub fn registered_loans(&self) -> Vec<(UserId, BookId)> {
        self.registered_loans.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookRepository for RecordingBookRepository {
    async fn is_available(&self, book_id: BookId) -> Result<bool> {
        self.availability_checks.lock().unwrap().push(book_id);
        match &self.availability_failure {
            Some(failure) => Err(Box::new(failure.clone())),
            None => Ok((self.rule)(book_id)),
        }
    }

    async fn register_loan(&self, user_id: UserId, book_id: BookId) -> Result<()> {
        self.registered_loans.lock().unwrap().push((user_id, book_id));
        match &self.register_failure {
            Some(failure) => Err(Box::new(failure.clone())),
            None => Ok(()),
        }
    }
}
