use crate::domain::{BookId, LoanOutcome, UserId};
use crate::ports::{BookRepository, Result, UserAuthorizer};
use std::sync::Arc;

/// 貸出サービス
///
/// 認可と貸出可否を順に確認し、両方を満たす場合のみ貸出を記録させる。
/// 協力者（UserAuthorizer, BookRepository）は外部から注入され、
/// サービス自体は呼び出し間で状態を持たない。
#[derive(Clone)]
pub struct LoanService {
    user_authorizer: Arc<dyn UserAuthorizer>,
    book_repository: Arc<dyn BookRepository>,
}

impl LoanService {
    /// 協力者を受け取ってサービスを構築する（I/Oは行わない）
    pub fn new(
        user_authorizer: Arc<dyn UserAuthorizer>,
        book_repository: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            user_authorizer,
            book_repository,
        }
    }

    /// 書籍の貸出を申請する
    ///
    /// 判定順序：
    /// 1. 利用者が認可されていなければ `UserNotAuthorized`（書籍リポジトリは参照しない）
    /// 2. 書籍が貸出不可なら `BookNotAvailable`（貸出は記録しない）
    /// 3. 貸出を記録して `Success`
    ///
    /// # エラー
    /// 協力者のエラーは変換せずにそのまま返す。リトライやロールバックは行わない。
    pub async fn request_loan(&self, user_id: UserId, book_id: BookId) -> Result<LoanOutcome> {
        // 1. 利用者の認可確認
        if !self.user_authorizer.is_authorized(user_id).await? {
            tracing::debug!(%user_id, %book_id, "user is not authorized");
            return Ok(LoanOutcome::UserNotAuthorized);
        }

        // 2. 書籍の貸出可否確認
        if !self.book_repository.is_available(book_id).await? {
            tracing::debug!(%user_id, %book_id, "book is not available");
            return Ok(LoanOutcome::BookNotAvailable);
        }

        // 3. 貸出の記録
        self.book_repository.register_loan(user_id, book_id).await?;
        tracing::info!(%user_id, %book_id, "loan registered");

        Ok(LoanOutcome::Success)
    }
}
