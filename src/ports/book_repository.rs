use crate::domain::value_objects::{BookId, UserId};
use async_trait::async_trait;

use super::Result;

/// 書籍リポジトリポート
///
/// 貸出可否の確認と貸出記録の両方を担う。
/// 貸出記録の永続化はこのポートの実装側が所有する。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 書籍が貸出可能か確認する
    async fn is_available(&self, book_id: BookId) -> Result<bool>;

    /// 貸出を記録する
    ///
    /// 副作用のみ。失敗した場合はエラーをそのまま返す。
    async fn register_loan(&self, user_id: UserId, book_id: BookId) -> Result<()>;
}
