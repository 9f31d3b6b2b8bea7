use crate::domain::value_objects::UserId;
use async_trait::async_trait;

use super::Result;

/// 利用者認可ポート
///
/// 貸出コンテキストと認可コンテキストの境界を維持する。
/// 貸出コンテキストは判定結果（はい/いいえ）のみを知り、判定方法は知らない。
#[async_trait]
pub trait UserAuthorizer: Send + Sync {
    /// 利用者が貸出を申請できるか確認する
    ///
    /// テストのために決定的であること。
    async fn is_authorized(&self, user_id: UserId) -> Result<bool>;
}
