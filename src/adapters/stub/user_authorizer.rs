use crate::domain::value_objects::UserId;
use crate::ports::{Result, UserAuthorizer as UserAuthorizerTrait};
use async_trait::async_trait;

/// 規則ベースの認可スタブ
///
/// IDが0より大きい利用者のみ認可する。
#[derive(Debug, Clone, Copy, Default)]
pub struct UserAuthorizer;

impl UserAuthorizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserAuthorizerTrait for UserAuthorizer {
    async fn is_authorized(&self, user_id: UserId) -> Result<bool> {
        Ok(user_id.value() > 0)
    }
}
