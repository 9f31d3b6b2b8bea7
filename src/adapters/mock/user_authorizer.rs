use crate::domain::value_objects::UserId;
use crate::ports::{Result, UserAuthorizer as UserAuthorizerTrait};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

/// Mock implementation of UserAuthorizer
///
/// Supports stateful testing by storing authorized user IDs.
/// Users can be granted and revoked at runtime.
#[derive(Debug, Default)]
pub struct UserAuthorizer {
    authorized_users: Mutex<HashSet<UserId>>,
}

impl UserAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authorize a user
    pub fn add_user(&self, user_id: UserId) {
        self.users().insert(user_id);
    }

    /// Withdraw a user's authorization
    pub fn revoke_user(&self, user_id: UserId) {
        self.users().remove(&user_id);
    }

    fn users(&self) -> MutexGuard<'_, HashSet<UserId>> {
        self.authorized_users
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserAuthorizerTrait for UserAuthorizer {
    /// Check if user is among the authorized users
    async fn is_authorized(&self, user_id: UserId) -> Result<bool> {
        Ok(self.users().contains(&user_id))
    }
}
