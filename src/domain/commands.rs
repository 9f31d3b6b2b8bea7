use serde::{Deserialize, Serialize};

use super::{BookId, UserId};

/// コマンド：書籍の貸出を申請する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLoan {
    pub user_id: UserId,
    pub book_id: BookId,
}

impl RequestLoan {
    pub fn new(user_id: UserId, book_id: BookId) -> Self {
        Self { user_id, book_id }
    }
}
