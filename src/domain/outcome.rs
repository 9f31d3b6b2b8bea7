use serde::{Deserialize, Serialize};
use std::fmt;

/// 貸出判定の結果
///
/// 3つの終端値のみを持つ閉じた列挙型。呼び出しごとに生成され、保存されない。
/// 認可されていない・在庫がないのはエラーではなく判定結果として扱う。
/// JSON上は `as_str` のコードで表現する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum LoanOutcome {
    /// 貸出成功（書籍リポジトリに記録済み）
    Success,
    /// 利用者が認可されていない
    UserNotAuthorized,
    /// 書籍が貸出可能でない
    BookNotAvailable,
}

impl LoanOutcome {
    /// 機械可読なコードを取得する
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanOutcome::Success => "success",
            LoanOutcome::UserNotAuthorized => "user_not_authorized",
            LoanOutcome::BookNotAvailable => "book_not_available",
        }
    }

    /// 利用者向けの正規メッセージを取得する
    pub fn message(&self) -> &'static str {
        match self {
            LoanOutcome::Success => "Préstamo exitoso",
            LoanOutcome::UserNotAuthorized => "Usuario no autorizado",
            LoanOutcome::BookNotAvailable => "Libro no disponible",
        }
    }
}

impl fmt::Display for LoanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<LoanOutcome> for &'static str {
    fn from(outcome: LoanOutcome) -> Self {
        outcome.as_str()
    }
}

impl TryFrom<String> for LoanOutcome {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for LoanOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(LoanOutcome::Success),
            "user_not_authorized" => Ok(LoanOutcome::UserNotAuthorized),
            "book_not_available" => Ok(LoanOutcome::BookNotAvailable),
            _ => Err(format!("Invalid loan outcome: {}", s)),
        }
    }
}
