pub mod book_repository;
pub mod user_authorizer;

pub use book_repository::BookRepository;
pub use user_authorizer::UserAuthorizer;

/// ポート共通の Result型（協力者のエラーは型を問わずそのまま運ぶ）
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
