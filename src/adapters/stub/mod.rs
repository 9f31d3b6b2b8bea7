pub mod book_repository;
pub mod user_authorizer;

pub use book_repository::BookRepository;
pub use user_authorizer::UserAuthorizer;
