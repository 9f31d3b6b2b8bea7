use library_loan::{
    adapters::{mock, stub},
    api::{handlers::AppState, router::create_router},
    application::loan::LoanService,
    config::{CollaboratorKind, Config},
    domain::{BookId, UserId},
    ports::{BookRepository, UserAuthorizer},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_loan=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    // Initialize collaborators
    let (user_authorizer, book_repository) = build_collaborators(&config);
    tracing::info!("Using {:?} collaborators", config.collaborators);

    let loan_service = LoanService::new(user_authorizer, book_repository);
    let app_state = Arc::new(AppState { loan_service });

    let app = create_router(app_state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

fn build_collaborators(config: &Config) -> (Arc<dyn UserAuthorizer>, Arc<dyn BookRepository>) {
    match config.collaborators {
        CollaboratorKind::Stub => (
            Arc::new(stub::UserAuthorizer::new()),
            Arc::new(stub::BookRepository::new()),
        ),
        CollaboratorKind::Mock => {
            let user_authorizer = mock::UserAuthorizer::new();
            for &user_id in &config.authorized_users {
                user_authorizer.add_user(UserId::new(user_id));
            }

            let book_repository = mock::BookRepository::new();
            for &book_id in &config.available_books {
                book_repository.add_available_book(BookId::new(book_id));
            }

            (Arc::new(user_authorizer), Arc::new(book_repository))
        }
    }
}
