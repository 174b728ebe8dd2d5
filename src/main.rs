//! Bookwarden Server - Library Management Backend

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookwarden_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "bookwarden_server={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookwarden Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Registration and login
        .route("/register/", post(api::auth::register))
        .route("/login/", post(api::auth::login))
        // Book catalog
        .route("/books/", post(api::books::create_book))
        .route("/books/", get(api::books::list_books))
        .route("/books/search", get(api::books::search_books))
        .route("/books/genre", get(api::books::filter_books_by_genre))
        .route("/books/:id", put(api::books::update_book))
        .route("/books/:id", axum::routing::patch(api::books::update_book))
        .route("/books/:id", delete(api::books::delete_book))
        // Borrow workflow
        .route("/borrow/request", post(api::borrows::submit_request))
        .route("/borrow/request/:id/accept", put(api::borrows::accept_request))
        .route("/borrow/request/:id/deny", put(api::borrows::deny_request))
        .route("/borrow/log/:id/return", put(api::borrows::return_book))
        .route("/borrow/logs", get(api::borrows::list_logs))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
