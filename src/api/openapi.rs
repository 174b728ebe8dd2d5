//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, borrows, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookwarden API",
        version = "0.1.0",
        description = "Library Management Backend REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        // Books
        books::create_book,
        books::update_book,
        books::delete_book,
        books::list_books,
        books::search_books,
        books::filter_books_by_genre,
        // Borrows
        borrows::submit_request,
        borrows::accept_request,
        borrows::deny_request,
        borrows::return_book,
        borrows::list_logs,
    ),
    components(
        schemas(
            // Auth
            crate::models::user::RegisterUser,
            crate::models::user::UserResponse,
            crate::models::user::RegisterResponse,
            crate::models::user::LoginForm,
            crate::models::user::LoginResponse,
            // Books
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::book::BookResponse,
            // Borrows
            crate::models::borrow::SubmitBorrowRequest,
            crate::models::borrow::BorrowRequestResponse,
            crate::models::borrow::BorrowLogResponse,
            crate::models::borrow::RequestStatus,
            crate::models::borrow::LogStatus,
            // Shared
            crate::api::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration and login"),
        (name = "books", description = "Book catalog management"),
        (name = "borrows", description = "Borrow request workflow and logs")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
