//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::book::{BookQuery, BookResponse, CreateBook, UpdateBook},
};

use super::{AuthenticatedUser, MessageResponse};

/// Create a book (admin only)
#[utoipa::path(
    post,
    path = "/books/",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = BookResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(book): Json<CreateBook>,
) -> AppResult<Json<BookResponse>> {
    claims.require_admin()?;

    let created = state.services.catalog.create_book(book, claims.user_id).await?;
    Ok(Json(created))
}

/// Update a book (admin only). PUT and PATCH both apply a partial patch:
/// only fields present in the body change.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(patch): Json<UpdateBook>,
) -> AppResult<Json<BookResponse>> {
    claims.require_admin()?;

    let updated = state
        .services
        .catalog
        .update_book(id, patch, claims.user_id)
        .await?;
    Ok(Json(updated))
}

/// Delete a book (admin only)
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.catalog.delete_book(id).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}

/// List all books. An empty catalog answers 404.
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<BookResponse>),
        (status = 404, description = "Catalog is empty")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BookResponse>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Search books by title, author and genre. Supplied filters are
/// AND-combined.
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books", body = Vec<BookResponse>),
        (status = 404, description = "No books matched")
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<BookResponse>>> {
    let books = state.services.catalog.search_books(&query).await?;
    Ok(Json(books))
}

/// Genre filter query parameter
#[derive(serde::Deserialize, utoipa::IntoParams)]
pub struct GenreQuery {
    pub genre: String,
}

/// Filter books by exact genre
#[utoipa::path(
    get,
    path = "/books/genre",
    tag = "books",
    params(GenreQuery),
    responses(
        (status = 200, description = "Books in the genre", body = Vec<BookResponse>),
        (status = 404, description = "No books in this genre")
    )
)]
pub async fn filter_books_by_genre(
    State(state): State<crate::AppState>,
    Query(query): Query<GenreQuery>,
) -> AppResult<Json<Vec<BookResponse>>> {
    let books = state.services.catalog.filter_by_genre(&query.genre).await?;
    Ok(Json(books))
}
