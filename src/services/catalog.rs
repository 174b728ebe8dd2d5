//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::book::{date_to_datetime, BookQuery, BookResponse, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a book, normalizing the calendar date to a midnight timestamp
    /// and stamping the creating admin
    pub async fn create_book(&self, book: CreateBook, actor_id: i32) -> AppResult<BookResponse> {
        let published = date_to_datetime(book.published_date);
        let created = self
            .repository
            .books
            .create(&book.title, &book.author, &book.genre, published, actor_id)
            .await?;

        tracing::info!("Catalog: created book id={} '{}'", created.id, created.title);

        Ok(created.into())
    }

    /// Partially update a book; only fields present in the patch are
    /// applied. Stamps the updating admin.
    pub async fn update_book(
        &self,
        id: i32,
        patch: UpdateBook,
        actor_id: i32,
    ) -> AppResult<BookResponse> {
        let published = patch.published_date.map(date_to_datetime);
        let updated = self
            .repository
            .books
            .update(
                id,
                patch.title.as_deref(),
                patch.author.as_deref(),
                patch.genre.as_deref(),
                published,
                actor_id,
            )
            .await?;

        Ok(updated.into())
    }

    /// Delete a book
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await
    }

    /// List the whole catalog. An empty catalog answers NotFound rather
    /// than an empty list.
    pub async fn list_books(&self) -> AppResult<Vec<BookResponse>> {
        let books = self.repository.books.list_all().await?;
        if books.is_empty() {
            return Err(AppError::NotFound("No books found".to_string()));
        }
        Ok(books.into_iter().map(BookResponse::from).collect())
    }

    /// Search books with AND-combined title/author/genre filters
    pub async fn search_books(&self, query: &BookQuery) -> AppResult<Vec<BookResponse>> {
        let books = self.repository.books.search(query).await?;
        if books.is_empty() {
            return Err(AppError::NotFound("No books found".to_string()));
        }
        Ok(books.into_iter().map(BookResponse::from).collect())
    }

    /// Filter books by exact genre
    pub async fn filter_by_genre(&self, genre: &str) -> AppResult<Vec<BookResponse>> {
        let books = self.repository.books.filter_by_genre(genre).await?;
        if books.is_empty() {
            return Err(AppError::NotFound(
                "No books found for this genre".to_string(),
            ));
        }
        Ok(books.into_iter().map(BookResponse::from).collect())
    }
}
