//! Books repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new book stamped with the creating admin
    pub async fn create(
        &self,
        title: &str,
        author: &str,
        genre: &str,
        published_date: DateTime<Utc>,
        added_by: i32,
    ) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, genre, published_date, added_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(author)
        .bind(genre)
        .bind(published_date)
        .bind(added_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    /// Apply a partial update, keeping unspecified fields, and stamp the
    /// updating admin
    pub async fn update(
        &self,
        id: i32,
        title: Option<&str>,
        author: Option<&str>,
        genre: Option<&str>,
        published_date: Option<DateTime<Utc>>,
        updated_by: i32,
    ) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = COALESCE($2, title),
                author = COALESCE($3, author),
                genre = COALESCE($4, genre),
                published_date = COALESCE($5, published_date),
                updated_by = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(author)
        .bind(genre)
        .bind(published_date)
        .bind(updated_by)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Delete a book
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        Ok(())
    }

    /// List the whole catalog
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Search books. Each supplied filter becomes a case-insensitive
    /// substring predicate on its own column; filters are AND-combined.
    pub async fn search(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let mut conditions = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(ref title) = query.title {
            params.push(format!("%{}%", title));
            conditions.push(format!("title ILIKE ${}", params.len()));
        }

        if let Some(ref author) = query.author {
            params.push(format!("%{}%", author));
            conditions.push(format!("author ILIKE ${}", params.len()));
        }

        if let Some(ref genre) = query.genre {
            params.push(format!("%{}%", genre));
            conditions.push(format!("genre ILIKE ${}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!("SELECT * FROM books {} ORDER BY id", where_clause);

        let mut q = sqlx::query_as::<_, Book>(&sql);
        for param in &params {
            q = q.bind(param);
        }

        let books = q.fetch_all(&self.pool).await?;

        Ok(books)
    }

    /// Filter books by exact genre
    pub async fn filter_by_genre(&self, genre: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE genre = $1 ORDER BY id")
            .bind(genre)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }
}
