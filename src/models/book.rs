//! Book model and related types

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Full book record from the database.
/// `published_date` is stored as a full timestamp (midnight UTC of the
/// submitted calendar date) even though the API accepts and returns a date.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_date: DateTime<Utc>,
    pub added_by: i32,
    pub updated_by: Option<i32>,
}

/// Book creation request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_date: NaiveDate,
}

/// Partial book update request; only present fields are applied
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub published_date: Option<NaiveDate>,
}

/// Search query parameters; filters are AND-combined
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
}

/// Book representation returned by the API, with the stored timestamp
/// narrowed back to a calendar date
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_date: NaiveDate,
    pub added_by: i32,
    pub updated_by: Option<i32>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        BookResponse {
            id: book.id,
            title: book.title,
            author: book.author,
            genre: book.genre,
            published_date: book.published_date.date_naive(),
            added_by: book.added_by,
            updated_by: book.updated_by,
        }
    }
}

/// Normalize a calendar date to the stored midnight-UTC timestamp
pub fn date_to_datetime(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}
