//! Borrow requests and borrow logs repository

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::borrow::{
        BorrowLog, BorrowLogRow, BorrowRequest, BorrowRequestRow, LogStatus, RequestStatus,
    },
};

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Postgres>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a borrow request by ID
    pub async fn get_request(&self, id: i32) -> AppResult<BorrowRequest> {
        let row = sqlx::query_as::<_, BorrowRequestRow>(
            "SELECT * FROM borrow_requests WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Request not found".to_string()))?;

        Ok(row.into())
    }

    /// Insert a new Pending borrow request
    pub async fn create_request(
        &self,
        user_id: i32,
        book_id: i32,
        requested_date: DateTime<Utc>,
    ) -> AppResult<BorrowRequest> {
        let row = sqlx::query_as::<_, BorrowRequestRow>(
            r#"
            INSERT INTO borrow_requests (user_id, book_id, requested_date, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(book_id)
        .bind(requested_date)
        .bind(RequestStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Set the status of a borrow request. The update matches on id only,
    /// not on prior status; the single-row write is the only atomicity
    /// guard here.
    pub async fn set_request_status(&self, id: i32, status: RequestStatus) -> AppResult<()> {
        let result = sqlx::query("UPDATE borrow_requests SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Request not found".to_string()));
        }

        Ok(())
    }

    /// Insert a borrow log with a denormalized copy of user_id/book_id
    pub async fn create_log(
        &self,
        user_id: i32,
        book_id: i32,
        borrow_date: DateTime<Utc>,
    ) -> AppResult<BorrowLog> {
        let row = sqlx::query_as::<_, BorrowLogRow>(
            r#"
            INSERT INTO borrow_logs (user_id, book_id, borrow_date, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(book_id)
        .bind(borrow_date)
        .bind(LogStatus::Accepted.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Mark a log returned, stamping return_date. Matches on id only, so a
    /// second return re-stamps the date rather than failing.
    pub async fn mark_returned(&self, id: i32, return_date: DateTime<Utc>) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE borrow_logs SET return_date = $2, status = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(return_date)
        .bind(LogStatus::Returned.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Borrow log not found".to_string()));
        }

        Ok(())
    }

    /// List all borrow logs
    pub async fn list_logs(&self) -> AppResult<Vec<BorrowLog>> {
        let rows = sqlx::query_as::<_, BorrowLogRow>("SELECT * FROM borrow_logs ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(BorrowLog::from).collect())
    }
}
