//! Borrow request and borrow log models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Borrow request lifecycle. Pending requests move to Accepted or Denied;
/// neither transitions back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Denied,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Accepted => "Accepted",
            RequestStatus::Denied => "Denied",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(RequestStatus::Pending),
            "Accepted" => Ok(RequestStatus::Accepted),
            "Denied" => Ok(RequestStatus::Denied),
            _ => Err(format!("Invalid request status: {}", s)),
        }
    }
}

/// Borrow log lifecycle. A log is created Accepted when a request is
/// accepted and becomes Returned when the book comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LogStatus {
    Accepted,
    Returned,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Accepted => "Accepted",
            LogStatus::Returned => "Returned",
        }
    }
}

impl std::fmt::Display for LogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LogStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Accepted" => Ok(LogStatus::Accepted),
            "Returned" => Ok(LogStatus::Returned),
            _ => Err(format!("Invalid log status: {}", s)),
        }
    }
}

/// Internal row structure for borrow_requests queries (status as TEXT)
#[derive(Debug, Clone, FromRow)]
pub struct BorrowRequestRow {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub requested_date: DateTime<Utc>,
    pub status: String,
}

/// Borrow request entity
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorrowRequest {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub requested_date: DateTime<Utc>,
    pub status: RequestStatus,
}

impl From<BorrowRequestRow> for BorrowRequest {
    fn from(row: BorrowRequestRow) -> Self {
        BorrowRequest {
            id: row.id,
            user_id: row.user_id,
            book_id: row.book_id,
            requested_date: row.requested_date,
            status: row.status.parse().unwrap_or(RequestStatus::Pending),
        }
    }
}

/// Submit request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitBorrowRequest {
    pub user_id: i32,
    pub book_id: i32,
}

/// Borrow request representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BorrowRequestResponse {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub requested_date: NaiveDate,
    pub status: RequestStatus,
}

impl From<BorrowRequest> for BorrowRequestResponse {
    fn from(request: BorrowRequest) -> Self {
        BorrowRequestResponse {
            id: request.id,
            user_id: request.user_id,
            book_id: request.book_id,
            requested_date: request.requested_date.date_naive(),
            status: request.status,
        }
    }
}

/// Internal row structure for borrow_logs queries (status as TEXT)
#[derive(Debug, Clone, FromRow)]
pub struct BorrowLogRow {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub borrow_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub status: String,
}

/// Borrow log entity, the operative record of a book being out
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BorrowLog {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub borrow_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub status: LogStatus,
}

impl From<BorrowLogRow> for BorrowLog {
    fn from(row: BorrowLogRow) -> Self {
        BorrowLog {
            id: row.id,
            user_id: row.user_id,
            book_id: row.book_id,
            borrow_date: row.borrow_date,
            return_date: row.return_date,
            status: row.status.parse().unwrap_or(LogStatus::Accepted),
        }
    }
}

/// Borrow log representation returned by the API, timestamps narrowed to
/// calendar dates
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BorrowLogResponse {
    pub id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub borrow_date: NaiveDate,
    pub status: LogStatus,
    pub return_date: Option<NaiveDate>,
}

impl From<BorrowLog> for BorrowLogResponse {
    fn from(log: BorrowLog) -> Self {
        BorrowLogResponse {
            id: log.id,
            user_id: log.user_id,
            book_id: log.book_id,
            borrow_date: log.borrow_date.date_naive(),
            status: log.status,
            return_date: log.return_date.map(|d| d.date_naive()),
        }
    }
}
