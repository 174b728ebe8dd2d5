//! Borrow workflow service: the request/accept/deny/return state machine
//! and the borrow-log ledger

use chrono::Utc;

use crate::{
    error::AppResult,
    models::{
        book::date_to_datetime,
        borrow::{BorrowLogResponse, BorrowRequestResponse, RequestStatus},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowsService {
    repository: Repository,
}

impl BorrowsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Submit a borrow request. Always created Pending with today's date.
    /// The referenced user and book are not checked for existence, and an
    /// outstanding request on the same book does not block a new one.
    pub async fn submit_request(
        &self,
        user_id: i32,
        book_id: i32,
    ) -> AppResult<BorrowRequestResponse> {
        let requested_date = date_to_datetime(Utc::now().date_naive());
        let request = self
            .repository
            .borrows
            .create_request(user_id, book_id, requested_date)
            .await?;

        tracing::info!(
            "Borrow request id={} submitted for book {} by user {}",
            request.id,
            book_id,
            user_id
        );

        Ok(request.into())
    }

    /// Accept a borrow request and open a borrow log for it. The status
    /// update does not branch on prior state, so concurrent accepts of the
    /// same request can each create a log.
    pub async fn accept_request(&self, request_id: i32) -> AppResult<()> {
        self.repository
            .borrows
            .set_request_status(request_id, RequestStatus::Accepted)
            .await?;

        let request = self.repository.borrows.get_request(request_id).await?;
        let log = self
            .repository
            .borrows
            .create_log(request.user_id, request.book_id, Utc::now())
            .await?;

        tracing::info!("Borrow request id={} accepted, log id={} opened", request_id, log.id);

        Ok(())
    }

    /// Deny a borrow request. No log is created.
    pub async fn deny_request(&self, request_id: i32) -> AppResult<()> {
        self.repository
            .borrows
            .set_request_status(request_id, RequestStatus::Denied)
            .await?;

        tracing::info!("Borrow request id={} denied", request_id);

        Ok(())
    }

    /// Mark a borrow log returned. A log that is already Returned is
    /// re-stamped rather than rejected.
    pub async fn return_book(&self, log_id: i32) -> AppResult<()> {
        self.repository.borrows.mark_returned(log_id, Utc::now()).await?;

        tracing::info!("Borrow log id={} marked returned", log_id);

        Ok(())
    }

    /// List all borrow logs, timestamps narrowed to calendar dates
    pub async fn list_logs(&self) -> AppResult<Vec<BorrowLogResponse>> {
        let logs = self.repository.borrows.list_logs().await?;
        Ok(logs.into_iter().map(BorrowLogResponse::from).collect())
    }
}
