//! Borrow workflow endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::borrow::{BorrowLogResponse, BorrowRequestResponse, SubmitBorrowRequest},
};

use super::{AuthenticatedUser, MessageResponse};

/// Submit a borrow request. Any authenticated user may ask.
#[utoipa::path(
    post,
    path = "/borrow/request",
    tag = "borrows",
    security(("bearer_auth" = [])),
    request_body = SubmitBorrowRequest,
    responses(
        (status = 200, description = "Request submitted", body = BorrowRequestResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn submit_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<SubmitBorrowRequest>,
) -> AppResult<Json<BorrowRequestResponse>> {
    let created = state
        .services
        .borrows
        .submit_request(request.user_id, request.book_id)
        .await?;
    Ok(Json(created))
}

/// Accept a borrow request and open a borrow log (admin only)
#[utoipa::path(
    put,
    path = "/borrow/request/{id}/accept",
    tag = "borrows",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Borrow request ID")
    ),
    responses(
        (status = 200, description = "Request accepted", body = MessageResponse),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Request not found")
    )
)]
pub async fn accept_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.borrows.accept_request(id).await?;
    Ok(Json(MessageResponse::new(
        "Request accepted and borrow log created",
    )))
}

/// Deny a borrow request (admin only)
#[utoipa::path(
    put,
    path = "/borrow/request/{id}/deny",
    tag = "borrows",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Borrow request ID")
    ),
    responses(
        (status = 200, description = "Request denied", body = MessageResponse),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Request not found")
    )
)]
pub async fn deny_request(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.borrows.deny_request(id).await?;
    Ok(Json(MessageResponse::new("Request denied")))
}

/// Mark a borrowed book returned (admin only)
#[utoipa::path(
    put,
    path = "/borrow/log/{id}/return",
    tag = "borrows",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Borrow log ID")
    ),
    responses(
        (status = 200, description = "Return logged", body = MessageResponse),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Borrow log not found")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.borrows.return_book(id).await?;
    Ok(Json(MessageResponse::new(
        "Book returned and borrow log updated",
    )))
}

/// List all borrow logs
#[utoipa::path(
    get,
    path = "/borrow/logs",
    tag = "borrows",
    responses(
        (status = 200, description = "All borrow logs", body = Vec<BorrowLogResponse>)
    )
)]
pub async fn list_logs(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<BorrowLogResponse>>> {
    let logs = state.services.borrows.list_logs().await?;
    Ok(Json(logs))
}
