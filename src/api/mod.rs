//! API handlers for Bookwarden REST endpoints

pub mod auth;
pub mod books;
pub mod borrows;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, models::user::TokenClaims, AppState};

/// Plain acknowledgement body
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Extractor for authenticated user from JWT token
pub struct AuthenticatedUser(pub TokenClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = &auth_header[7..];

        let claims = state.services.tokens.resolve(token)?;

        Ok(AuthenticatedUser(claims))
    }
}
