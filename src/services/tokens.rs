//! JWT issuance and verification

use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::TokenClaims,
};

#[derive(Clone)]
pub struct TokenService {
    config: AuthConfig,
}

impl TokenService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Issue a signed token carrying the user id and admin flag, expiring
    /// after the configured TTL (30 minutes by default)
    pub fn issue(&self, user_id: i32, is_admin: bool) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_minutes as i64 * 60);

        let claims = TokenClaims {
            user_id,
            is_admin,
            exp,
            iat: now,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Resolve a token back to its claims. Expired tokens and tokens with a
    /// bad signature or structure are rejected; a missing admin claim
    /// resolves to non-admin.
    pub fn resolve(&self, token: &str) -> AppResult<TokenClaims> {
        let token_data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::Authentication("Token expired".to_string()),
            _ => AppError::Authentication("Invalid token".to_string()),
        })?;

        Ok(token_data.claims)
    }
}
