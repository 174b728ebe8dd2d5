//! User model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full user record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
}

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// User summary returned by registration (never includes the hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            is_admin: user.is_admin,
        }
    }
}

/// Registration response wrapping the created user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
    pub data: UserResponse,
}

/// Login form body (OAuth2 password flow shape)
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Login response carrying the bearer token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub message: String,
}

/// JWT claims for authenticated users.
///
/// A payload without an `is_admin` claim deserializes as non-admin, so a
/// validly signed token can never gain admin rights by omitting the claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: i32,
    #[serde(default)]
    pub is_admin: bool,
    pub exp: i64,
    pub iat: i64,
}

impl TokenClaims {
    /// Require admin privileges
    pub fn require_admin(&self) -> Result<(), crate::error::AppError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(crate::error::AppError::Authorization(
                "Admin privileges required".to_string(),
            ))
        }
    }
}
