//! User registration and authentication service

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginResponse, RegisterUser, UserResponse},
    repository::Repository,
    services::{credentials, tokens::TokenService},
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    tokens: TokenService,
}

impl UsersService {
    pub fn new(repository: Repository, tokens: TokenService) -> Self {
        Self { repository, tokens }
    }

    /// Register a new user. Fails on a taken username or a password that
    /// violates the strength policy; the stored hash is never returned.
    pub async fn register(&self, user: RegisterUser) -> AppResult<UserResponse> {
        if self.repository.users.username_exists(&user.username).await? {
            return Err(AppError::Conflict("Username already registered".to_string()));
        }

        credentials::validate_strength(&user.password)?;

        let hash = credentials::hash_password(&user.password)?;

        let created = self
            .repository
            .users
            .create(&user.username, &user.email, &hash, user.is_admin)
            .await?;

        tracing::info!(
            "Registered {} '{}'",
            if created.is_admin { "admin" } else { "user" },
            created.username
        );

        Ok(created.into())
    }

    /// Authenticate by username/password and issue a bearer token. Unknown
    /// usernames and wrong passwords get the same answer.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        let user = self
            .repository
            .users
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

        if !credentials::verify_password(password, &user.password_hash)? {
            return Err(AppError::Authentication("Invalid credentials".to_string()));
        }

        let token = self.tokens.issue(user.id, user.is_admin)?;

        let role = if user.is_admin { "Admin" } else { "User" };

        Ok(LoginResponse {
            access_token: token,
            token_type: "bearer".to_string(),
            message: format!("{} logged in successfully", role),
        })
    }
}
