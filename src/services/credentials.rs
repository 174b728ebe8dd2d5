//! Password hashing and strength policy

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AppError, AppResult};

/// Punctuation accepted by the special-character rule
const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Hash a password using Argon2 with a random salt
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Validate password strength. Rules run in a fixed order and the first
/// violated rule determines the message.
pub fn validate_strength(password: &str) -> AppResult<()> {
    let len = password.chars().count();
    if !(8..=20).contains(&len) {
        return Err(AppError::Validation(
            "Password must be 8–20 characters long.".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AppError::Validation(
            "Password must include at least one uppercase letter.".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(AppError::Validation(
            "Password must include at least one lowercase letter.".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "Password must include at least one digit.".to_string(),
        ));
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(AppError::Validation(
            "Password must include at least one special character.".to_string(),
        ));
    }
    if password.chars().any(|c| c.is_whitespace()) {
        return Err(AppError::Validation(
            "Password must not contain whitespace.".to_string(),
        ));
    }
    Ok(())
}
