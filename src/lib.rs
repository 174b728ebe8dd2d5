//! Bookwarden Library Management Backend
//!
//! A REST JSON API for registering users, managing a book catalog, and
//! running the borrow-request workflow (request, accept/deny, return).

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
