//! Business logic services

pub mod borrows;
pub mod catalog;
pub mod credentials;
pub mod tokens;
pub mod users;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub catalog: catalog::CatalogService,
    pub borrows: borrows::BorrowsService,
    pub tokens: tokens::TokenService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        let tokens = tokens::TokenService::new(auth_config);
        Self {
            users: users::UsersService::new(repository.clone(), tokens.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            borrows: borrows::BorrowsService::new(repository),
            tokens,
        }
    }
}
