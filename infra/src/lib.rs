//! # Infrastructure Layer
//!
//! Concrete implementations of the core's repository and provider traits:
//!
//! - **Database**: MySQL persistence of users and their saved funds using SQLx
//! - **Market**: HTTP client for the public mutual fund data API

use fm_core::errors::{DomainError, MarketError};
use thiserror::Error;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Market data provider client
pub mod market;

pub use database::{DatabasePool, MySqlUserRepository};
pub use market::MfApiClient;

/// Infrastructure-specific errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Database connection or query errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration errors
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Http(e) => DomainError::Market(MarketError::Upstream {
                message: e.to_string(),
            }),
            other => DomainError::internal(other.to_string()),
        }
    }
}
