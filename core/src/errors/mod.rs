//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, FieldViolation, FundError, MarketError, TokenError, ValidationError};

use thiserror::Error;

/// Stable external error taxonomy.
///
/// Every [`DomainError`] maps onto exactly one kind; outer layers choose
/// status codes and wire codes from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Unauthenticated,
    Conflict,
    NotFound,
    Internal,
}

impl ErrorKind {
    /// Wire code for the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation_error",
            ErrorKind::Unauthenticated => "unauthenticated",
            ErrorKind::Conflict => "conflict",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Internal => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Duplicate value for: {}", fields.join(", "))]
    Conflict { fields: Vec<String> },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    #[error(transparent)]
    Fund(#[from] FundError),

    #[error(transparent)]
    Market(#[from] MarketError),
}

impl DomainError {
    /// Classifies the error into the external taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } | DomainError::ValidationErr(_) => ErrorKind::Validation,
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Internal { .. } => ErrorKind::Internal,
            DomainError::Auth(error) => match error {
                AuthError::MissingToken
                | AuthError::InvalidCredentials
                | AuthError::UnknownUser => ErrorKind::Unauthenticated,
            },
            DomainError::Token(error) => match error {
                TokenError::TokenExpired
                | TokenError::InvalidSignature
                | TokenError::InvalidTokenFormat => ErrorKind::Unauthenticated,
                TokenError::TokenGenerationFailed => ErrorKind::Internal,
            },
            DomainError::Fund(error) => match error {
                FundError::AlreadySaved { .. } => ErrorKind::Conflict,
                FundError::NotSaved { .. } => ErrorKind::NotFound,
            },
            DomainError::Market(error) => match error {
                MarketError::FundNotFound { .. } => ErrorKind::NotFound,
                MarketError::Upstream { .. } => ErrorKind::Internal,
            },
        }
    }

    /// Shorthand for an internal failure with a diagnostic message
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
