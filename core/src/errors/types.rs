//! Error families for authentication, tokens, validation, saved funds and
//! market data.
//!
//! The `Display` strings here are diagnostic; user-facing messages are chosen
//! in the presentation layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Token subject does not match any user")]
    UnknownUser,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length: {field} (min: {min}, actual: {actual})")]
    TooShort {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Invalid length: {field} (max: {max}, actual: {actual})")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Validation failed for {} field(s)", violations.len())]
    Fields { violations: Vec<FieldViolation> },
}

impl ValidationError {
    /// Folds several failures into one. A single failure is returned as is;
    /// more than one becomes [`ValidationError::Fields`].
    pub fn combine(mut errors: Vec<ValidationError>) -> Option<ValidationError> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(ValidationError::Fields {
                violations: errors.iter().flat_map(|e| e.violations()).collect(),
            }),
        }
    }

    /// Per-field breakdown of the failure
    pub fn violations(&self) -> Vec<FieldViolation> {
        match self {
            ValidationError::RequiredField { field } => {
                vec![FieldViolation::new(field, format!("{} is required", field))]
            }
            ValidationError::InvalidFormat { field } => {
                vec![FieldViolation::new(field, format!("{} has an invalid format", field))]
            }
            ValidationError::TooShort { field, min, .. } => vec![FieldViolation::new(
                field,
                format!("{} must be at least {} characters", field, min),
            )],
            ValidationError::TooLong { field, max, .. } => vec![FieldViolation::new(
                field,
                format!("{} must be at most {} characters", field, max),
            )],
            ValidationError::InvalidEmail => {
                vec![FieldViolation::new("email", "email is not a valid address")]
            }
            ValidationError::Fields { violations } => violations.clone(),
        }
    }
}

/// Saved-fund collection errors
#[derive(Error, Debug)]
pub enum FundError {
    #[error("Fund already saved: {scheme_code}")]
    AlreadySaved { scheme_code: String },

    #[error("Fund not found in saved funds: {scheme_code}")]
    NotSaved { scheme_code: String },
}

/// Upstream market data errors
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("No fund with scheme code {scheme_code}")]
    FundNotFound { scheme_code: String },

    #[error("Market data provider failure: {message}")]
    Upstream { message: String },
}
