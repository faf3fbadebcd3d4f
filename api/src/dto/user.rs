use std::borrow::Cow;

use chrono::{DateTime, Utc};
use fm_core::domain::entities::user::User;
use fm_core::errors::{FieldViolation, ValidationError};
use fm_core::services::auth::{is_valid_email, MIN_PASSWORD_LENGTH};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// Registration request
///
/// Missing fields deserialize as empty strings so they are reported as
/// field violations instead of a body parse failure. The rules are the ones
/// the auth service applies, so a request that passes here passes there.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(custom(function = validate_name))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = validate_email))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = validate_password))]
    pub password: String,
}

fn violation(
    code: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> validator::ValidationError {
    let mut error = validator::ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn validate_name(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        return Err(violation("required", "name is required"));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), validator::ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(violation("required", "email is required"));
    }
    if !is_valid_email(email) {
        return Err(violation("email", "email is not a valid address"));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), validator::ValidationError> {
    let length = password.chars().count();
    if length == 0 {
        return Err(violation("required", "password is required"));
    }
    if length < MIN_PASSWORD_LENGTH {
        return Err(violation(
            "length",
            format!("password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
    Ok(())
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Profile of the authenticated user
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub saved_funds_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            saved_funds_count: user.saved_funds.len(),
            created_at: user.created_at,
        }
    }
}

/// Converts `validator` output into the domain validation error
pub fn into_validation_error(errors: ValidationErrors) -> ValidationError {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                FieldViolation::new(field.to_string(), message)
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));

    ValidationError::Fields { violations }
}
