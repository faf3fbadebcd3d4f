//! Input checks for registration and login

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ValidationError;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Loose structural check: something@something.tld, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub(crate) fn check_registration(
    name: &str,
    email: &str,
    password: &str,
    min_password_length: usize,
) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(required("name"));
    }

    if email.trim().is_empty() {
        errors.push(required("email"));
    } else if !is_valid_email(email.trim()) {
        errors.push(ValidationError::InvalidEmail);
    }

    let password_length = password.chars().count();
    if password_length == 0 {
        errors.push(required("password"));
    } else if password_length < min_password_length {
        errors.push(ValidationError::TooShort {
            field: "password".to_string(),
            min: min_password_length,
            actual: password_length,
        });
    }

    match ValidationError::combine(errors) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

pub(crate) fn check_login(email: &str, password: &str) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    if email.trim().is_empty() {
        errors.push(required("email"));
    }
    if password.is_empty() {
        errors.push(required("password"));
    }

    match ValidationError::combine(errors) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

fn required(field: &str) -> ValidationError {
    ValidationError::RequiredField {
        field: field.to_string(),
    }
}
