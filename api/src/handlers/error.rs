//! Maps [`DomainError`] onto HTTP responses.
//!
//! Each failure gets a status, a stable `error` code, a user-facing message
//! and optional structured `details`. Internal diagnostic text is attached
//! under `details.debug` only when [`ErrorConfig::include_debug`] is set.

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    web, HttpRequest, HttpResponse, ResponseError,
};
use fm_core::errors::{
    AuthError, DomainError, ErrorKind, FieldViolation, FundError, MarketError, TokenError,
    ValidationError,
};
use serde_json::json;

use crate::config::ErrorConfig;
use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Result of classifying a failure
#[derive(Debug, Clone)]
pub struct Classification {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub errors: Vec<FieldViolation>,
    pub fields: Vec<String>,
}

impl Classification {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            errors: Vec::new(),
            fields: Vec::new(),
        }
    }

    fn of_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(status_for(kind), kind.as_str(), message)
    }

    fn with_errors(mut self, errors: Vec<FieldViolation>) -> Self {
        self.errors = errors;
        self
    }

    fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    /// Builds the wire body
    pub fn into_response(self, debug: Option<String>) -> ErrorResponse {
        let mut response = ErrorResponse::new(self.code, self.message);
        if !self.errors.is_empty() {
            response = response.with_detail("errors", json!(self.errors));
        }
        if !self.fields.is_empty() {
            response = response.with_detail("fields", json!(self.fields));
        }
        if let Some(debug) = debug {
            response = response.with_detail("debug", json!(debug));
        }
        response
    }
}

/// Default status for each error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Classifies a domain error
pub fn classify(error: &DomainError) -> Classification {
    let kind = error.kind();

    match error {
        DomainError::Validation { message } => Classification::of_kind(kind, message.clone()),
        DomainError::ValidationErr(validation) => classify_validation(validation),
        DomainError::Conflict { fields } => {
            Classification::of_kind(kind, "Duplicate field value entered")
                .with_fields(fields.clone())
        }
        DomainError::NotFound { resource } => {
            Classification::of_kind(kind, format!("{} not found", resource))
        }
        DomainError::Internal { .. } => Classification::of_kind(kind, "Internal Server Error"),
        DomainError::Auth(auth) => match auth {
            AuthError::MissingToken => Classification::of_kind(kind, "Not authorized, no token"),
            AuthError::InvalidCredentials => {
                Classification::of_kind(kind, "Invalid email or password")
            }
            AuthError::UnknownUser => {
                Classification::of_kind(kind, "Not authorized, user not found")
            }
        },
        DomainError::Token(token) => match token {
            TokenError::TokenExpired => Classification::of_kind(kind, "Token expired"),
            TokenError::InvalidSignature | TokenError::InvalidTokenFormat => {
                Classification::of_kind(kind, "Invalid token")
            }
            TokenError::TokenGenerationFailed => {
                Classification::of_kind(kind, "Internal Server Error")
            }
        },
        DomainError::Fund(fund) => match fund {
            FundError::AlreadySaved { .. } => Classification::new(
                StatusCode::CONFLICT,
                "fund_already_saved",
                "Fund already saved",
            ),
            FundError::NotSaved { .. } => {
                Classification::of_kind(kind, "Fund not found in saved funds")
            }
        },
        DomainError::Market(market) => match market {
            MarketError::FundNotFound { .. } => Classification::of_kind(kind, "Fund not found"),
            MarketError::Upstream { .. } => Classification::new(
                StatusCode::BAD_GATEWAY,
                "upstream_error",
                "Market data is currently unavailable",
            ),
        },
    }
}

fn classify_validation(error: &ValidationError) -> Classification {
    let violations = error.violations();
    let message = match violations.as_slice() {
        [single] => single.message.clone(),
        _ => "Validation failed".to_string(),
    };
    Classification::of_kind(ErrorKind::Validation, message).with_errors(violations)
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError, config: &ErrorConfig) -> HttpResponse {
    render(error, classify(error), None, config)
}

/// Same as [`handle_domain_error`] with the user-facing message replaced
pub fn handle_domain_error_with_message(
    error: &DomainError,
    message: &str,
    config: &ErrorConfig,
) -> HttpResponse {
    let mut classification = classify(error);
    classification.message = message.to_string();
    render(error, classification, None, config)
}

fn render(
    error: &DomainError,
    classification: Classification,
    detail: Option<&str>,
    config: &ErrorConfig,
) -> HttpResponse {
    log_error(error, classification.status);

    let status = classification.status;
    let debug = config.include_debug.then(|| match detail {
        Some(detail) => detail.to_string(),
        None => error.to_string(),
    });
    classification.into_response(debug).to_response(status)
}

fn log_error(error: &DomainError, status: StatusCode) {
    if status.is_server_error() {
        log::error!("Request failed with {}: {}", status, error);
    } else {
        log::debug!("Request rejected with {}: {}", status, error);
    }
}

/// A domain error carried through actix's error path.
///
/// Used where a handler cannot return a response directly, such as
/// middleware and extractors.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    error: DomainError,
    config: ErrorConfig,
    detail: Option<String>,
}

impl ApiError {
    pub fn new(error: DomainError, config: ErrorConfig) -> Self {
        Self {
            error,
            config,
            detail: None,
        }
    }

    /// Diagnostic text shown under `details.debug` in place of the error's own
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        classify(&self.error).status
    }

    fn error_response(&self) -> HttpResponse {
        render(
            &self.error,
            classify(&self.error),
            self.detail.as_deref(),
            &self.config,
        )
    }
}

fn request_error_config(req: &HttpRequest) -> ErrorConfig {
    req.app_data::<web::Data<ErrorConfig>>()
        .map(|config| *config.get_ref())
        .unwrap_or_default()
}

fn invalid_request(message: &str, detail: String, req: &HttpRequest) -> actix_web::Error {
    let error = DomainError::Validation {
        message: message.to_string(),
    };
    ApiError::new(error, request_error_config(req))
        .with_detail(detail)
        .into()
}

/// Routes JSON body extraction failures through the classification layer
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Request body must be JSON",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Request body is too large"
        }
        _ => "Invalid request body",
    };
    invalid_request(message, err.to_string(), req)
}

/// Routes path parameter extraction failures through the classification layer
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    invalid_request("Invalid path parameter", err.to_string(), req)
}

/// Routes query string extraction failures through the classification layer
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    invalid_request("Invalid query parameter", err.to_string(), req)
}
