use actix_web::{web, HttpResponse};
use fm_core::errors::DomainError;
use fm_core::repositories::UserRepository;
use fm_core::services::market::MarketDataProvider;
use validator::Validate;

use crate::config::ErrorConfig;
use crate::dto::{into_validation_error, RegisterRequest};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for POST /api/user/register
///
/// Creates an account and returns its public identity with a token.
///
/// # Response
/// - 201 Created: `{id, name, email, token}`
/// - 400 Bad Request: Missing or malformed fields
/// - 409 Conflict: Email already registered
pub async fn register<U, M>(
    state: web::Data<AppState<U, M>>,
    error_config: web::Data<ErrorConfig>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MarketDataProvider + 'static,
{
    if let Err(errors) = request.validate() {
        let error = DomainError::from(into_validation_error(errors));
        return handle_domain_error(&error, &error_config);
    }

    match state
        .auth_service
        .register(&request.name, &request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Created().json(response),
        Err(error) => handle_domain_error(&error, &error_config),
    }
}
