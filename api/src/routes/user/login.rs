use actix_web::{web, HttpResponse};
use fm_core::errors::DomainError;
use fm_core::repositories::UserRepository;
use fm_core::services::market::MarketDataProvider;
use validator::Validate;

use crate::config::ErrorConfig;
use crate::dto::{into_validation_error, LoginRequest};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for POST /api/user/login
///
/// # Response
/// - 200 OK: `{id, name, email, token}`
/// - 400 Bad Request: Email or password missing
/// - 401 Unauthorized: Unknown email or wrong password, indistinguishably
pub async fn login<U, M>(
    state: web::Data<AppState<U, M>>,
    error_config: web::Data<ErrorConfig>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(error) => handle_domain_error(&error, &error_config),
    }
}
