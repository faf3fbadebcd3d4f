use actix_web::{web, HttpResponse};
use fm_core::errors::{DomainError, ValidationError};
use fm_core::repositories::UserRepository;
use fm_core::services::market::MarketDataProvider;

use crate::config::ErrorConfig;
use crate::dto::{SaveFundRequest, SaveFundResponse};
use crate::handlers::error::{handle_domain_error, handle_domain_error_with_message};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

const MISSING_FIELDS_MESSAGE: &str = "Please include both schemeCode and schemeName";

/// Handler for POST /api/funds
///
/// # Response
/// - 201 Created: `{schemeCode, schemeName, fundHouse?, schemeCategory?, message}`
/// - 400 Bad Request: `schemeCode` or `schemeName` missing, or a field too long
/// - 409 Conflict: Fund already in the collection
pub async fn save_fund<U, M>(
    state: web::Data<AppState<U, M>>,
    error_config: web::Data<ErrorConfig>,
    auth: AuthContext,
    request: web::Json<SaveFundRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MarketDataProvider + 'static,
{
    match state
        .fund_service
        .save(&auth.user, request.into_inner().into())
        .await
    {
        Ok(fund) => HttpResponse::Created().json(SaveFundResponse::from(fund)),
        Err(
            error @ DomainError::ValidationErr(
                ValidationError::RequiredField { .. } | ValidationError::Fields { .. },
            ),
        ) => {
            handle_domain_error_with_message(&error, MISSING_FIELDS_MESSAGE, &error_config)
        }
        Err(error) => handle_domain_error(&error, &error_config),
    }
}
