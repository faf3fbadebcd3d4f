use actix_web::{web, HttpResponse};
use fm_core::repositories::UserRepository;
use fm_core::services::market::MarketDataProvider;

use crate::config::ErrorConfig;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/funds/check-saved/{schemeCode}
///
/// Absence is `{"isSaved": false}`, never an error.
pub async fn check_saved<U, M>(
    state: web::Data<AppState<U, M>>,
    error_config: web::Data<ErrorConfig>,
    auth: AuthContext,
    scheme_code: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MarketDataProvider + 'static,
{
    match state.fund_service.check_saved(&auth.user, &scheme_code).await {
        Ok(status) => HttpResponse::Ok().json(status),
        Err(error) => handle_domain_error(&error, &error_config),
    }
}
