use actix_web::{web, HttpResponse};
use fm_core::repositories::UserRepository;
use fm_core::services::market::MarketDataProvider;

use crate::config::ErrorConfig;
use crate::dto::RemoveFundResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for DELETE /api/funds/{schemeCode}
///
/// # Response
/// - 200 OK: `{schemeCode, message}`
/// - 404 Not Found: Code not in the collection; nothing written
pub async fn remove_fund<U, M>(
    state: web::Data<AppState<U, M>>,
    error_config: web::Data<ErrorConfig>,
    auth: AuthContext,
    scheme_code: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MarketDataProvider + 'static,
{
    match state.fund_service.remove(&auth.user, &scheme_code).await {
        Ok(removed) => HttpResponse::Ok().json(RemoveFundResponse::new(removed)),
        Err(error) => handle_domain_error(&error, &error_config),
    }
}
