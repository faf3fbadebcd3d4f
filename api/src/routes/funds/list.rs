use actix_web::{web, HttpResponse};
use fm_core::repositories::UserRepository;
use fm_core::services::market::MarketDataProvider;

use crate::config::ErrorConfig;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/funds
///
/// Returns `{count, funds}` with funds in the order they were saved.
pub async fn list_funds<U, M>(
    state: web::Data<AppState<U, M>>,
    error_config: web::Data<ErrorConfig>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MarketDataProvider + 'static,
{
    match state.fund_service.list(&auth.user).await {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(error) => handle_domain_error(&error, &error_config),
    }
}
