use actix_web::{web, HttpResponse};
use fm_core::repositories::UserRepository;
use fm_core::services::market::MarketDataProvider;

use crate::config::ErrorConfig;
use crate::dto::PerformanceQuery;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for GET /api/market/funds/{schemeCode}?window=
///
/// # Response
/// - 200 OK: `{meta, points, summary}` with points oldest first
/// - 400 Bad Request: Malformed scheme code or window
/// - 404 Not Found: Unknown scheme
/// - 502 Bad Gateway: Provider unavailable
pub async fn fund_performance<U, M>(
    state: web::Data<AppState<U, M>>,
    error_config: web::Data<ErrorConfig>,
    scheme_code: web::Path<String>,
    query: web::Query<PerformanceQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MarketDataProvider + 'static,
{
    match state
        .market_service
        .performance(&scheme_code, query.window)
        .await
    {
        Ok(performance) => HttpResponse::Ok().json(performance),
        Err(error) => handle_domain_error(&error, &error_config),
    }
}
