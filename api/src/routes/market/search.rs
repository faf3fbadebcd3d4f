use actix_web::{web, HttpResponse};
use fm_core::repositories::UserRepository;
use fm_core::services::market::MarketDataProvider;

use crate::config::ErrorConfig;
use crate::dto::SearchQuery;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

/// Handler for GET /api/market/search?q=
pub async fn search_funds<U, M>(
    state: web::Data<AppState<U, M>>,
    error_config: web::Data<ErrorConfig>,
    query: web::Query<SearchQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    M: MarketDataProvider + 'static,
{
    match state.market_service.search(&query.q).await {
        Ok(results) => HttpResponse::Ok().json(results),
        Err(error) => handle_domain_error(&error, &error_config),
    }
}
