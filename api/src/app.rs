//! Application factory
//!
//! Builds the actix-web [`App`] over an [`AppState`]: middleware, extractor
//! error handling and the route table.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpResponse,
};

use fm_core::repositories::UserRepository;
use fm_core::services::market::MarketDataProvider;

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::error::{json_error_handler, path_error_handler, query_error_handler};
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{funds, market, user, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, M>(
    app_state: web::Data<AppState<U, M>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    M: MarketDataProvider + 'static,
{
    let cors = create_cors(&app_state.cors, app_state.environment);
    let resolver = web::Data::new(app_state.identity_resolver());
    let error_config = web::Data::new(app_state.error_config);
    let max_payload_size = app_state.max_payload_size;

    App::new()
        .app_data(app_state)
        .app_data(resolver)
        .app_data(error_config)
        .app_data(
            web::JsonConfig::default()
                .limit(max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(cors)
        .wrap(Logger::default())
        .route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/user")
                .route("/register", web::post().to(user::register::<U, M>))
                .route("/login", web::post().to(user::login::<U, M>))
                .service(
                    web::resource("/me")
                        .wrap(JwtAuth::new())
                        .route(web::get().to(user::me)),
                ),
        )
        .service(
            web::scope("/api/funds")
                .wrap(JwtAuth::new())
                .route("", web::post().to(funds::save_fund::<U, M>))
                .route("", web::get().to(funds::list_funds::<U, M>))
                .route("/{schemeCode}", web::delete().to(funds::remove_fund::<U, M>))
                .route(
                    "/check-saved/{schemeCode}",
                    web::get().to(funds::check_saved::<U, M>),
                ),
        )
        .service(
            web::scope("/api/market")
                .route("/search", web::get().to(market::search_funds::<U, M>))
                .route(
                    "/funds/{schemeCode}",
                    web::get().to(market::fund_performance::<U, M>),
                ),
        )
        .default_service(web::route().to(not_found))
}

async fn root() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("API is running...")
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "fundmate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "The requested resource was not found")
        .to_response(actix_web::http::StatusCode::NOT_FOUND)
}
