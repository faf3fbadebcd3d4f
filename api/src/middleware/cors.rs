//! CORS middleware configuration for cross-origin requests.
//!
//! Development accepts any origin. Other environments accept the configured
//! origins, or any origin when none are configured.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use fm_shared::config::{CorsConfig, Environment};

/// Creates a CORS middleware instance for `environment`
pub fn create_cors(config: &CorsConfig, environment: Environment) -> Cors {
    if environment.is_development() || config.allowed_origins.is_empty() {
        create_permissive_cors(config.max_age)
    } else {
        create_restricted_cors(config)
    }
}

fn create_permissive_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS to allow any origin");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(allowed_headers())
        .max_age(max_age)
}

fn create_restricted_cors(config: &CorsConfig) -> Cors {
    log::info!("Configuring CORS for {} origin(s)", config.allowed_origins.len());

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(allowed_headers())
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}

fn allowed_methods() -> Vec<Method> {
    vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS]
}

fn allowed_headers() -> Vec<header::HeaderName> {
    vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE]
}
