//! # Fundmate API
//!
//! actix-web presentation layer: routes, DTOs, the bearer token middleware and
//! the mapping from domain errors onto HTTP responses.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
