//! API-layer configuration derived from the application config

pub mod error_config;

pub use error_config::ErrorConfig;
