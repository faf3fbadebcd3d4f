//! Authentication service module
//!
//! This module provides:
//! - Email and password registration and login
//! - Password hashing with bcrypt
//! - Bearer token resolution to a stored user (the request gate)

mod config;
mod resolver;
mod service;
mod validation;


pub use config::{AuthServiceConfig, MIN_PASSWORD_LENGTH};
pub use resolver::IdentityResolver;
pub use service::AuthService;
pub use validation::is_valid_email;
