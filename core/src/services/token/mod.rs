//! Token service module for JWT management
//!
//! Issues HS256-signed bearer tokens carrying a user id and verifies them,
//! rejecting tokens that are expired, tampered with, or malformed.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
