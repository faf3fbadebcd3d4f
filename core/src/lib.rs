//! # Fundmate Core
//!
//! Core business logic and domain layer for the Fundmate backend.
//! This crate contains domain entities, business services, repository and
//! provider interfaces, and the error taxonomy shared by every outer layer.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
