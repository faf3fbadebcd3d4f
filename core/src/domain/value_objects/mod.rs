//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod saved_funds;

// Re-export commonly used types
pub use auth_response::AuthResponse;
pub use saved_funds::{SavedFundList, SavedStatus};
