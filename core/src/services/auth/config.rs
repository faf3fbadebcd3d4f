//! Configuration for the authentication service

use fm_shared::config::AuthConfig;

/// Shortest password accepted at registration, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Minimum password length in characters
    pub min_password_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
            ..Default::default()
        }
    }
}
