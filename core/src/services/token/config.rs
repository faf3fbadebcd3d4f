//! Configuration for the token service

use fm_shared::config::JwtConfig;

use crate::domain::entities::token::{DEFAULT_TOKEN_TTL_SECONDS, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Value of the `iss` claim, checked on verification
    pub issuer: String,
    /// Token lifetime in seconds
    pub ttl_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            issuer: JWT_ISSUER.to_string(),
            ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }
}

impl TokenServiceConfig {
    /// Creates a config signing with `secret` and default lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Overrides the token lifetime
    pub fn with_ttl_seconds(mut self, ttl_seconds: i64) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            issuer: config.issuer.clone(),
            ttl_seconds: config.expiry_seconds,
        }
    }
}
