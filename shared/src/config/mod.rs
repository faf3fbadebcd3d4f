//! Configuration module with business-specific sub-modules
//!
//! - `auth` - JWT signing and password hashing
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `market_data` - Upstream mutual fund data provider
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod market_data;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, BCRYPT_COST_RANGE, MAX_TOKEN_EXPIRY_SECONDS};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use market_data::MarketDataConfig;
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Market data provider configuration
    #[serde(default)]
    pub market_data: MarketDataConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            market_data: MarketDataConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }

    /// Whether error responses may carry internal diagnostic detail
    pub fn expose_error_details(&self) -> bool {
        self.environment.is_development()
    }

    /// Checks that the configuration is safe to run with.
    ///
    /// Production must not run with the built-in JWT secret. Token lifetime
    /// and bcrypt cost must lie in the ranges the auth path can handle.
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            return Err("JWT_SECRET must be set in production".to_string());
        }
        let expiry = self.auth.jwt.expiry_seconds;
        if expiry <= 0 || expiry > MAX_TOKEN_EXPIRY_SECONDS {
            return Err(format!(
                "JWT_EXPIRY_SECONDS must be between 1 and {}",
                MAX_TOKEN_EXPIRY_SECONDS
            ));
        }
        if !BCRYPT_COST_RANGE.contains(&self.auth.bcrypt_cost) {
            return Err(format!(
                "BCRYPT_COST must be between {} and {}",
                BCRYPT_COST_RANGE.start(),
                BCRYPT_COST_RANGE.end()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_outside_production() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.expose_error_details());
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let config = AppConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(!config.expose_error_details());

        let config = AppConfig {
            environment: Environment::Production,
            auth: AuthConfig {
                jwt: JwtConfig::new("a-real-secret"),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_token_expiry_must_be_bounded() {
        let mut config = AppConfig::default();
        config.auth.jwt.expiry_seconds = 0;
        assert!(config.validate().is_err());

        config.auth.jwt.expiry_seconds = i64::MAX / 10;
        assert!(config.validate().is_err());

        config.auth.jwt.expiry_seconds = MAX_TOKEN_EXPIRY_SECONDS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bcrypt_cost_must_be_in_range() {
        let mut config = AppConfig::default();
        for cost in [0, 3, 32, 100] {
            config.auth.bcrypt_cost = cost;
            assert!(config.validate().is_err(), "cost {} accepted", cost);
        }
        for cost in [4, 10, 31] {
            config.auth.bcrypt_cost = cost;
            assert!(config.validate().is_ok());
        }
    }
}
