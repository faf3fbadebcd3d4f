use fm_shared::config::AppConfig;

/// Error response configuration options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorConfig {
    /// Attach internal diagnostic detail under `details.debug`
    pub include_debug: bool,
}

impl ErrorConfig {
    /// Create production configuration
    pub fn production() -> Self {
        Self {
            include_debug: false,
        }
    }

    /// Create development configuration
    pub fn development() -> Self {
        Self {
            include_debug: true,
        }
    }
}

impl From<&AppConfig> for ErrorConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            include_debug: config.expose_error_details(),
        }
    }
}
