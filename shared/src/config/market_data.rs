//! Market data provider configuration

use serde::{Deserialize, Serialize};

/// Upstream mutual fund data provider settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarketDataConfig {
    /// Base URL of the provider API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// Number of NAV points in a performance window
    #[serde(default = "default_performance_window")]
    pub performance_window: usize,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://api.mfapi.in"),
            timeout_seconds: 10,
            performance_window: default_performance_window(),
        }
    }
}

impl MarketDataConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var("MARKET_DATA_BASE_URL").unwrap_or(defaults.base_url);
        let timeout_seconds = std::env::var("MARKET_DATA_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_seconds);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds,
            performance_window: defaults.performance_window,
        }
    }
}

fn default_performance_window() -> usize {
    30
}
