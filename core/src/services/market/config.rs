//! Configuration for the market service

use fm_shared::config::MarketDataConfig;

/// Configuration for the market service
#[derive(Debug, Clone)]
pub struct MarketServiceConfig {
    /// NAV points in a performance view when the caller gives none
    pub default_window: usize,
    /// Upper bound on a requested window
    pub max_window: usize,
}

impl Default for MarketServiceConfig {
    fn default() -> Self {
        Self {
            default_window: 30,
            max_window: 5000,
        }
    }
}

impl From<&MarketDataConfig> for MarketServiceConfig {
    fn from(config: &MarketDataConfig) -> Self {
        Self {
            default_window: config.performance_window,
            ..Default::default()
        }
    }
}
