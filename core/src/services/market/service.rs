//! Market service implementation

use std::sync::Arc;

use crate::domain::entities::fund::{FundDetails, FundPerformance, FundSummary};
use crate::errors::{DomainResult, ValidationError};

use super::config::MarketServiceConfig;
use super::traits::MarketDataProvider;

/// Service exposing search and fund history from the market data provider
pub struct MarketService<M>
where
    M: MarketDataProvider,
{
    provider: Arc<M>,
    config: MarketServiceConfig,
}

impl<M> MarketService<M>
where
    M: MarketDataProvider,
{
    pub fn new(provider: Arc<M>, config: MarketServiceConfig) -> Self {
        Self { provider, config }
    }

    /// Searches scheme names; a blank query is rejected
    pub async fn search(&self, query: &str) -> DomainResult<Vec<FundSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "q".to_string(),
            }
            .into());
        }

        self.provider.search(query).await
    }

    /// Full metadata and NAV history for one scheme
    pub async fn details(&self, scheme_code: &str) -> DomainResult<FundDetails> {
        let scheme_code = require_scheme_code(scheme_code)?;
        self.provider.fund_details(scheme_code).await
    }

    /// Chart-ready view over the latest `window` NAV points
    ///
    /// # Arguments
    ///
    /// * `scheme_code` - Fund identifier
    /// * `window` - Number of points; the configured default when `None`
    pub async fn performance(
        &self,
        scheme_code: &str,
        window: Option<usize>,
    ) -> DomainResult<FundPerformance> {
        let window = window.unwrap_or(self.config.default_window);
        if window == 0 || window > self.config.max_window {
            return Err(ValidationError::InvalidFormat {
                field: "window".to_string(),
            }
            .into());
        }

        let details = self.details(scheme_code).await?;
        Ok(details.performance(window))
    }
}

fn require_scheme_code(scheme_code: &str) -> DomainResult<&str> {
    let scheme_code = scheme_code.trim();
    if scheme_code.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "schemeCode".to_string(),
        }
        .into());
    }
    if !scheme_code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "schemeCode".to_string(),
        }
        .into());
    }
    Ok(scheme_code)
}
