//! Traits for market data provider integration

use async_trait::async_trait;

use crate::domain::entities::fund::{FundDetails, FundSummary};
use crate::errors::DomainError;

/// Trait for the upstream mutual fund data source
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Free-text search over scheme names
    async fn search(&self, query: &str) -> Result<Vec<FundSummary>, DomainError>;

    /// Metadata and NAV history (newest first) for one scheme
    ///
    /// Fails with `MarketError::FundNotFound` when the provider has no data
    /// for `scheme_code`.
    async fn fund_details(&self, scheme_code: &str) -> Result<FundDetails, DomainError>;
}
