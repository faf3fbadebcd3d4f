//! In-memory market data provider for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::fund::{FundDetails, FundSummary};
use crate::errors::{DomainError, MarketError};

use super::traits::MarketDataProvider;

/// Serves canned fund data; can be switched into a failing mode
#[derive(Clone, Default)]
pub struct MockMarketDataProvider {
    funds: Arc<RwLock<HashMap<String, FundDetails>>>,
    unavailable: Arc<RwLock<bool>>,
}

impl MockMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `details` under its scheme code
    pub async fn insert(&self, details: FundDetails) {
        self.funds
            .write()
            .await
            .insert(details.meta.scheme_code.clone(), details);
    }

    /// Makes every call fail with an upstream error
    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().await = unavailable;
    }

    async fn check_available(&self) -> Result<(), DomainError> {
        if *self.unavailable.read().await {
            return Err(MarketError::Upstream {
                message: "provider unavailable".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl MarketDataProvider for MockMarketDataProvider {
    async fn search(&self, query: &str) -> Result<Vec<FundSummary>, DomainError> {
        self.check_available().await?;

        let needle = query.to_lowercase();
        let funds = self.funds.read().await;
        let mut hits: Vec<FundSummary> = funds
            .values()
            .filter(|d| d.meta.scheme_name.to_lowercase().contains(&needle))
            .map(|d| FundSummary {
                scheme_code: d.meta.scheme_code.clone(),
                scheme_name: d.meta.scheme_name.clone(),
            })
            .collect();
        hits.sort_by(|a, b| a.scheme_code.cmp(&b.scheme_code));
        Ok(hits)
    }

    async fn fund_details(&self, scheme_code: &str) -> Result<FundDetails, DomainError> {
        self.check_available().await?;

        self.funds
            .read()
            .await
            .get(scheme_code)
            .cloned()
            .ok_or_else(|| {
                MarketError::FundNotFound {
                    scheme_code: scheme_code.to_string(),
                }
                .into()
            })
    }
}
