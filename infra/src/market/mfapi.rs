//! HTTP implementation of [`MarketDataProvider`]

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use fm_core::domain::entities::fund::{FundDetails, FundSummary};
use fm_core::errors::{DomainError, MarketError};
use fm_core::services::market::MarketDataProvider;
use fm_shared::config::MarketDataConfig;

use crate::InfrastructureError;

use super::dto::{into_details, into_summaries, SchemeResponseDto, SearchHitDto};

/// Client for `GET /mf/search?q=` and `GET /mf/{schemeCode}`
#[derive(Clone)]
pub struct MfApiClient {
    client: Client,
    base_url: String,
}

impl MfApiClient {
    /// Builds a client with the configured base URL and request timeout
    pub fn new(config: &MarketDataConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("fundmate/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn upstream(message: impl Into<String>) -> DomainError {
        let message = message.into();
        tracing::error!(error = %message, "Market data request failed");
        MarketError::Upstream { message }.into()
    }
}

#[async_trait]
impl MarketDataProvider for MfApiClient {
    async fn search(&self, query: &str) -> Result<Vec<FundSummary>, DomainError> {
        let url = format!("{}/mf/search", self.base_url);
        tracing::debug!(query = query, "Searching schemes");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| Self::upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::upstream(format!(
                "search returned status {}",
                response.status()
            )));
        }

        let hits: Vec<SearchHitDto> = response
            .json()
            .await
            .map_err(|e| Self::upstream(e.to_string()))?;

        Ok(into_summaries(hits))
    }

    async fn fund_details(&self, scheme_code: &str) -> Result<FundDetails, DomainError> {
        let url = format!("{}/mf/{}", self.base_url, scheme_code);
        tracing::debug!(scheme_code = scheme_code, "Fetching scheme details");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::upstream(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                return Err(MarketError::FundNotFound {
                    scheme_code: scheme_code.to_string(),
                }
                .into())
            }
            status if !status.is_success() => {
                return Err(Self::upstream(format!(
                    "scheme lookup returned status {}",
                    status
                )))
            }
            _ => {}
        }

        let body: SchemeResponseDto = response
            .json()
            .await
            .map_err(|e| Self::upstream(e.to_string()))?;

        into_details(scheme_code, body)
    }
}
