//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::NaiveDate;
use uuid::Uuid;

use fm_api::AppState;
use fm_core::domain::entities::fund::{FundDetails, FundMeta, NavPoint};
use fm_core::repositories::MockUserRepository;
use fm_core::services::market::MockMarketDataProvider;
use fm_core::services::token::{TokenService, TokenServiceConfig};
use fm_shared::config::AppConfig;

pub type TestState = AppState<MockUserRepository, MockMarketDataProvider>;

pub struct TestContext {
    pub config: AppConfig,
    pub users: MockUserRepository,
    pub market: MockMarketDataProvider,
    pub state: web::Data<TestState>,
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.bcrypt_cost = 4;
    config
}

pub fn context() -> TestContext {
    context_with(test_config())
}

pub fn context_with(config: AppConfig) -> TestContext {
    let users = MockUserRepository::new();
    let market = MockMarketDataProvider::new();
    let state = web::Data::new(AppState::new(
        Arc::new(users.clone()),
        Arc::new(market.clone()),
        &config,
    ));

    TestContext {
        config,
        users,
        market,
        state,
    }
}

impl TestContext {
    /// Registers a user directly through the auth service and returns its token
    pub async fn register(&self, name: &str, email: &str) -> (Uuid, String) {
        let response = self
            .state
            .auth_service
            .register(name, email, "secret1")
            .await
            .unwrap();
        (response.id, response.token)
    }

    /// A correctly signed token that expired a minute ago
    pub fn expired_token(&self, user_id: Uuid) -> String {
        let config = TokenServiceConfig::from(&self.config.auth.jwt).with_ttl_seconds(-60);
        TokenService::new(config).issue(user_id).unwrap()
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Flips the first character of the signature segment
pub fn corrupt_signature(token: &str) -> String {
    let (head, signature) = token.rsplit_once('.').unwrap();
    let mut chars: Vec<char> = signature.chars().collect();
    chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
    format!("{}.{}", head, chars.into_iter().collect::<String>())
}

pub fn fund_details(code: &str, name: &str, navs: &[f64]) -> FundDetails {
    let newest = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    FundDetails {
        meta: FundMeta {
            scheme_code: code.to_string(),
            scheme_name: name.to_string(),
            fund_house: Some("Example AMC".to_string()),
            scheme_type: Some("Open Ended Schemes".to_string()),
            scheme_category: Some("Equity Scheme - Large Cap Fund".to_string()),
        },
        nav_history: navs
            .iter()
            .enumerate()
            .map(|(i, nav)| NavPoint {
                date: newest - chrono::Duration::days(i as i64),
                nav: *nav,
            })
            .collect(),
    }
}
