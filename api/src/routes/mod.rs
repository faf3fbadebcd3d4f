//! Route handlers grouped by resource

pub mod funds;
pub mod market;
pub mod user;

use std::sync::Arc;

use fm_core::repositories::UserRepository;
use fm_core::services::auth::{AuthService, AuthServiceConfig, IdentityResolver};
use fm_core::services::funds::FundService;
use fm_core::services::market::{MarketDataProvider, MarketService, MarketServiceConfig};
use fm_core::services::token::{TokenService, TokenServiceConfig};
use fm_shared::config::{AppConfig, CorsConfig, Environment};

use crate::config::ErrorConfig;

/// Application state shared by every worker
pub struct AppState<U, M>
where
    U: UserRepository,
    M: MarketDataProvider,
{
    pub auth_service: Arc<AuthService<U>>,
    pub fund_service: Arc<FundService<U>>,
    pub market_service: Arc<MarketService<M>>,
    pub error_config: ErrorConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    pub max_payload_size: usize,
}

impl<U, M> AppState<U, M>
where
    U: UserRepository + 'static,
    M: MarketDataProvider + 'static,
{
    /// Wires the services over the given store and market data provider
    pub fn new(user_repository: Arc<U>, market_provider: Arc<M>, config: &AppConfig) -> Self {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt)));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            token_service,
            AuthServiceConfig::from(&config.auth),
        ));
        let fund_service = Arc::new(FundService::new(user_repository));
        let market_service = Arc::new(MarketService::new(
            market_provider,
            MarketServiceConfig::from(&config.market_data),
        ));

        Self {
            auth_service,
            fund_service,
            market_service,
            error_config: ErrorConfig::from(config),
            cors: config.cors.clone(),
            environment: config.environment,
            max_payload_size: config.server.max_payload_size,
        }
    }

    /// The Auth Gate's view of the auth service
    pub fn identity_resolver(&self) -> Arc<dyn IdentityResolver> {
        self.auth_service.clone()
    }
}
