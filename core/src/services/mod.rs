//! Business services containing domain logic and use cases.

pub mod auth;
pub mod funds;
pub mod market;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, IdentityResolver};
pub use funds::{FundService, SaveFundInput};
pub use market::{MarketDataProvider, MarketService, MarketServiceConfig};
pub use token::{TokenService, TokenServiceConfig};

#[cfg(any(test, feature = "mocks"))]
pub use market::MockMarketDataProvider;
