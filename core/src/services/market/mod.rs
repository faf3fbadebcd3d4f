//! Market data lookup
//!
//! Read-only search and NAV history for mutual funds, served from an
//! upstream provider behind the [`MarketDataProvider`] trait.

mod config;
mod service;
mod traits;

#[cfg(any(test, feature = "mocks"))]
mod mock;


pub use config::MarketServiceConfig;
pub use service::MarketService;
pub use traits::MarketDataProvider;

#[cfg(any(test, feature = "mocks"))]
pub use mock::MockMarketDataProvider;
