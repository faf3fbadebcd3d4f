//! Public read-only proxy over the market data provider

pub mod fund;
pub mod search;

pub use fund::fund_performance;
pub use search::search_funds;
