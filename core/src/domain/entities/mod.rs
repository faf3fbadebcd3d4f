//! Domain entities representing core business objects.

pub mod fund;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

pub use fund::{FundDetails, FundMeta, FundPerformance, FundSummary, NavPoint, PerformanceSummary};
pub use token::{Claims, DEFAULT_TOKEN_TTL_SECONDS, JWT_ISSUER};
pub use user::{normalize_email, SavedFund, User};
