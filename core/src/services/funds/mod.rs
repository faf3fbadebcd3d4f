//! Saved-funds management
//!
//! Save, list, remove and membership checks over the collection owned by an
//! already-resolved user. Uniqueness and existence are enforced by the
//! repository's conditional push/pull, so concurrent requests for the same
//! user cannot leave duplicate scheme codes behind.

mod service;

#[cfg(test)]
mod tests;

pub use service::{FundService, SaveFundInput};
