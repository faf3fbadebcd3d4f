//! Read models over a user's saved-fund collection.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::SavedFund;

/// The full collection in insertion order, with its size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFundList {
    pub count: usize,
    pub funds: Vec<SavedFund>,
}

impl SavedFundList {
    pub fn new(funds: Vec<SavedFund>) -> Self {
        Self {
            count: funds.len(),
            funds,
        }
    }
}

/// Membership answer for one scheme code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedStatus {
    pub is_saved: bool,
    pub scheme_code: String,
}
