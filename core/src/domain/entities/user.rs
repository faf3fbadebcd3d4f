//! User entity representing a registered Fundmate account and the funds it
//! has saved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A mutual fund bookmarked by a user.
///
/// Entries are owned by exactly one [`User`] and are never edited in place:
/// they are created by a save and destroyed by a remove.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFund {
    /// External fund identifier from the market data provider
    pub scheme_code: String,

    /// Display name of the scheme
    pub scheme_name: String,

    /// Asset management company, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund_house: Option<String>,

    /// Scheme category, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_category: Option<String>,

    /// When the fund was saved
    pub saved_at: DateTime<Utc>,
}

impl SavedFund {
    /// Creates a new saved fund entry stamped with the current time
    pub fn new(scheme_code: String, scheme_name: String) -> Self {
        Self {
            scheme_code,
            scheme_name,
            fund_house: None,
            scheme_category: None,
            saved_at: Utc::now(),
        }
    }

    /// Sets the optional descriptive fields
    pub fn with_details(
        mut self,
        fund_house: Option<String>,
        scheme_category: Option<String>,
    ) -> Self {
        self.fund_house = fund_house;
        self.scheme_category = scheme_category;
        self
    }
}

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Normalized (trimmed, lower-cased) email, unique across users
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Saved funds in insertion order, unique by scheme code
    pub saved_funds: Vec<SavedFund>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with no saved funds
    pub fn new(name: String, email: &str, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email: normalize_email(email),
            password_hash,
            saved_funds: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the saved entry for `scheme_code`, if any
    pub fn saved_fund(&self, scheme_code: &str) -> Option<&SavedFund> {
        self.saved_funds
            .iter()
            .find(|fund| fund.scheme_code == scheme_code)
    }

    /// Checks whether `scheme_code` is in the saved collection
    pub fn has_saved(&self, scheme_code: &str) -> bool {
        self.saved_fund(scheme_code).is_some()
    }

    /// Appends `fund` unless its scheme code is already present.
    ///
    /// Returns `false` and leaves the collection untouched on a duplicate.
    pub fn push_saved_fund(&mut self, fund: SavedFund) -> bool {
        if self.has_saved(&fund.scheme_code) {
            return false;
        }
        self.saved_funds.push(fund);
        self.updated_at = Utc::now();
        true
    }

    /// Drops every entry matching `scheme_code`, keeping the relative order
    /// of the rest. Returns `false` when nothing matched.
    pub fn pull_saved_fund(&mut self, scheme_code: &str) -> bool {
        let initial_len = self.saved_funds.len();
        self.saved_funds.retain(|fund| fund.scheme_code != scheme_code);

        if self.saved_funds.len() == initial_len {
            return false;
        }
        self.updated_at = Utc::now();
        true
    }
}

/// Normalizes an email address for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
