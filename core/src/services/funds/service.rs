//! Saved-funds service implementation

use std::sync::Arc;

use crate::domain::entities::user::{SavedFund, User};
use crate::domain::value_objects::{SavedFundList, SavedStatus};
use crate::errors::{AuthError, DomainResult, FundError, ValidationError};
use crate::repositories::UserRepository;

const MAX_SCHEME_CODE_LENGTH: usize = 64;
const MAX_SCHEME_NAME_LENGTH: usize = 512;
const MAX_DETAIL_LENGTH: usize = 255;

/// Fields accepted when saving a fund
#[derive(Debug, Clone, Default)]
pub struct SaveFundInput {
    pub scheme_code: String,
    pub scheme_name: String,
    pub fund_house: Option<String>,
    pub scheme_category: Option<String>,
}

impl SaveFundInput {
    pub fn new(scheme_code: impl Into<String>, scheme_name: impl Into<String>) -> Self {
        Self {
            scheme_code: scheme_code.into(),
            scheme_name: scheme_name.into(),
            ..Default::default()
        }
    }
}

/// Service managing a user's saved funds
pub struct FundService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
}

impl<U> FundService<U>
where
    U: UserRepository,
{
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Appends a fund to the user's collection
    ///
    /// # Returns
    ///
    /// * `Ok(SavedFund)` - The stored entry
    /// * `Err(DomainError::ValidationErr)` - Scheme code or name missing, or a
    ///   field longer than the store accepts
    /// * `Err(FundError::AlreadySaved)` - Code already in the collection; nothing changed
    pub async fn save(&self, user: &User, input: SaveFundInput) -> DomainResult<SavedFund> {
        let scheme_code = input.scheme_code.trim();
        let scheme_name = input.scheme_name.trim();

        let mut errors = Vec::new();
        if scheme_code.is_empty() {
            errors.push(ValidationError::RequiredField {
                field: "schemeCode".to_string(),
            });
        }
        if scheme_name.is_empty() {
            errors.push(ValidationError::RequiredField {
                field: "schemeName".to_string(),
            });
        }
        if let Some(error) = ValidationError::combine(errors) {
            return Err(error.into());
        }

        let fund_house = non_blank(input.fund_house);
        let scheme_category = non_blank(input.scheme_category);

        check_length("schemeCode", scheme_code, MAX_SCHEME_CODE_LENGTH)?;
        check_length("schemeName", scheme_name, MAX_SCHEME_NAME_LENGTH)?;
        for (field, value) in [("fundHouse", &fund_house), ("schemeCategory", &scheme_category)] {
            if let Some(value) = value {
                check_length(field, value, MAX_DETAIL_LENGTH)?;
            }
        }

        let fund = SavedFund::new(scheme_code.to_string(), scheme_name.to_string())
            .with_details(fund_house, scheme_category);

        if !self
            .user_repository
            .add_saved_fund(user.id, fund.clone())
            .await?
        {
            return Err(FundError::AlreadySaved {
                scheme_code: fund.scheme_code,
            }
            .into());
        }

        tracing::info!(user_id = %user.id, scheme_code = %fund.scheme_code, "Fund saved");
        Ok(fund)
    }

    /// Returns the stored collection in insertion order
    pub async fn list(&self, user: &User) -> DomainResult<SavedFundList> {
        let current = self.reload(user).await?;
        Ok(SavedFundList::new(current.saved_funds))
    }

    /// Removes `scheme_code` from the collection
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The removed scheme code
    /// * `Err(FundError::NotSaved)` - No entry matched; nothing written
    pub async fn remove(&self, user: &User, scheme_code: &str) -> DomainResult<String> {
        let scheme_code = scheme_code.trim();
        if scheme_code.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "schemeCode".to_string(),
            }
            .into());
        }

        if !self
            .user_repository
            .remove_saved_fund(user.id, scheme_code)
            .await?
        {
            return Err(FundError::NotSaved {
                scheme_code: scheme_code.to_string(),
            }
            .into());
        }

        tracing::info!(user_id = %user.id, scheme_code = %scheme_code, "Fund removed");
        Ok(scheme_code.to_string())
    }

    /// Membership test; absence is a normal `false`
    pub async fn check_saved(&self, user: &User, scheme_code: &str) -> DomainResult<SavedStatus> {
        let scheme_code = scheme_code.trim();
        let current = self.reload(user).await?;

        Ok(SavedStatus {
            is_saved: current.has_saved(scheme_code),
            scheme_code: scheme_code.to_string(),
        })
    }

    // The gate's copy may predate a mutation made earlier in the same flow
    async fn reload(&self, user: &User) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user.id)
            .await?
            .ok_or_else(|| AuthError::UnknownUser.into())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
            actual,
        });
    }
    Ok(())
}
