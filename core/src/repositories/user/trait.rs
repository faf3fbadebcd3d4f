//! User repository trait defining the interface for user data persistence.
//!
//! A user and its saved-fund collection form one unit of storage. Mutations
//! of the collection are exposed as conditional push/pull operations so that
//! each implementation can apply them atomically for a single user instead of
//! the caller doing read-modify-write.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::{SavedFund, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user, including saved funds in insertion order
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check if a user exists with the given normalized email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Conflict)` - The email is already taken; `fields`
    ///   names the violated unique columns
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Append `fund` to the user's collection unless an entry with the same
    /// scheme code exists. The check and the append are one atomic step.
    ///
    /// # Returns
    /// * `Ok(true)` - Appended
    /// * `Ok(false)` - Already present; nothing changed
    /// * `Err(DomainError::NotFound)` - No such user
    async fn add_saved_fund(&self, user_id: Uuid, fund: SavedFund) -> Result<bool, DomainError>;

    /// Remove every entry with `scheme_code` from the user's collection,
    /// keeping the relative order of the others.
    ///
    /// # Returns
    /// * `Ok(true)` - At least one entry removed
    /// * `Ok(false)` - No entry matched; nothing written
    async fn remove_saved_fund(&self, user_id: Uuid, scheme_code: &str)
        -> Result<bool, DomainError>;
}
