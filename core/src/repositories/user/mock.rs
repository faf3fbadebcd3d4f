//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::{SavedFund, User};
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// In-memory user repository.
///
/// Every mutation runs under a single write lock, which makes the conditional
/// push/pull atomic per user.
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    writes: Arc<AtomicUsize>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a user outright, simulating deletion after token issuance
    pub async fn remove_user(&self, id: Uuid) -> bool {
        self.users.write().await.remove(&id).is_some()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Conflict {
                fields: vec!["email".to_string()],
            });
        }

        users.insert(user.id, user.clone());
        self.record_write();
        Ok(user)
    }

    async fn add_saved_fund(&self, user_id: Uuid, fund: SavedFund) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&user_id).ok_or_else(|| DomainError::NotFound {
            resource: "User".to_string(),
        })?;

        let added = user.push_saved_fund(fund);
        if added {
            self.record_write();
        }
        Ok(added)
    }

    async fn remove_saved_fund(
        &self,
        user_id: Uuid,
        scheme_code: &str,
    ) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&user_id).ok_or_else(|| DomainError::NotFound {
            resource: "User".to_string(),
        })?;

        let removed = user.pull_saved_fund(scheme_code);
        if removed {
            self.record_write();
        }
        Ok(removed)
    }
}
