//! Object-safe view of the request gate

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Resolves an optional bearer token to the acting user.
///
/// The HTTP layer holds this as `Arc<dyn IdentityResolver>` so it does not
/// need to know the repository type behind the auth service.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// `None` means the request carried no usable bearer token
    async fn resolve(&self, token: Option<&str>) -> Result<User, DomainError>;
}
