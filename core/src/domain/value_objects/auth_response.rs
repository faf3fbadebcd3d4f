//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Authentication response returned by registration and login
///
/// Carries the public identity of the account plus a freshly issued bearer
/// token. The password hash never appears here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// User ID
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Normalized email
    pub email: String,

    /// Bearer token for subsequent requests
    pub token: String,
}

impl AuthResponse {
    /// Creates an authentication response for `user`
    ///
    /// # Arguments
    ///
    /// * `user` - The authenticated user
    /// * `token` - Token issued for the user
    pub fn new(user: &User, token: String) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            token,
        }
    }
}
