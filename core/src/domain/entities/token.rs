//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

/// Default token lifetime (30 days)
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 30 * 24 * 60 * 60;

/// JWT issuer
pub const JWT_ISSUER: &str = "fundmate";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for `user_id` that expire `ttl_seconds` from now.
    ///
    /// Fails with [`TokenError::TokenGenerationFailed`] when the expiry falls
    /// outside the representable time range.
    pub fn new(user_id: Uuid, issuer: &str, ttl_seconds: i64) -> Result<Self, TokenError> {
        let now = Utc::now();
        let expiry = Duration::try_seconds(ttl_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or(TokenError::TokenGenerationFailed)?;

        Ok(Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// Checks if the claims have expired.
    ///
    /// A token is expired at its expiration instant, not only after it.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}
