//! Main token service implementation

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying bearer tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a token whose subject is `user_id`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed compact JWT
    /// * `Err(TokenError::TokenGenerationFailed)` - Expiry out of range or signing failed
    pub fn issue(&self, user_id: Uuid) -> Result<String, DomainError> {
        let ttl_seconds = self.config.ttl_seconds;
        let claims = Claims::new(user_id, &self.config.issuer, ttl_seconds).map_err(|e| {
            tracing::error!(ttl_seconds, "Token expiry out of range");
            DomainError::Token(e)
        })?;
        self.encode_jwt(&claims)
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verifies a token and returns the decoded claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature valid and not expired
    /// * `Err(TokenError::InvalidSignature)` - Signed with another key or tampered with
    /// * `Err(TokenError::TokenExpired)` - Current time is at or past `exp`
    /// * `Err(TokenError::InvalidTokenFormat)` - Anything else
    pub fn verify_claims(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                JwtErrorKind::InvalidSignature => DomainError::Token(TokenError::InvalidSignature),
                _ => DomainError::Token(TokenError::InvalidTokenFormat),
            })?;

        // The decoder accepts exp == now
        if token_data.claims.is_expired() {
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        Ok(token_data.claims)
    }

    /// Verifies a token and returns the user id it was issued for
    pub fn verify(&self, token: &str) -> Result<Uuid, DomainError> {
        let claims = self.verify_claims(token)?;
        claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidTokenFormat))
    }
}
