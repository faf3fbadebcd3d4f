//! Main authentication service implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::user::{normalize_email, User};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::resolver::IdentityResolver;
use super::validation::{check_login, check_registration};

/// Authentication service for registration, login and token resolution
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            config,
        }
    }

    /// Register a new account and issue its first token
    ///
    /// This method:
    /// 1. Validates name, email and password
    /// 2. Rejects an email that is already registered
    /// 3. Hashes the password off the async executor
    /// 4. Stores the user; the store's unique constraint catches racing registrations
    /// 5. Issues a token for the new user
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Public identity plus token
    /// * `Err(DomainError::ValidationErr)` - Input rejected
    /// * `Err(DomainError::Conflict)` - Email already taken, `fields == ["email"]`
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        check_registration(name, email, password, self.config.min_password_length)?;

        let email = normalize_email(email);
        if self.user_repository.exists_by_email(&email).await? {
            return Err(DomainError::Conflict {
                fields: vec!["email".to_string()],
            });
        }

        let password_hash = self.hash_password(password).await?;
        let user = User::new(name.trim().to_string(), &email, password_hash);
        let user = self.user_repository.create(user).await?;

        tracing::info!(user_id = %user.id, "User registered");

        let token = self.token_service.issue(user.id)?;
        Ok(AuthResponse::new(&user, token))
    }

    /// Log in with email and password
    ///
    /// Unknown email and wrong password fail identically with
    /// `AuthError::InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        check_login(email, password)?;

        let email = normalize_email(email);
        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                tracing::debug!("Login attempt for unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.verify_password(password, &user.password_hash).await? {
            tracing::debug!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = %user.id, "User logged in");

        let token = self.token_service.issue(user.id)?;
        Ok(AuthResponse::new(&user, token))
    }

    /// Resolve a bearer token to the stored user
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - Token valid and user exists
    /// * `Err(AuthError::MissingToken)` - No token supplied
    /// * `Err(DomainError::Token(_))` - Expired, tampered or malformed token
    /// * `Err(AuthError::UnknownUser)` - Token subject no longer exists
    pub async fn authenticate(&self, token: Option<&str>) -> DomainResult<User> {
        let token = token.ok_or(AuthError::MissingToken)?;

        let user_id = self.token_service.verify(token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected bearer token");
            e
        })?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Token subject does not exist");
                AuthError::UnknownUser.into()
            })
    }

    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let password = password.to_string();
        let cost = self.config.bcrypt_cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Password check task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Password check failed: {}", e)))
    }
}

#[async_trait]
impl<U> IdentityResolver for AuthService<U>
where
    U: UserRepository,
{
    async fn resolve(&self, token: Option<&str>) -> Result<User, DomainError> {
        self.authenticate(token).await
    }
}
