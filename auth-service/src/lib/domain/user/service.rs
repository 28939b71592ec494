use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::ClaimsIdentity;
use tokio::task;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for credential and identity operations.
///
/// Argon2 work runs on the blocking pool.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Identity store
    /// * `authenticator` - Password hashing and token minting
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        let hash = task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))??;

        Ok(hash)
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn login(
        &self,
        credentials: Credentials,
        app_id: Option<i32>,
    ) -> Result<String, UserError> {
        let Some(user) = self
            .repository
            .find_by_email(credentials.email.as_str())
            .await?
        else {
            let authenticator = Arc::clone(&self.authenticator);
            let password = credentials.password;

            task::spawn_blocking(move || authenticator.reject_unknown_account(&password))
                .await
                .map_err(|e| UserError::Unknown(format!("Authentication task failed: {}", e)))?;

            tracing::warn!(email = %credentials.email, ?app_id, "Login for unknown email");
            return Err(UserError::InvalidCredentials);
        };

        let authenticator = Arc::clone(&self.authenticator);
        let identity = user.claims_identity();
        let stored_hash = user.password_hash;
        let password = credentials.password;

        let result = task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &identity)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Authentication task failed: {}", e)))?;

        match result {
            Ok(authenticated) => {
                tracing::info!(user_id = %user.id, ?app_id, "User logged in");
                Ok(authenticated.access_token)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(user_id = %user.id, ?app_id, "Login with wrong password");
                Err(UserError::InvalidCredentials)
            }
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::error!(user_id = %user.id, error = %e, "Stored password hash is unusable");
                Err(UserError::Password(e))
            }
            Err(AuthenticationError::JwtError(e)) => {
                tracing::error!(user_id = %user.id, error = %e, "Token minting failed");
                Err(UserError::Token(e))
            }
        }
    }

    async fn register(&self, credentials: Credentials) -> Result<UserId, UserError> {
        // Hash before the lookup so both outcomes cost the same.
        let password_hash = self.hash_password(credentials.password).await?;

        if self
            .repository
            .find_by_email(credentials.email.as_str())
            .await?
            .is_some()
        {
            tracing::warn!(email = %credentials.email, "Registration for existing email");
            return Err(UserError::UserAlreadyExists(credentials.email.to_string()));
        }

        let user_id = self
            .repository
            .create(NewUser::new(credentials.email, password_hash))
            .await?;

        tracing::info!(user_id = %user_id, "User registered");

        Ok(user_id)
    }

    async fn fresh_identity(&self, caller: &ClaimsIdentity) -> Result<User, UserError> {
        match self.repository.find_by_id(UserId(caller.id)).await? {
            Some(user) => Ok(user),
            None => {
                tracing::warn!(user_id = caller.id, "Token subject no longer exists");
                Err(UserError::InvalidCredentials)
            }
        }
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, UserError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::UserNotFound(user_id.0))?;

        Ok(user.role.is_admin())
    }
}
