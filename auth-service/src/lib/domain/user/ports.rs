use async_trait::async_trait;
use auth::ClaimsIdentity;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for credential and identity operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Verify credentials and mint a token.
    ///
    /// # Arguments
    /// * `credentials` - Validated email and password
    /// * `app_id` - Opaque client tag, only recorded in logs
    ///
    /// # Returns
    /// Signed token embedding id, email and role
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, indistinguishably
    /// * `Database` - Store lookup failed
    async fn login(&self, credentials: Credentials, app_id: Option<i32>)
        -> Result<String, UserError>;

    /// Create an account with the default role.
    ///
    /// # Returns
    /// Store-assigned user id
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email is already registered
    /// * `Database` - Store operation failed
    async fn register(&self, credentials: Credentials) -> Result<UserId, UserError>;

    /// Re-read the caller's record from the store.
    ///
    /// Token claims are only a snapshot; this returns the current record.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Record no longer exists
    /// * `Database` - Store lookup failed
    async fn fresh_identity(&self, caller: &ClaimsIdentity) -> Result<User, UserError>;

    /// Check the stored role of a user.
    ///
    /// # Errors
    /// * `UserNotFound` - No record with this id
    /// * `Database` - Store lookup failed
    async fn is_admin(&self, user_id: UserId) -> Result<bool, UserError>;
}

/// Persistence operations for identity records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Insert a new record.
    ///
    /// # Returns
    /// Assigned user id
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email uniqueness constraint violated
    /// * `Database` - Insert failed
    async fn create(&self, user: NewUser) -> Result<UserId, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by exact email.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
