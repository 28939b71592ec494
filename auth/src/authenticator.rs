use std::sync::Arc;

use chrono::Duration;

use crate::guard::AuthorizationGuard;
use crate::jwt::Claims;
use crate::jwt::ClaimsIdentity;
use crate::jwt::JwtError;
use crate::jwt::TokenIssuer;
use crate::jwt::TokenValidator;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Well-formed PHC string with the hasher's cost parameters. No password
/// matches it; verifying against it costs the same as a real check.
const UNKNOWN_ACCOUNT_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$AAAAAAAAAAAAAAAAAAAAAA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Credential checking and token minting for the identity service.
///
/// Owns the signing key. Verification goes through a shared
/// [`TokenValidator`] so the same key material backs both the login path
/// and the authorization guard.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    issuer: TokenIssuer,
    validator: Arc<TokenValidator>,
    token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Signed EdDSA token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `issuer` - Signing side, holds the private key
    /// * `validator` - Verifying side, holds the matching public key
    /// * `token_ttl` - Lifetime of every minted token
    pub fn new(issuer: TokenIssuer, validator: Arc<TokenValidator>, token_ttl: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            issuer,
            validator,
            token_ttl,
        }
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password and mint a token for the identity it belongs to.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - PHC string from the identity store
    /// * `identity` - Fields to embed in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unusable
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        identity: &ClaimsIdentity,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.generate_token(identity)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Reject a login for an account that does not exist.
    ///
    /// Runs a full verification against a placeholder hash, so the call costs
    /// the same as a wrong password.
    ///
    /// # Returns
    /// Always `InvalidCredentials`
    pub fn reject_unknown_account(&self, password: &str) -> AuthenticationError {
        if let Err(e) = self.password_hasher.verify(password, UNKNOWN_ACCOUNT_HASH) {
            tracing::error!(error = %e, "Placeholder hash verification failed");
        }

        AuthenticationError::InvalidCredentials
    }

    /// Mint a token without password verification.
    pub fn generate_token(&self, identity: &ClaimsIdentity) -> Result<String, JwtError> {
        self.issuer.issue(identity, self.token_ttl)
    }

    /// Verify a compact token and return its claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.validator.parse(token)
    }

    /// Guard sharing this authenticator's verification key.
    pub fn guard(&self) -> AuthorizationGuard {
        AuthorizationGuard::new(Arc::clone(&self.validator))
    }
}
