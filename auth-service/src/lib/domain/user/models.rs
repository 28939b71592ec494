use std::fmt;
use std::str::FromStr;

use auth::ClaimsIdentity;
use auth::Role;
use chrono::DateTime;
use chrono::Utc;

use crate::user::errors::EmailError;
use crate::user::errors::UserError;
use crate::user::errors::UserIdError;

/// Identity record.
///
/// `password_hash` is a PHC string and never leaves the service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub role: Role,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Identity view embedded in the tokens minted for this user.
    pub fn claims_identity(&self) -> ClaimsIdentity {
        ClaimsIdentity::new(self.id.0, self.email.as_str(), self.role)
    }
}

/// Store-assigned user identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    /// Validate a raw identifier from the wire.
    ///
    /// # Errors
    /// * `NotPositive` - Zero or negative id
    pub fn new(id: i64) -> Result<Self, UserIdError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(UserIdError::NotPositive(id))
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Stored as given;
/// comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `Empty` - Blank input
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        if email.trim().is_empty() {
            return Err(EmailError::Empty);
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Record to insert; the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub role: Role,
    pub password_hash: String,
}

impl NewUser {
    /// Regular account with the default role.
    pub fn new(email: EmailAddress, password_hash: String) -> Self {
        Self {
            email,
            role: Role::default(),
            password_hash,
        }
    }
}

/// Validated credentials from a login or registration call.
#[derive(Debug)]
pub struct Credentials {
    pub email: EmailAddress,
    pub password: String,
}

impl Credentials {
    /// # Errors
    /// * `InvalidEmail` - Email is blank or malformed
    /// * `EmptyPassword` - Password is empty
    pub fn new(email: String, password: String) -> Result<Self, UserError> {
        let email = EmailAddress::new(email)?;

        if password.is_empty() {
            return Err(UserError::EmptyPassword);
        }

        Ok(Self { email, password })
    }
}
