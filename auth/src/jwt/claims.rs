use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::role::Role;

/// Identity view carried inside a token.
///
/// Used both as the input of token issuance and as the claims-only identity
/// produced by the authorization guard. It is a snapshot taken at mint time,
/// so the role may be stale relative to the identity store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimsIdentity {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl ClaimsIdentity {
    pub fn new(id: i64, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            role,
        }
    }
}

/// JWT payload.
///
/// Serialized as `{"uid": <int>, "email": <string>, "role": <string>, "exp": <unix>}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User identifier
    pub uid: i64,

    pub email: String,

    pub role: Role,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an identity expiring `ttl` after `issued_at`.
    ///
    /// # Arguments
    /// * `identity` - Identity fields to embed
    /// * `issued_at` - Mint instant
    /// * `ttl` - Token lifetime
    ///
    /// # Returns
    /// Claims with `exp = issued_at + ttl`
    pub fn issued_at(identity: &ClaimsIdentity, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            uid: identity.id,
            email: identity.email.clone(),
            role: identity.role,
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Create claims for an identity expiring `ttl` from now.
    pub fn for_identity(identity: &ClaimsIdentity, ttl: Duration) -> Self {
        Self::issued_at(identity, Utc::now(), ttl)
    }

    /// Identity fields embedded in the token.
    pub fn identity(&self) -> ClaimsIdentity {
        ClaimsIdentity {
            id: self.uid,
            email: self.email.clone(),
            role: self.role,
        }
    }

    /// Check if token is expired.
    ///
    /// A token stops being valid at its `exp` instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
