//! Per-call authorization for gRPC services.
//!
//! [`AuthorizationGuard`] turns the bearer token in call metadata into a
//! [`ClaimsIdentity`]. Handlers either call [`AuthorizationGuard::authorize`]
//! directly or mount the guard as a tonic interceptor and read the identity
//! back with [`ClaimsIdentityExt`].
//!
//! The identity is claims-only: role and email are whatever the token
//! carried at mint time. Decisions that must see the current stored role
//! re-fetch the user from the identity store.

use std::sync::Arc;

use tonic::metadata::MetadataMap;
use tonic::service::Interceptor;
use tonic::Request;
use tonic::Status;
use tracing::debug;
use tracing::warn;

use crate::jwt::ClaimsIdentity;
use crate::jwt::JwtError;
use crate::jwt::TokenValidator;
use crate::jwt::AUTHORIZATION_HEADER;

#[derive(Clone)]
pub struct AuthorizationGuard {
    validator: Arc<TokenValidator>,
    header: String,
}

impl AuthorizationGuard {
    /// Guard reading the token from the `authorization` entry.
    pub fn new(validator: Arc<TokenValidator>) -> Self {
        Self {
            validator,
            header: AUTHORIZATION_HEADER.to_string(),
        }
    }

    /// Read the token from a different metadata entry.
    ///
    /// gRPC metadata keys are lowercase; the name is normalized accordingly.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into().to_ascii_lowercase();
        self
    }

    /// Resolve the caller's identity from call metadata.
    ///
    /// # Errors
    /// * `MissingToken` - No usable token in the configured entry
    /// * `TokenExpired` - Token is past its `exp`
    /// * `InvalidToken` - Token fails verification
    pub fn authorize(&self, metadata: &MetadataMap) -> Result<ClaimsIdentity, JwtError> {
        match self.validator.claims_from_metadata(metadata, &self.header) {
            Ok(claims) => {
                debug!(user_id = claims.uid, role = %claims.role, "Caller authorized");
                Ok(claims.identity())
            }
            Err(e) => {
                warn!(error = %e, "Authorization failed");
                Err(e)
            }
        }
    }
}

impl Interceptor for AuthorizationGuard {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let identity = self.authorize(request.metadata())?;
        request.extensions_mut().insert(identity);
        Ok(request)
    }
}

/// Access to the identity stored by the guard interceptor.
pub trait ClaimsIdentityExt {
    /// # Errors
    /// `Status::unauthenticated` if the request never passed through the guard.
    fn claims_identity(&self) -> Result<&ClaimsIdentity, Status>;
}

impl<T> ClaimsIdentityExt for Request<T> {
    fn claims_identity(&self) -> Result<&ClaimsIdentity, Status> {
        self.extensions()
            .get::<ClaimsIdentity>()
            .ok_or_else(|| Status::unauthenticated("missing token"))
    }
}
