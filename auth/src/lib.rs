//! Authentication primitives shared by the backend services
//!
//! - Password hashing (Argon2id)
//! - EdDSA (Ed25519) token issuance and verification
//! - Per-call authorization from gRPC metadata
//!
//! The identity service owns the private key and uses [`Authenticator`].
//! Every other service only loads the public key and mounts an
//! [`AuthorizationGuard`].
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other_password", &hash).unwrap());
//! ```
//!
//! ## Guarding a Service
//! ```no_run
//! use std::sync::Arc;
//!
//! use auth::{AuthorizationGuard, TokenValidator};
//!
//! let validator = TokenValidator::from_pem_file("keys/public.pem").unwrap();
//! let guard = AuthorizationGuard::new(Arc::new(validator));
//! // MyServiceServer::with_interceptor(service, guard)
//! ```

pub mod authenticator;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod role;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use guard::AuthorizationGuard;
pub use guard::ClaimsIdentityExt;
pub use jwt::Claims;
pub use jwt::ClaimsIdentity;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use jwt::TokenValidator;
pub use jwt::AUTHORIZATION_HEADER;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use role::Role;
