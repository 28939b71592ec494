pub mod claims;
pub mod errors;
pub mod issuer;
pub(crate) mod keys;
pub mod validator;

pub use claims::Claims;
pub use claims::ClaimsIdentity;
pub use errors::JwtError;
pub use issuer::TokenIssuer;
pub use validator::TokenValidator;
pub use validator::AUTHORIZATION_HEADER;
