use thiserror::Error;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Unable to read key file {path}: {reason}")]
    KeyRead { path: String, reason: String },

    #[error("Unable to parse Ed25519 key: {0}")]
    KeyParse(String),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    #[error("No token found in metadata entry '{0}'")]
    MissingToken(String),
}

impl From<JwtError> for tonic::Status {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::TokenExpired => tonic::Status::unauthenticated("token expired"),
            JwtError::InvalidToken(_) => tonic::Status::unauthenticated("invalid token"),
            JwtError::MissingToken(_) => tonic::Status::unauthenticated("missing token"),
            JwtError::KeyRead { .. } | JwtError::KeyParse(_) | JwtError::EncodingFailed(_) => {
                tonic::Status::internal("internal error")
            }
        }
    }
}
