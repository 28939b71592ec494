use std::path::Path;

use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;
use tonic::metadata::MetadataMap;

use super::claims::Claims;
use super::errors::JwtError;
use super::keys::read_pem;

/// Metadata entry carrying the bearer token on authenticated calls.
pub const AUTHORIZATION_HEADER: &str = "authorization";

const BEARER_SCHEME: &str = "Bearer";

/// Verifies EdDSA tokens against a single trusted Ed25519 public key.
///
/// Only `alg = EdDSA` is accepted. Issuer and audience are not checked.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    /// Load the verification key from a PEM (SPKI) file.
    ///
    /// # Errors
    /// * `KeyRead` - File cannot be read
    /// * `KeyParse` - Content is not an Ed25519 public key
    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, JwtError> {
        Self::from_pem(&read_pem(path.as_ref())?)
    }

    /// Build a validator from PEM bytes.
    pub fn from_pem(pem: &[u8]) -> Result<Self, JwtError> {
        let decoding_key =
            DecodingKey::from_ed_pem(pem).map_err(|e| JwtError::KeyParse(e.to_string()))?;

        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.leeway = 0;
        validation.validate_aud = false;

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Parse and verify a compact token.
    ///
    /// # Arguments
    /// * `token` - Compact JWS string
    ///
    /// # Returns
    /// Verified claims
    ///
    /// # Errors
    /// * `TokenExpired` - Signature is valid but `exp` has been reached
    /// * `InvalidToken` - Malformed, wrong algorithm, bad signature or bad claims
    pub fn parse(&self, token: &str) -> Result<Claims, JwtError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::InvalidToken(e.to_string()),
            },
        )?;

        if token_data.claims.is_expired(Utc::now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(token_data.claims)
    }

    /// Extract and verify the token carried in a metadata entry.
    ///
    /// # Arguments
    /// * `metadata` - Inbound gRPC metadata
    /// * `header` - Entry name, usually [`AUTHORIZATION_HEADER`]
    ///
    /// # Errors
    /// * `MissingToken` - Entry absent, empty or not valid ASCII
    /// * Any error of [`TokenValidator::parse`]
    pub fn claims_from_metadata(
        &self,
        metadata: &MetadataMap,
        header: &str,
    ) -> Result<Claims, JwtError> {
        let token = bearer_token(metadata, header)?;
        self.parse(token)
    }
}

/// Read the raw token from a metadata entry, stripping an optional `Bearer ` prefix.
pub fn bearer_token<'a>(metadata: &'a MetadataMap, header: &str) -> Result<&'a str, JwtError> {
    let value = metadata
        .get(header)
        .ok_or_else(|| JwtError::MissingToken(header.to_string()))?;

    let raw = value
        .to_str()
        .map_err(|_| JwtError::MissingToken(header.to_string()))?
        .trim();

    // "Bearer" alone, or followed by whitespace only, carries no token
    let token = match raw.strip_prefix(BEARER_SCHEME) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => raw,
    };

    if token.is_empty() {
        return Err(JwtError::MissingToken(header.to_string()));
    }

    Ok(token)
}
