use std::path::Path;

use chrono::Duration;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::claims::ClaimsIdentity;
use super::errors::JwtError;
use super::keys::read_pem;

/// Mints EdDSA-signed identity tokens from an Ed25519 private key.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    /// Load the signing key from a PEM (PKCS#8) file.
    ///
    /// # Errors
    /// * `KeyRead` - File cannot be read
    /// * `KeyParse` - Content is not an Ed25519 private key
    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, JwtError> {
        Self::from_pem(&read_pem(path.as_ref())?)
    }

    /// Build an issuer from PEM bytes.
    ///
    /// The key is exercised once with a probe signature so an unusable key
    /// is rejected here rather than on the first login.
    ///
    /// # Errors
    /// * `KeyParse` - Content is not a usable Ed25519 private key
    pub fn from_pem(pem: &[u8]) -> Result<Self, JwtError> {
        let encoding_key =
            EncodingKey::from_ed_pem(pem).map_err(|e| JwtError::KeyParse(e.to_string()))?;

        encode(
            &Header::new(Algorithm::EdDSA),
            &serde_json::json!({}),
            &encoding_key,
        )
        .map_err(|e| JwtError::KeyParse(e.to_string()))?;

        Ok(Self { encoding_key })
    }

    /// Mint a signed token for an identity.
    ///
    /// # Arguments
    /// * `identity` - id, email and role to embed
    /// * `ttl` - Lifetime; `exp` is set to now + ttl
    ///
    /// # Returns
    /// Compact JWS string (`header.claims.signature`)
    ///
    /// # Errors
    /// * `EncodingFailed` - Signing failed
    pub fn issue(&self, identity: &ClaimsIdentity, ttl: Duration) -> Result<String, JwtError> {
        self.sign(&Claims::for_identity(identity, ttl))
    }

    /// Sign prepared claims.
    pub fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::EdDSA), claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}
