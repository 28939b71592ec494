use std::fs;
use std::path::Path;

use super::errors::JwtError;

/// Read a PEM key file into memory.
pub(crate) fn read_pem(path: &Path) -> Result<Vec<u8>, JwtError> {
    fs::read(path).map_err(|e| JwtError::KeyRead {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
