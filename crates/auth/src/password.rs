//! Password hashing and verification
//!
//! bcrypt with a configurable cost factor. Hashes embed their own salt,
//! so verification needs only the stored hash string.

use crate::error::AuthError;

/// Hash a password with the configured bcrypt cost factor
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password, cost).map_err(|e| {
        tracing::error!(error = %e, "Failed to hash password");
        AuthError::PasswordHash
    })
}

/// Verify a password against a stored hash.
///
/// Returns false for a mismatch and for a malformed hash; never errors.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
