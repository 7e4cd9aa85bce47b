//! Password hashing and verification.
//!
//! Passwords are hashed with Argon2 using a per-password random salt. The
//! resulting PHC string embeds the salt and parameters, so verification needs
//! no extra stored state.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde_json::json;

use crate::error::AppError;

/// Hashes a plaintext password into a PHC-formatted Argon2 string.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            AppError::internal("Failed to hash password", json!({}))
        })?
        .to_string();

    Ok(hash)
}

/// Verifies a plaintext password against a stored PHC hash.
///
/// Returns `false` for wrong passwords and for unparseable hashes. A stored
/// hash that fails to parse is logged, since it indicates corrupted data.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash failed to parse");
            return false;
        }
    };

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}
