//! Argon2id password hashing.
//!
//! Hashes are stored in PHC string format, so the salt and parameters travel with the
//! hash and verification needs nothing but the stored string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::server::error::AppError;

// 19 MiB memory, 2 passes, 1 lane
fn argon2() -> Result<Argon2<'static>, AppError> {
    let params = Params::new(19456, 2, 1, None)
        .map_err(|e| AppError::InternalError(format!("Invalid argon2 parameters: {}", e)))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a plaintext password with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Checks a plaintext password against a stored PHC hash.
///
/// A stored value that is not a valid PHC string never matches.
pub fn verify_password(stored_hash: &str, password: &str) -> Result<bool, AppError> {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored password hash could not be parsed: {}", e);
            return Ok(false);
        }
    };

    Ok(argon2()?
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
