//! Salted one-way hashing for passwords and biometric keys.
//!
//! Both secrets go through the same Argon2id routine and are stored as PHC
//! strings, which embed the salt and parameters next to the digest.

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use super::AuthError;

/// Hash a secret using Argon2id with a fresh random salt.
///
/// # Errors
///
/// Returns `AuthError::Hashing` if Argon2 rejects the input.
pub fn hash_secret(secret: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Check a secret against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch.
///
/// # Errors
///
/// Returns `AuthError::Hashing` if the stored hash cannot be parsed or the
/// verifier fails for a reason other than a mismatch.
pub fn verify_secret(secret: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| AuthError::Hashing(e.to_string()))?;

    match Argon2::default().verify_password(secret.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hashing(e.to_string())),
    }
}

/// [`hash_secret`] on the blocking thread pool.
///
/// # Errors
///
/// Returns `AuthError::Hashing` if hashing fails or the worker panics.
pub async fn hash_secret_blocking(secret: String) -> Result<String, AuthError> {
    tokio::task::spawn_blocking(move || hash_secret(&secret))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
}

/// [`verify_secret`] on the blocking thread pool.
///
/// # Errors
///
/// Returns `AuthError::Hashing` if verification fails or the worker panics.
pub async fn verify_secret_blocking(secret: String, hash: String) -> Result<bool, AuthError> {
    tokio::task::spawn_blocking(move || verify_secret(&secret, &hash))
        .await
        .map_err(|e| AuthError::Hashing(e.to_string()))?
}
