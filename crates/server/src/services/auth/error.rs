//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::token::TokenError;

/// Message returned when registering an email that is already on file.
pub const ALREADY_EXISTS_MESSAGE: &str = "Account already exists. Please login.";
/// Message returned for an unknown email or a wrong password.
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Invalid login credentials. Please check and try again.";
/// Message returned when no enrolled biometric key matches.
pub const BIOMETRIC_MISMATCH_MESSAGE: &str = "Biometric data does not match. Please try again.";

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Input failed a boundary precondition.
    #[error("{0}")]
    Validation(String),

    /// User already exists.
    #[error("user already exists")]
    AlreadyExists,

    /// Invalid credentials (wrong password or user not found).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No enrolled biometric key matched.
    #[error("biometric mismatch")]
    BiometricMismatch,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(RepositoryError),

    /// Password hashing error.
    #[error("secret hashing error: {0}")]
    Hashing(String),

    /// Token issuance error.
    #[error("token error: {0}")]
    Token(#[from] TokenError),
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(_) => Self::AlreadyExists,
            other => Self::Repository(other),
        }
    }
}

impl AuthError {
    /// Whether the error is a fault rather than an expected outcome.
    #[must_use]
    pub const fn is_unexpected(&self) -> bool {
        matches!(self, Self::Repository(_) | Self::Hashing(_) | Self::Token(_))
    }

    /// Status code carried in the response envelope.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Validation(_) => 422,
            Self::AlreadyExists => 409,
            Self::InvalidCredentials | Self::BiometricMismatch => 401,
            Self::Repository(_) | Self::Hashing(_) | Self::Token(_) => 500,
        }
    }

    /// Client-facing message.
    ///
    /// Unexpected faults collapse into `fallback` so storage and signing
    /// details never reach the caller.
    #[must_use]
    pub fn client_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::AlreadyExists => ALREADY_EXISTS_MESSAGE.to_owned(),
            Self::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_owned(),
            Self::BiometricMismatch => BIOMETRIC_MISMATCH_MESSAGE.to_owned(),
            Self::Repository(_) | Self::Hashing(_) | Self::Token(_) => fallback.to_owned(),
        }
    }
}
