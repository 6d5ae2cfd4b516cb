//! Authentication service.
//!
//! Provides account registration, password login and biometric-key login.
//! Every operation reports its outcome through [`AuthResponse`]; faults are
//! logged and captured here and reach the caller only as a generic message.

mod error;
pub mod hashing;
mod response;
mod validation;

pub use error::{
    ALREADY_EXISTS_MESSAGE, AuthError, BIOMETRIC_MISMATCH_MESSAGE, INVALID_CREDENTIALS_MESSAGE,
};
pub use response::AuthResponse;
pub use validation::{MIN_PASSWORD_LENGTH, Registration};

use std::sync::Arc;

use bioauth_core::Email;

use crate::db::UserStore;
use crate::models::{AuthenticatedUser, NewUser, PublicUser, User};
use crate::services::token::TokenIssuer;

use hashing::{hash_secret_blocking, verify_secret_blocking};

pub const REGISTER_SUCCESS_MESSAGE: &str = "User created successfully";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";
pub const BIOMETRIC_LOGIN_SUCCESS_MESSAGE: &str = "Biometric login successful";

pub const REGISTER_FAILED_MESSAGE: &str = "An error occurred during registration";
pub const LOGIN_FAILED_MESSAGE: &str = "An error occurred during login";
pub const BIOMETRIC_LOGIN_FAILED_MESSAGE: &str = "Biometric login failed";

/// Credential service.
///
/// Collaborators are injected so the same service runs against `PostgreSQL`
/// in production and an in-memory store in tests.
#[derive(Clone)]
pub struct CredentialService {
    users: Arc<dyn UserStore>,
    tokens: Arc<dyn TokenIssuer>,
}

impl std::fmt::Debug for CredentialService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialService").finish_non_exhaustive()
    }
}

impl CredentialService {
    /// Create a new credential service.
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<dyn TokenIssuer>) -> Self {
        Self { users, tokens }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Create an account from a validated registration.
    ///
    /// Responds `201` with the public view of the new account, or `409` if
    /// the email is already registered.
    pub async fn register(&self, registration: Registration) -> AuthResponse<PublicUser> {
        match self.try_register(registration).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, biometric = user.biometric_enabled, "User registered");
                AuthResponse::ok(201, REGISTER_SUCCESS_MESSAGE, user)
            }
            Err(err) => failure(&err, REGISTER_FAILED_MESSAGE, "registration"),
        }
    }

    async fn try_register(&self, registration: Registration) -> Result<PublicUser, AuthError> {
        let Registration {
            email,
            password,
            biometric_key,
        } = registration;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::AlreadyExists);
        }

        let password_hash = hash_secret_blocking(password).await?;
        let biometric_hash = match biometric_key {
            Some(key) => Some(hash_secret_blocking(key).await?),
            None => None,
        };

        // A concurrent registration can still win between the lookup and the
        // insert; the store's Conflict converts to AlreadyExists.
        let user = self
            .users
            .create(NewUser {
                email,
                password_hash,
                biometric_hash,
            })
            .await?;

        Ok(PublicUser::from(user))
    }

    // =========================================================================
    // Password Login
    // =========================================================================

    /// Authenticate with email and password.
    ///
    /// An unknown email and a wrong password produce the same `401` response.
    pub async fn login(&self, email: &str, password: &str) -> AuthResponse<AuthenticatedUser> {
        match self.try_login(email, password).await {
            Ok(session) => {
                tracing::info!(user_id = %session.user.id, "Password login succeeded");
                AuthResponse::ok(200, LOGIN_SUCCESS_MESSAGE, session)
            }
            Err(err) => failure(&err, LOGIN_FAILED_MESSAGE, "login"),
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
        // A malformed address cannot be on file.
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !stored_hash_matches(password, user.password_hash.clone(), &user).await {
            return Err(AuthError::InvalidCredentials);
        }

        self.authenticate(user).await
    }

    // =========================================================================
    // Biometric Login
    // =========================================================================

    /// Authenticate with a biometric key alone.
    ///
    /// Enrolled accounts are checked oldest first and the first match wins.
    pub async fn biometric_login(&self, biometric_key: &str) -> AuthResponse<AuthenticatedUser> {
        match self.try_biometric_login(biometric_key).await {
            Ok(session) => {
                tracing::info!(user_id = %session.user.id, "Biometric login succeeded");
                AuthResponse::ok(200, BIOMETRIC_LOGIN_SUCCESS_MESSAGE, session)
            }
            Err(err) => failure(&err, BIOMETRIC_LOGIN_FAILED_MESSAGE, "biometric login"),
        }
    }

    async fn try_biometric_login(
        &self,
        biometric_key: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        let candidates = self.users.find_all_with_biometric().await?;
        tracing::debug!(candidates = candidates.len(), "Scanning enrolled biometric keys");

        // Salted hashes cannot be looked up by value, so each one is verified in turn.
        for user in candidates {
            let Some(hash) = user.biometric_hash.clone() else {
                continue;
            };
            if stored_hash_matches(biometric_key, hash, &user).await {
                return self.authenticate(user).await;
            }
        }

        Err(AuthError::BiometricMismatch)
    }

    async fn authenticate(&self, user: User) -> Result<AuthenticatedUser, AuthError> {
        let token = self.tokens.issue(user.id).await?;
        crate::error::set_sentry_user(user.id);
        Ok(AuthenticatedUser {
            token,
            user: PublicUser::from(user),
        })
    }
}

/// Verify `secret` against one stored hash.
///
/// A hash that cannot be parsed or checked is reported and counts as a
/// mismatch, so one bad row never blocks other accounts.
async fn stored_hash_matches(secret: &str, hash: String, user: &User) -> bool {
    match verify_secret_blocking(secret.to_owned(), hash).await {
        Ok(matched) => matched,
        Err(err) => {
            tracing::error!(user_id = %user.id, error = %err, "Stored hash could not be verified");
            sentry::capture_error(&err);
            false
        }
    }
}

/// Convert an error into a failure envelope, reporting faults.
fn failure<T>(err: &AuthError, fallback: &str, operation: &str) -> AuthResponse<T> {
    if err.is_unexpected() {
        tracing::error!(error = %err, operation, "Authentication fault");
        sentry::capture_error(err);
    } else {
        tracing::debug!(error = %err, operation, "Authentication rejected");
    }
    AuthResponse::failure(err, fallback)
}
