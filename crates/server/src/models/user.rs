//! User domain types.
//!
//! These types represent validated domain objects separate from database row types.

use chrono::{DateTime, Utc};

use bioauth_core::{Email, UserId};

/// A registered account (domain type).
///
/// Carries the stored secret hashes so the credential service can verify
/// against them. Never hand this type to a response; project it through
/// [`PublicUser`] first.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address (unique).
    pub email: Email,
    /// Argon2 PHC string of the password.
    pub password_hash: String,
    /// Argon2 PHC string of the biometric key, if one was enrolled.
    pub biometric_hash: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether a biometric key was enrolled at registration.
    #[must_use]
    pub const fn has_biometric(&self) -> bool {
        self.biometric_hash.is_some()
    }
}

/// Fields required to create a user. Hashes are computed before this is built.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: String,
    pub biometric_hash: Option<String>,
}

/// The part of a [`User`] that is safe to return to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: UserId,
    pub email: Email,
    pub biometric_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            biometric_enabled: user.has_biometric(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// A freshly issued bearer token together with the account it is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub token: String,
    pub user: PublicUser,
}
