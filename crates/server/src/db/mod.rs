//! Database operations for the credential service.
//!
//! # Tables
//!
//! - `bioauth.user` - Accounts with their password and optional biometric hash
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p bioauth-cli -- migrate
//! ```

pub mod memory;
pub mod users;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use bioauth_core::Email;

use crate::models::{NewUser, User};

pub use memory::InMemoryUserStore;
pub use users::PgUserRepository;

/// Migrations embedded from `crates/server/migrations/`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Persistence for user accounts.
///
/// The store owns identity generation and timestamps, and is the authority
/// on email uniqueness: `create` must fail with [`RepositoryError::Conflict`]
/// when the email is already taken, even if a preceding `find_by_email`
/// returned nothing.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the user registered under exactly this email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// All users with a biometric hash on file, oldest first.
    async fn find_all_with_biometric(&self) -> Result<Vec<User>, RepositoryError>;

    /// Insert a new user.
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
