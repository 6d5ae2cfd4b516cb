//! Server-level error handling with Sentry integration.
//!
//! Authentication outcomes never surface here; they travel inside the GraphQL
//! response envelope. This module covers the process itself: startup failures
//! and the per-request Sentry user context.

use thiserror::Error;

use bioauth_core::UserId;

use crate::config::ConfigError;

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database pool could not be created.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Socket bind or serve failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Associate subsequent Sentry events on this hub with a user.
///
/// Only the ID is attached; email addresses stay out of error reports.
pub fn set_sentry_user(user_id: UserId) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            ..Default::default()
        }));
    });
}
