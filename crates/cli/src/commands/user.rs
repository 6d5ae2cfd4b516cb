//! User management commands.
//!
//! # Usage
//!
//! ```bash
//! bioauth user create -e user@example.com -p hunter22
//! bioauth user create -e user@example.com -p hunter22 -b fingerprint-key
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string
//!
//! No signing secret is needed; this command never issues tokens.

use std::sync::Arc;

use secrecy::SecretString;
use thiserror::Error;

use bioauth_server::db::{self, PgUserRepository};
use bioauth_server::services::auth::{AuthError, CredentialService, Registration};
use bioauth_server::services::token::DisabledIssuer;

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Invalid(#[from] AuthError),

    /// The credential service refused the registration.
    #[error("Registration failed ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Register a user through the credential service.
///
/// Applies the same validation and hashing as the GraphQL `register`
/// mutation.
///
/// # Errors
///
/// Returns `UserError` if the input is invalid, the email is taken, or the
/// database is unreachable.
pub async fn create(
    email: &str,
    password: &str,
    biometric_key: Option<&str>,
) -> Result<(), UserError> {
    let registration = Registration::parse(email, password, biometric_key)?;

    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| UserError::MissingEnvVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let service = CredentialService::new(
        Arc::new(PgUserRepository::new(pool)),
        Arc::new(DisabledIssuer),
    );

    let resp = service.register(registration).await;
    match resp.data {
        Some(user) if resp.success => {
            tracing::info!(
                "User created successfully! ID: {}, Email: {}, Biometric: {}",
                user.id,
                user.email,
                user.biometric_enabled
            );
            Ok(())
        }
        _ => Err(UserError::Rejected {
            status: resp.status,
            message: resp.message,
        }),
    }
}
