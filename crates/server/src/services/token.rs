//! Bearer token issuance.
//!
//! Tokens are HS256 JWTs whose payload binds the user id and an expiry.
//! Nothing in this service consumes them; verification belongs to whichever
//! API the client presents them to.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bioauth_core::UserId;

use crate::config::JwtConfig;

/// Errors that can occur while issuing a token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The configured lifetime does not fit a timestamp.
    #[error("token lifetime out of range")]
    LifetimeOutOfRange,

    /// Signing failed.
    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// This process has no signing key.
    #[error("token issuance is disabled")]
    Disabled,
}

/// JWT payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account the token was issued to.
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiry (seconds since epoch).
    pub exp: i64,
}

/// Produces signed, time-bound bearer tokens.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Issue a token bound to `user_id`.
    async fn issue(&self, user_id: UserId) -> Result<String, TokenError>;
}

/// HMAC-SHA256 JWT issuer.
#[derive(Clone)]
pub struct JwtIssuer {
    key: EncodingKey,
    expires_in: Duration,
}

impl JwtIssuer {
    /// Create an issuer signing with `secret`; tokens expire after `expires_in`.
    #[must_use]
    pub fn new(secret: &SecretString, expires_in: Duration) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.expose_secret().as_bytes()),
            expires_in,
        }
    }

    /// Create an issuer from the server's JWT configuration.
    #[must_use]
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, config.expires_in)
    }

    /// Build the claims for a token issued now.
    fn claims_for(&self, user_id: UserId) -> Result<Claims, TokenError> {
        let now = Utc::now();
        let ttl = chrono::Duration::from_std(self.expires_in)
            .map_err(|_| TokenError::LifetimeOutOfRange)?;
        let exp = now
            .checked_add_signed(ttl)
            .ok_or(TokenError::LifetimeOutOfRange)?;

        Ok(Claims {
            user_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        })
    }
}

impl std::fmt::Debug for JwtIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtIssuer")
            .field("key", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[async_trait]
impl TokenIssuer for JwtIssuer {
    async fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        let claims = self.claims_for(user_id)?;
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.key)?;
        Ok(token)
    }
}

/// Issuer for processes that create accounts but never log anyone in.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledIssuer;

#[async_trait]
impl TokenIssuer for DisabledIssuer {
    async fn issue(&self, _user_id: UserId) -> Result<String, TokenError> {
        Err(TokenError::Disabled)
    }
}
