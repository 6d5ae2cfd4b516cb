//! GraphQL input and output types.

use async_graphql::{ID, InputObject, SimpleObject};
use chrono::{DateTime, Utc};

use crate::models::{AuthenticatedUser, PublicUser};
use crate::services::auth::{AuthError, AuthResponse, Registration};

// =============================================================================
// Inputs
// =============================================================================

#[derive(Debug, InputObject)]
pub struct RegisterUserInput {
    pub email: String,
    #[graphql(secret)]
    pub password: String,
    #[graphql(secret)]
    pub biometric_key: Option<String>,
}

impl RegisterUserInput {
    /// Check registration preconditions.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` listing every violated rule.
    pub fn validate(&self) -> Result<Registration, AuthError> {
        Registration::parse(&self.email, &self.password, self.biometric_key.as_deref())
    }
}

#[derive(Debug, InputObject)]
pub struct LoginUserInput {
    pub email: String,
    #[graphql(secret)]
    pub password: String,
}

#[derive(Debug, InputObject)]
pub struct BiometricLoginInput {
    #[graphql(secret)]
    pub biometric_key: String,
}

// =============================================================================
// Outputs
// =============================================================================

/// Public view of an account.
#[derive(Debug, Clone, SimpleObject)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub biometric_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PublicUser> for User {
    fn from(user: PublicUser) -> Self {
        Self {
            id: ID(user.id.to_string()),
            email: user.email.into_inner(),
            biometric_enabled: user.biometric_enabled,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// A bearer token with the public fields of the account it was issued to.
#[derive(Debug, Clone, SimpleObject)]
pub struct LoginData {
    pub token: Option<String>,
    pub id: ID,
    pub email: String,
    pub biometric_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AuthenticatedUser> for LoginData {
    fn from(session: AuthenticatedUser) -> Self {
        let user = User::from(session.user);
        Self {
            token: Some(session.token),
            id: user.id,
            email: user.email,
            biometric_enabled: user.biometric_enabled,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct RegisterResponse {
    pub message: String,
    pub status: i32,
    pub success: bool,
    pub data: Option<User>,
}

impl From<AuthResponse<PublicUser>> for RegisterResponse {
    fn from(resp: AuthResponse<PublicUser>) -> Self {
        let resp = resp.map(User::from);
        Self {
            message: resp.message,
            status: i32::from(resp.status),
            success: resp.success,
            data: resp.data,
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct LoginResponse {
    pub message: String,
    pub status: i32,
    pub success: bool,
    pub data: Option<LoginData>,
}

impl From<AuthResponse<AuthenticatedUser>> for LoginResponse {
    fn from(resp: AuthResponse<AuthenticatedUser>) -> Self {
        let resp = resp.map(LoginData::from);
        Self {
            message: resp.message,
            status: i32::from(resp.status),
            success: resp.success,
            data: resp.data,
        }
    }
}
