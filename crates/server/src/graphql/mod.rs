//! GraphQL schema.
//!
//! # Operations
//!
//! - `healthCheck` - Liveness probe
//! - `register` - Create an account
//! - `login` - Email and password login
//! - `biometricLogin` - Biometric key login
//!
//! Resolvers never return GraphQL errors for authentication outcomes; every
//! result, including validation failures, comes back in the response envelope.

pub mod types;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::services::auth::{AuthResponse, CredentialService, REGISTER_FAILED_MESSAGE};

pub use types::{
    BiometricLoginInput, LoginData, LoginResponse, LoginUserInput, RegisterResponse,
    RegisterUserInput, User,
};

/// Reply of the `healthCheck` query.
pub const HEALTH_CHECK_MESSAGE: &str = "GraphQL is up and running";

/// The credential service's GraphQL schema.
pub type AuthSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with `service` in its context.
#[must_use]
pub fn build_schema(service: CredentialService) -> AuthSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn health_check(&self) -> String {
        HEALTH_CHECK_MESSAGE.to_owned()
    }
}

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn register(
        &self,
        ctx: &Context<'_>,
        input: RegisterUserInput,
    ) -> async_graphql::Result<RegisterResponse> {
        let service = ctx.data::<CredentialService>()?;

        let resp = match input.validate() {
            Ok(registration) => service.register(registration).await,
            Err(err) => {
                tracing::debug!(error = %err, "Registration input rejected");
                AuthResponse::failure(&err, REGISTER_FAILED_MESSAGE)
            }
        };

        Ok(resp.into())
    }

    async fn login(
        &self,
        ctx: &Context<'_>,
        input: LoginUserInput,
    ) -> async_graphql::Result<LoginResponse> {
        let service = ctx.data::<CredentialService>()?;
        Ok(service.login(&input.email, &input.password).await.into())
    }

    async fn biometric_login(
        &self,
        ctx: &Context<'_>,
        input: BiometricLoginInput,
    ) -> async_graphql::Result<LoginResponse> {
        let service = ctx.data::<CredentialService>()?;
        Ok(service.biometric_login(&input.biometric_key).await.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use secrecy::SecretString;

    use super::*;
    use crate::db::InMemoryUserStore;
    use crate::services::token::JwtIssuer;

    fn schema() -> AuthSchema {
        let issuer = JwtIssuer::new(
            &SecretString::from("kT9#vQ2$wX7!mN4@pL8^rZ1&sB6*yH3%"),
            Duration::from_secs(60),
        );
        build_schema(CredentialService::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(issuer),
        ))
    }

    #[tokio::test]
    async fn test_health_check() {
        let resp = schema().execute("{ healthCheck }").await;
        assert!(resp.errors.is_empty());
        assert_eq!(
            resp.data.into_json().unwrap()["healthCheck"],
            HEALTH_CHECK_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_validation_failure_is_an_envelope() {
        let resp = schema()
            .execute(
                r#"mutation { register(input: { email: "a@x.com", password: "pw" }) {
                    success status message data { id }
                } }"#,
            )
            .await;

        assert!(resp.errors.is_empty());
        let json = resp.data.into_json().unwrap();
        assert_eq!(json["register"]["success"], false);
        assert_eq!(json["register"]["status"], 422);
        assert_eq!(
            json["register"]["message"],
            "Password must be at least 5 characters long"
        );
        assert!(json["register"]["data"].is_null());
    }

    #[test]
    fn test_sdl_names() {
        let sdl = schema().sdl();
        assert!(sdl.contains("biometricLogin("));
        assert!(sdl.contains("input RegisterUserInput"));
        assert!(sdl.contains("input BiometricLoginInput"));
        assert!(sdl.contains("biometricKey: String"));
        assert!(sdl.contains("biometricEnabled: Boolean!"));
    }
}
