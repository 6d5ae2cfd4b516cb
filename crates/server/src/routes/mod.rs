//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health        - Liveness check
//! GET  /health/ready  - Readiness check (database)
//! GET  /graphql       - GraphiQL explorer
//! POST /graphql       - GraphQL endpoint
//! ```

pub mod graphql;
pub mod health;

use axum::{Router, routing::get};

use crate::state::AppState;

/// GraphQL endpoint path.
pub const GRAPHQL_PATH: &str = "/graphql";

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::execute))
}
