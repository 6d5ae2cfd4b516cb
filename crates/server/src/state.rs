//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::graphql::AuthSchema;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    schema: AuthSchema,
    pool: Option<PgPool>,
}

impl AppState {
    /// Create state backed by a `PostgreSQL` pool.
    #[must_use]
    pub fn new(schema: AuthSchema, pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                schema,
                pool: Some(pool),
            }),
        }
    }

    /// Create state with no database behind the readiness probe.
    ///
    /// Used when the schema runs over an in-process store.
    #[must_use]
    pub fn without_database(schema: AuthSchema) -> Self {
        Self {
            inner: Arc::new(AppStateInner { schema, pool: None }),
        }
    }

    /// Get a reference to the GraphQL schema.
    #[must_use]
    pub fn schema(&self) -> &AuthSchema {
        &self.inner.schema
    }

    /// Get a reference to the database connection pool, if any.
    #[must_use]
    pub fn pool(&self) -> Option<&PgPool> {
        self.inner.pool.as_ref()
    }
}
