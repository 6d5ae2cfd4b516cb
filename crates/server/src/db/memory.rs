//! In-memory user store.
//!
//! Keeps the same uniqueness contract as the `PostgreSQL` table so the
//! credential service can be exercised without a database.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use bioauth_core::{Email, UserId};

use super::{RepositoryError, UserStore};
use crate::models::{NewUser, User};

/// Process-local [`UserStore`] backed by a vector in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DataCorruption` if the lock was poisoned.
    pub fn all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<User>>, RepositoryError> {
        self.users
            .read()
            .map_err(|_| RepositoryError::DataCorruption("user store lock poisoned".to_owned()))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        Ok(self.read()?.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_all_with_biometric(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self
            .read()?
            .iter()
            .filter(|u| u.has_biometric())
            .cloned()
            .collect())
    }

    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| RepositoryError::DataCorruption("user store lock poisoned".to_owned()))?;

        // Checked under the write lock, like the table's UNIQUE constraint.
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let now = Utc::now();
        let created = User {
            id: UserId::generate(),
            email: user.email,
            password_hash: user.password_hash,
            biometric_hash: user.biometric_hash,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());

        Ok(created)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn new_user(email: &str, biometric: Option<&str>) -> NewUser {
        NewUser {
            email: Email::parse(email).unwrap(),
            password_hash: "$argon2id$stub".to_owned(),
            biometric_hash: biometric.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn test_create_then_find_by_email() {
        let store = InMemoryUserStore::new();
        let created = store.create(new_user("a@x.com", None)).await.unwrap();

        let found = store
            .find_by_email(&Email::parse("a@x.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.created_at, found.updated_at);
    }

    #[tokio::test]
    async fn test_find_by_email_is_exact_match() {
        let store = InMemoryUserStore::new();
        store.create(new_user("a@x.com", None)).await.unwrap();

        let found = store
            .find_by_email(&Email::parse("A@x.com").unwrap())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_email_conflicts() {
        let store = InMemoryUserStore::new();
        store.create(new_user("a@x.com", None)).await.unwrap();

        let err = store.create(new_user("a@x.com", None)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(store.all().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_all_with_biometric_filters_and_keeps_order() {
        let store = InMemoryUserStore::new();
        store.create(new_user("one@x.com", Some("h1"))).await.unwrap();
        store.create(new_user("two@x.com", None)).await.unwrap();
        store.create(new_user("three@x.com", Some("h3"))).await.unwrap();

        let emails: Vec<String> = store
            .find_all_with_biometric()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.email.into_inner())
            .collect();
        assert_eq!(emails, ["one@x.com", "three@x.com"]);
    }
}
