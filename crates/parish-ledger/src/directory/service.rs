use std::sync::Arc;

use tracing::info;

use crate::store::{keys, read_collection, write_collection, KeyValueStore, StoreError};

use super::domain::User;
use super::password::StoredCredential;

/// Username seeded on first run so a fresh install can always log in.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
/// Password paired with [`DEFAULT_ADMIN_USERNAME`] when seeding.
pub const DEFAULT_ADMIN_PASSWORD: &str = "password";

/// Account registry shared by every parish in the installation.
pub struct UserDirectory<S> {
    store: Arc<S>,
}

impl<S: KeyValueStore> UserDirectory<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All registered accounts in registration order.
    pub fn list(&self) -> Result<Vec<User>, StoreError> {
        read_collection(self.store.as_ref(), keys::USERS)
    }

    /// Register a new account. Usernames are compared exactly, so `Ana` and
    /// `ana` name different accounts.
    pub fn register(&self, username: &str, password: &str) -> Result<User, DirectoryError> {
        let mut users = self.list()?;
        if users.iter().any(|user| user.username == username) {
            return Err(DirectoryError::DuplicateUsername(username.to_string()));
        }

        let user = User {
            username: username.to_string(),
            credential: StoredCredential::derive(password),
        };
        users.push(user.clone());
        write_collection(self.store.as_ref(), keys::USERS, &users)?;
        Ok(user)
    }

    /// Verify a login attempt, returning the matching account on success.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>, StoreError> {
        let users = self.list()?;
        Ok(users
            .into_iter()
            .find(|user| user.username == username && user.credential.matches(password)))
    }

    /// Seed the default administrator when the directory is empty. Returns
    /// whether an account was created.
    pub fn ensure_default_admin(&self) -> Result<bool, DirectoryError> {
        if !self.list()?.is_empty() {
            return Ok(false);
        }
        self.register(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)?;
        info!(
            username = DEFAULT_ADMIN_USERNAME,
            "seeded default administrator account"
        );
        Ok(true)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("username '{0}' is already registered")]
    DuplicateUsername(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::store::InMemoryStore;

    use super::*;

    fn directory() -> UserDirectory<InMemoryStore> {
        UserDirectory::new(Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn register_then_authenticate_round_trips() {
        let directory = directory();

        directory
            .register("sacristan", "llaves-2024")
            .expect("register account");
        let user = directory
            .authenticate("sacristan", "llaves-2024")
            .expect("authenticate")
            .expect("credentials accepted");

        assert_eq!(user.username, "sacristan");
    }

    #[test]
    fn wrong_password_yields_no_account() {
        let directory = directory();
        directory
            .register("sacristan", "llaves-2024")
            .expect("register account");

        let outcome = directory
            .authenticate("sacristan", "llaves-2025")
            .expect("authenticate");

        assert!(outcome.is_none());
    }

    #[test]
    fn unknown_username_yields_no_account() {
        let directory = directory();

        let outcome = directory
            .authenticate("nadie", "whatever")
            .expect("authenticate");

        assert!(outcome.is_none());
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let directory = directory();
        directory
            .register("sacristan", "llaves-2024")
            .expect("register account");

        match directory.register("sacristan", "otra-clave") {
            Err(DirectoryError::DuplicateUsername(name)) => assert_eq!(name, "sacristan"),
            other => panic!("expected duplicate username error, got {other:?}"),
        }
    }

    #[test]
    fn usernames_are_case_sensitive() {
        let directory = directory();
        directory
            .register("Sacristan", "llaves-2024")
            .expect("register account");

        directory
            .register("sacristan", "llaves-2024")
            .expect("lowercase name is a distinct account");
    }

    #[test]
    fn empty_directory_seeds_the_default_admin() {
        let directory = directory();

        assert!(directory.ensure_default_admin().expect("seed admin"));
        let admin = directory
            .authenticate(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
            .expect("authenticate")
            .expect("default admin present");
        assert_eq!(admin.username, DEFAULT_ADMIN_USERNAME);
    }

    #[test]
    fn populated_directory_is_not_reseeded() {
        let directory = directory();
        directory
            .register("sacristan", "llaves-2024")
            .expect("register account");

        assert!(!directory.ensure_default_admin().expect("no seeding"));
        let outcome = directory
            .authenticate(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
            .expect("authenticate");
        assert!(outcome.is_none());
    }
}
