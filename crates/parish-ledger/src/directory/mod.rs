//! Account directory backing the login flow.
//!
//! Accounts are global rather than per parish: a single partition serves every
//! parish the installation manages.

mod domain;
mod password;
mod service;

pub use domain::User;
pub use password::StoredCredential;
pub use service::{DirectoryError, UserDirectory, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
