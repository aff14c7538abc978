use serde::{Deserialize, Serialize};

use super::password::StoredCredential;

/// Directory account. The password itself never appears here, only its salted
/// digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub credential: StoredCredential,
}
