//! Salted credential digests.
//!
//! Passwords never reach storage. Each account keeps a random salt and the
//! BLAKE3 digest of salt and password under a fixed domain tag, so equal
//! passwords still produce unrelated digests.

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Domain tag mixed into every digest so credential hashes cannot collide
/// with any other BLAKE3 use of the same bytes.
const CREDENTIAL_DOMAIN: &[u8] = b"parish-credential-v1";

const SALT_BYTES: usize = 16;

/// Salt and digest pair persisted for one account, both hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    pub salt: String,
    pub digest: String,
}

impl StoredCredential {
    /// Derive a credential for a new password with a fresh random salt.
    pub fn derive(password: &str) -> Self {
        let mut salt = [0u8; SALT_BYTES];
        rand::rngs::OsRng.fill_bytes(&mut salt);
        Self {
            salt: hex::encode(salt),
            digest: digest(&salt, password).to_hex().to_string(),
        }
    }

    /// Check an attempt against the stored digest. Comparison goes through
    /// `blake3::Hash` equality, which is constant time.
    pub fn matches(&self, password: &str) -> bool {
        let Ok(salt) = hex::decode(&self.salt) else {
            return false;
        };
        let Ok(stored) = blake3::Hash::from_hex(&self.digest) else {
            return false;
        };
        digest(&salt, password) == stored
    }
}

fn digest(salt: &[u8], password: &str) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(CREDENTIAL_DOMAIN);
    hasher.update(b":");
    hasher.update(salt);
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hasher.finalize()
}
