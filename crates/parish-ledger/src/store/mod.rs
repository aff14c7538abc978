//! Key-value storage port and the JSON collection layer shared by the ledgers.
//!
//! Every ledger owns whole partitions: a read returns the full collection and
//! a write replaces it. The port assumes a single writer per partition, which
//! the CLI satisfies by being one synchronous process.

mod file;
pub mod keys;
mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Storage abstraction so the ledgers can be exercised against any backend.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io failure on partition '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode partition '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Decode a stored JSON array. A missing partition is an empty collection; a
/// malformed one is logged and also treated as empty so a single corrupt
/// partition cannot take the whole tool down.
pub fn read_collection<T, S>(store: &S, key: &str) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            warn!(
                partition = key,
                error = %err,
                "stored partition is not a valid JSON array, treating it as empty"
            );
            Ok(Vec::new())
        }
    }
}

/// Encode and persist a collection, replacing the partition as a whole.
pub fn write_collection<T, S>(store: &S, key: &str, items: &[T]) -> Result<(), StoreError>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let encoded = serde_json::to_string(items).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.put(key, &encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_partition_reads_as_empty() {
        let store = InMemoryStore::new();
        let items: Vec<String> = read_collection(&store, "users").expect("read succeeds");
        assert!(items.is_empty());
    }

    #[test]
    fn malformed_partition_reads_as_empty() {
        let store = InMemoryStore::new();
        store.put("users", "{not json").expect("put succeeds");
        let items: Vec<String> = read_collection(&store, "users").expect("read succeeds");
        assert!(items.is_empty());
    }

    #[test]
    fn collections_round_trip_in_order() {
        let store = InMemoryStore::new();
        let names = vec!["Boda".to_string(), "Bautizo".to_string(), "XV".to_string()];
        write_collection(&store, "celebrations", &names).expect("write succeeds");
        let read: Vec<String> = read_collection(&store, "celebrations").expect("read succeeds");
        assert_eq!(read, names);
    }
}
