use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{KeyValueStore, StoreError};

/// Process-local store backing tests and the demo command.
#[derive(Default, Clone)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let guard = self.entries.lock().expect("store mutex poisoned");
        Ok(guard.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().expect("store mutex poisoned");
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_last_put() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("users").expect("get"), None);
        store.put("users", "[]").expect("put");
        store.put("users", "[{}]").expect("put");
        assert_eq!(store.get("users").expect("get"), Some("[{}]".to_string()));
    }

    #[test]
    fn clones_share_the_same_entries() {
        let store = InMemoryStore::new();
        let alias = store.clone();
        store.put("users", "[]").expect("put");
        assert_eq!(alias.get("users").expect("get"), Some("[]".to_string()));
    }
}
