//! In-memory store, used for tests and `--store memory`

use super::{KeyValueStore, StoreError};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_get_remove_clear() {
        let mut store = MemoryStore::new();
        assert!(store.get("xp").is_none());

        store.set("xp", json!(120)).unwrap();
        store.set("username", json!("ana")).unwrap();
        assert_eq!(store.get("xp"), Some(json!(120)));
        assert_eq!(store.len(), 2);

        store.remove("xp").unwrap();
        store.remove("xp").unwrap();
        assert!(store.get("xp").is_none());

        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
