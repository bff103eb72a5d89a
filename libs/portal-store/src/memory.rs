use std::collections::HashMap;

use parking_lot::RwLock;

use crate::KvStore;

/// Purely in-memory backend. Models a fresh browser profile: nothing
/// survives the process. Default choice for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: String) {
        self.entries.write().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_is_idempotent() {
        let store = MemoryStore::new();
        store.set_raw("k", "v".into());
        store.remove("k");
        store.remove("k");
        assert_eq!(store.get_raw("k"), None);
    }
}
