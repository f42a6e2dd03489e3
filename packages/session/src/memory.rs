use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::store::SessionStorage;

/// In-memory SessionStorage for testing and native fallback.
///
/// Clones share the same underlying map, so every [`crate::SessionStore`]
/// built from a clone observes the same session.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.read("k").is_none());

        storage.write("k", "v");
        assert_eq!(storage.read("k").as_deref(), Some("v"));

        storage.remove("k");
        assert!(storage.read("k").is_none());
    }

    #[test]
    fn clones_share_state() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.write("k", "v");
        assert_eq!(b.read("k").as_deref(), Some("v"));
    }
}
