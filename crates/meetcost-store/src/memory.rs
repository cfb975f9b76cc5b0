use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use meetcost_core::{MeetcostError, Result};
use serde_json::Value;

use crate::kv::KvStore;

/// Process-local store backed by a map.
///
/// # Examples
///
/// ```
/// use meetcost_store::{load_settings, MemoryStore};
///
/// let store = MemoryStore::new();
/// assert_eq!(load_settings(&store).unwrap().currency, "USD");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently set.
    ///
    /// # Errors
    ///
    /// Returns [`MeetcostError::Store`] if an earlier writer panicked while
    /// holding the lock.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Value>>> {
        self.entries
            .lock()
            .map_err(|_| MeetcostError::Store("memory store lock poisoned".into()))
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &Value) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn set_overwrites() {
        let store = MemoryStore::new();
        store.set("k", &json!([1, 2])).unwrap();
        store.set("k", &json!([3])).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!([3])));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn starts_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty().unwrap());
        assert_eq!(store.get("meetings").unwrap(), None);
    }

    #[test]
    fn poisoned_lock_is_a_store_error_everywhere() {
        let store = Arc::new(MemoryStore::new());
        let writer = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = writer.entries.lock().unwrap();
            panic!("writer failed mid-update");
        })
        .join();

        assert!(matches!(store.len(), Err(MeetcostError::Store(_))));
        assert!(matches!(store.is_empty(), Err(MeetcostError::Store(_))));
        assert!(matches!(store.get("k"), Err(MeetcostError::Store(_))));
        assert!(matches!(store.set("k", &json!(1)), Err(MeetcostError::Store(_))));
    }
}
