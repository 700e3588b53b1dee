//! In-memory profile store - per-process, lost on restart.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{ProfileError, ProfileStore};

/// Profile slots in a HashMap. The fallback when no profile path is
/// configured, and the usual test double.
pub struct InMemoryProfileStore {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ProfileError> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ProfileError> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), ProfileError> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear() {
        let store = InMemoryProfileStore::new();

        store.set("username", "alice").unwrap();
        assert_eq!(store.get("username").unwrap().as_deref(), Some("alice"));

        store.clear("username").unwrap();
        assert_eq!(store.get("username").unwrap(), None);
    }

    #[test]
    fn clearing_a_missing_key_is_fine() {
        let store = InMemoryProfileStore::new();
        store.clear("username").unwrap();
    }
}
