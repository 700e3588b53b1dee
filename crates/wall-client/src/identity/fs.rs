//! File-backed profile store - survives restarts.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use super::{ProfileError, ProfileStore};

/// Profile slots in a single JSON file.
///
/// The whole map is rewritten on every mutation; the payload is a display
/// name, so the file stays tiny. Writers are serialized through a mutex so
/// two sets cannot interleave their read-rewrite cycles.
pub struct FsProfileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FsProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<HashMap<String, String>, ProfileError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| ProfileError::Storage(e.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(ProfileError::Storage(e.to_string())),
        }
    }

    fn save(&self, slots: &HashMap<String, String>) -> Result<(), ProfileError> {
        let bytes =
            serde_json::to_vec_pretty(slots).map_err(|e| ProfileError::Storage(e.to_string()))?;
        std::fs::write(&self.path, bytes).map_err(|e| ProfileError::Storage(e.to_string()))
    }
}

impl ProfileStore for FsProfileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ProfileError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ProfileError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut slots = self.load()?;
        slots.insert(key.to_owned(), value.to_owned());
        self.save(&slots)
    }

    fn clear(&self, key: &str) -> Result<(), ProfileError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut slots = self.load()?;
        slots.remove(key);
        self.save(&slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");

        FsProfileStore::new(&path).set("username", "alice").unwrap();

        let reopened = FsProfileStore::new(&path);
        assert_eq!(reopened.get("username").unwrap().as_deref(), Some("alice"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsProfileStore::new(dir.path().join("absent.json"));

        assert_eq!(store.get("username").unwrap(), None);
    }

    #[test]
    fn clear_rewrites_the_file_without_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let store = FsProfileStore::new(&path);

        store.set("username", "alice").unwrap();
        store.set("theme", "dark").unwrap();
        store.clear("username").unwrap();

        assert_eq!(store.get("username").unwrap(), None);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, b"not json").unwrap();

        let store = FsProfileStore::new(&path);
        assert!(store.get("username").is_err());
    }
}
