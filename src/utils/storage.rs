use std::cell::RefCell;
use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

/// Durable key/value storage seam. The browser implementation is
/// `LocalStorage`; tests substitute `MemoryStorage` so session logic can run
/// without a DOM.
pub trait StoragePort {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Removes every key, not just the ones this app owns.
    fn clear(&self);
}

fn raw_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// `window.localStorage`. All operations degrade to no-ops when the browser
/// denies storage access (private mode quirks) - a lost write is equivalent to
/// the user clearing storage, which the session layer already tolerates.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl StoragePort for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        raw_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = raw_local_storage() {
            if storage.set_item(key, value).is_err() {
                log::error!("💾 No se pudo escribir la clave '{}' en localStorage", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = raw_local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear(&self) {
        if let Some(storage) = raw_local_storage() {
            let _ = storage.clear();
        }
    }
}

/// In-memory stand-in for localStorage, used by the unit tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// Serializes `value` as JSON under `key`.
pub fn save_json<T: Serialize>(storage: &impl StoragePort, key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value).map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set(key, &json);
    Ok(())
}

/// Reads and deserializes `key`; any parse failure reads as absent.
pub fn load_json<T: DeserializeOwned>(storage: &impl StoragePort, key: &str) -> Option<T> {
    let json = storage.get(key)?;
    serde_json::from_str(&json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        storage.set("k", "v");
        assert_eq!(storage.get("k").as_deref(), Some("v"));
        storage.remove("k");
        assert_eq!(storage.get("k"), None);
    }

    #[test]
    fn clear_removes_every_key() {
        let storage = MemoryStorage::new();
        storage.set("a", "1");
        storage.set("b", "2");
        storage.clear();
        assert!(storage.is_empty());
    }

    #[test]
    fn load_json_tolerates_garbage() {
        let storage = MemoryStorage::new();
        storage.set("user", "not json {");
        assert_eq!(load_json::<Vec<u32>>(&storage, "user"), None);

        save_json(&storage, "nums", &vec![1u32, 2, 3]).unwrap();
        assert_eq!(load_json::<Vec<u32>>(&storage, "nums"), Some(vec![1, 2, 3]));
    }
}
