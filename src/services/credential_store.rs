// ============================================================================
// ALMACÉN DE CREDENCIALES
// ============================================================================
// Un único token compartido por todo el proceso: cualquier logout afecta
// a la siguiente lectura de todos los componentes.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;
use crate::utils::storage::{read_raw, remove_raw, write_raw};

pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// localStorage del navegador
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl CredentialStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        read_raw(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        write_raw(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        remove_raw(key)
    }
}

/// Almacén en memoria. Los clones comparten las mismas entradas.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Simula un storage lleno o bloqueado: toda escritura falla
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only.get() {
            return Err(StorageError::Write(key.to_string()));
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.read_only.get() {
            return Err(StorageError::Remove(key.to_string()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let store = MemoryCredentialStore::new();
        let other = store.clone();
        store.set("authToken", "abc").unwrap();
        assert_eq!(other.get("authToken").as_deref(), Some("abc"));
        other.remove("authToken").unwrap();
        assert_eq!(store.get("authToken"), None);
    }

    #[test]
    fn read_only_store_rejects_writes() {
        let store = MemoryCredentialStore::with_entry("authToken", "abc");
        store.set_read_only(true);
        assert_eq!(store.set("authToken", "x"), Err(StorageError::Write("authToken".into())));
        assert_eq!(store.remove("authToken"), Err(StorageError::Remove("authToken".into())));
        assert_eq!(store.get("authToken").as_deref(), Some("abc"));
    }
}
