use web_sys::{window, Storage};

use crate::error::StorageError;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn read_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn write_raw(key: &str, value: &str) -> Result<(), StorageError> {
    let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
    storage.set_item(key, value)
        .map_err(|_| StorageError::Write(key.to_string()))
}

pub fn remove_raw(key: &str) -> Result<(), StorageError> {
    let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
    storage.remove_item(key)
        .map_err(|_| StorageError::Remove(key.to_string()))
}
