use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write key `{0}`")]
    Write(String),
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::StorageError;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }

    pub fn get_item(key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    pub fn remove_item(key: &str) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    //! Host builds mirror localStorage with a thread-local map so the stores
    //! and their tests run off-browser. Each test thread gets an isolated
    //! store.

    use super::StorageError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn set_item(key: &str, value: &str) -> Result<(), StorageError> {
        STORE.with(|store| {
            store
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    pub fn remove_item(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }

    pub fn clear() {
        STORE.with(|store| store.borrow_mut().clear());
    }
}

pub use backend::{get_item, remove_item, set_item};

#[cfg(not(target_arch = "wasm32"))]
pub use backend::clear;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        clear();
        assert!(get_item("missing").is_none());

        set_item("greeting", "hello").unwrap();
        assert_eq!(get_item("greeting").as_deref(), Some("hello"));

        set_item("greeting", "bonjour").unwrap();
        assert_eq!(get_item("greeting").as_deref(), Some("bonjour"));

        remove_item("greeting");
        assert!(get_item("greeting").is_none());
    }

    #[test]
    fn clear_empties_every_key() {
        set_item("a", "1").unwrap();
        set_item("b", "2").unwrap();
        clear();
        assert!(get_item("a").is_none());
        assert!(get_item("b").is_none());
    }
}
