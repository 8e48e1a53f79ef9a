use std::cell::RefCell;
use std::rc::Rc;
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use crate::utils::constants::STORAGE_KEY_TOKEN;

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    LocalStorage::set(key, value).map_err(|e| format!("Error guardando en localStorage: {}", e))
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    LocalStorage::get(key).ok()
}

pub fn remove_from_storage(key: &str) {
    LocalStorage::delete(key);
}

/// Persistencia de la credencial entre recargas
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), String>;
    fn clear(&self);
}

/// localStorage del navegador
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalCredentialStore;

impl CredentialStore for LocalCredentialStore {
    fn load(&self) -> Option<String> {
        load_from_storage::<String>(STORAGE_KEY_TOKEN).filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), String> {
        save_to_storage(STORAGE_KEY_TOKEN, &token)
    }

    fn clear(&self) {
        remove_from_storage(STORAGE_KEY_TOKEN);
    }
}

/// En memoria (tests y entornos sin localStorage)
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentialStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryCredentialStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.to_string()))),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryCredentialStore::default();
        assert_eq!(store.load(), None);
        store.save("abc").unwrap();
        let shared = store.clone();
        assert_eq!(shared.load().as_deref(), Some("abc"));
        shared.clear();
        assert_eq!(store.load(), None);
    }
}
