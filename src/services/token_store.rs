use web_sys::{window, Storage};

use crate::utils::constants::TOKEN_KEY;

/// Capability interface for persisting the session token, so the storage
/// medium is swappable without touching the adapter or the views.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Durable browser storage under a single fixed key.
#[derive(Clone, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        self.storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn save(&self, token: &str) {
        match self.storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("⚠️ Could not persist session token");
                }
            }
            None => log::warn!("⚠️ localStorage unavailable, session will not survive a reload"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// In-memory store, used by tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: std::cell::RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_a_token() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.load(), None);

        store.save("jwt-token");
        assert_eq!(store.load().as_deref(), Some("jwt-token"));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn saving_overwrites_the_previous_token() {
        let store = MemoryTokenStore::default();
        store.save("first");
        store.save("second");
        assert_eq!(store.load().as_deref(), Some("second"));
    }
}
