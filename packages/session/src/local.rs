//! # Browser localStorage backend — web platform
//!
//! [`LocalStorage`] is the [`SessionStorage`] implementation used on the web.
//! It persists the session under the browser's `window.localStorage`, which
//! survives page reloads for the lifetime of the browser profile.
//!
//! Storage availability is a startup precondition: an environment that denies
//! localStorage access (no window, storage disabled) has no way to hold a
//! session, so [`LocalStorage::new`] panics rather than limping along with a
//! half-working app.

use crate::store::SessionStorage;

/// localStorage-backed SessionStorage for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> web_sys::Storage {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .expect("localStorage is unavailable; cannot hold a session")
    }
}

impl SessionStorage for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        let _ = self.storage().set_item(key, value);
    }

    fn remove(&self, key: &str) {
        let _ = self.storage().remove_item(key);
    }
}
