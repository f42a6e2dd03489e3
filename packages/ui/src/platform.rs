//! Platform selection for session persistence and backend access.
//!
//! On the web build the session lives in the browser's localStorage; native
//! builds (tests, previews) fall back to one process-wide in-memory store so
//! every view observes the same session either way.

use api::{ApiClient, ApiConfig};
use session::{SessionStorage, SessionStore};

/// Session store backed by the platform's storage.
pub fn session_store() -> SessionStore<impl SessionStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(session::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;
        static STORAGE: OnceLock<session::MemoryStorage> = OnceLock::new();
        SessionStore::new(STORAGE.get_or_init(session::MemoryStorage::new).clone())
    }
}

/// API client wired to the platform session store.
pub fn api_client() -> ApiClient<impl SessionStorage> {
    ApiClient::new(ApiConfig::default(), session_store())
}

/// Ask the user to confirm a destructive action. Browser builds show the
/// native confirm dialog; elsewhere the action proceeds unprompted.
pub fn confirm_dialog(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        true
    }
}
