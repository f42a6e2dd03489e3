pub mod guard;
pub mod models;
pub mod store;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use guard::{admin_only, protected, GuardDecision, RedirectTarget};
pub use models::{Role, User};
pub use store::{SessionStorage, SessionStore};
