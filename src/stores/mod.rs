pub mod session_store;

pub use session_store::{MemoryStorage, SessionStore, TokenStorage};
#[cfg(target_arch = "wasm32")]
pub use session_store::BrowserStorage;
