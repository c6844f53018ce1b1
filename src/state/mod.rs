mod persistence;
mod session;
mod storage;

pub use persistence::{PersistedState, PersistenceBridge};
pub use session::{LoadOutcome, Session};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::DirectoryStore;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{KeyValueStore, MemoryStore};
