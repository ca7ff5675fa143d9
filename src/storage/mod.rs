use crate::error::Result;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// String key-value persistence, the shape of a browser's local storage.
///
/// Values are whole serialized collections; every mutation in the crate is
/// a read-modify-write of one value under one key. Implementations must
/// leave the previous value intact when a `set` fails.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Key layout of the persisted state.
pub mod keys {
    use uuid::Uuid;

    /// Serialized list of all registered users.
    pub const USERS_DIRECTORY: &str = "users-directory";

    /// Serialized currently-authenticated user.
    pub const SESSION: &str = "session";

    /// Serialized item list for one user.
    pub fn items(user_id: Uuid) -> String {
        format!("items-{user_id}")
    }
}
