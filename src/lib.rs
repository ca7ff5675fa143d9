//! Record keeper for "proof of activity" uploads: per-user collections of
//! dated, soft-deletable items persisted through a string key-value store.
//!
//! The view layer lives elsewhere; this crate is the user directory, the
//! item repository, and the session glue between them.

pub mod config;
pub mod error;
pub mod items;
pub mod logging;
pub mod session;
pub mod state;
pub mod storage;
pub mod users;

pub use error::{Error, Result};
pub use session::Session;
pub use state::AppState;
