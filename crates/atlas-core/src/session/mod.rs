//! Client session domain module.
//!
//! # Module Structure
//!
//! - `model`: the in-memory session record and restoration state
//! - `storage`: the key-value storage port the session is persisted through

mod model;
mod storage;

pub use model::{Restoration, Session};
pub use storage::{InMemoryKeyValueStore, KeyValueStore, TOKEN_KEY, USER_KEY};
