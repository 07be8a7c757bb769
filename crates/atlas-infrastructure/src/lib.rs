pub mod paths;
pub mod storage;

pub use crate::paths::{AtlasPaths, PathError};
pub use crate::storage::{ConfigStorage, FileKeyValueStore};
