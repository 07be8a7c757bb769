//! Book search domain module.

mod model;

pub use model::{Book, SearchRequest, SearchResult};
