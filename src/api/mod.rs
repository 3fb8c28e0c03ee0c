//! Browser Adapters
//!
//! Implementations of the core traits on top of fetch and localStorage.

mod posts;
mod storage;

pub use posts::HttpPostSource;
pub use storage::BrowserStore;
