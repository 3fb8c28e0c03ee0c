//! Post Browser
//!
//! Remote source abstraction, the reveal-more feed, the detail loader and
//! the request deadline.

mod deadline;
mod detail;
mod feed;
mod source;

pub use deadline::race_timeout;
pub use detail::{load_post_detail, PostDetail};
pub use feed::{load_feed, PostFeed, PostListState};
pub use source::PostSource;
