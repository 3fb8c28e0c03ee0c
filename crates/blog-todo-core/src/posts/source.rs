//! Post Source Trait

use async_trait::async_trait;

use crate::domain::{Comment, Post, PostId};
use crate::error::FetchError;

/// Remote reads used by the post browser
///
/// Futures are `?Send`: the browser implementation runs on the main thread.
#[async_trait(?Send)]
pub trait PostSource {
    /// Full post collection
    async fn list_posts(&self) -> Result<Vec<Post>, FetchError>;

    /// Comments whose `postId` equals `post_id`
    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, FetchError>;
}
