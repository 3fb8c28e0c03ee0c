//! Post Feed
//!
//! Holds the full fetched list and reveals it a page at a time.

use crate::domain::Post;
use crate::error::POSTS_LOAD_FAILED;
use crate::posts::PostSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFeed {
    posts: Vec<Post>,
    revealed: usize,
    page_size: usize,
}

impl PostFeed {
    /// Start with the first page revealed
    pub fn new(posts: Vec<Post>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let revealed = page_size.min(posts.len());
        Self { posts, revealed, page_size }
    }

    pub fn visible(&self) -> &[Post] {
        &self.posts[..self.revealed]
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn has_more(&self) -> bool {
        self.revealed < self.posts.len()
    }

    /// Reveal the next page; returns how many posts became visible
    pub fn reveal_more(&mut self) -> usize {
        let next = (self.revealed + self.page_size).min(self.posts.len());
        let added = next - self.revealed;
        self.revealed = next;
        added
    }
}

/// What the list view renders
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PostListState {
    #[default]
    Loading,
    Failed(String),
    Ready(PostFeed),
}

impl PostListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PostListState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PostListState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Posts currently on screen (empty unless loaded)
    pub fn visible(&self) -> &[Post] {
        match self {
            PostListState::Ready(feed) => feed.visible(),
            _ => &[],
        }
    }

    pub fn has_more(&self) -> bool {
        matches!(self, PostListState::Ready(feed) if feed.has_more())
    }

    pub fn reveal_more(&mut self) -> usize {
        match self {
            PostListState::Ready(feed) => feed.reveal_more(),
            _ => 0,
        }
    }
}

/// Fetch the post list once; failures become the fixed user message
pub async fn load_feed<S: PostSource + ?Sized>(source: &S, page_size: usize) -> PostListState {
    match source.list_posts().await {
        Ok(posts) => {
            log::debug!("Fetched {} posts", posts.len());
            PostListState::Ready(PostFeed::new(posts, page_size))
        }
        Err(e) => {
            log::error!("Error fetching posts: {}", e);
            PostListState::Failed(POSTS_LOAD_FAILED.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::source::tests::FakeSource;
    use crate::error::FetchError;

    fn posts(count: u32) -> Vec<Post> {
        (1..=count)
            .map(|id| Post {
                author_id: 1,
                id,
                title: format!("Post {}", id),
                body: "body".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_first_page_revealed() {
        let feed = PostFeed::new(posts(100), 10);
        assert_eq!(feed.revealed(), 10);
        assert_eq!(feed.visible().len(), 10);
        assert_eq!(feed.visible()[0].id, 1);
        assert!(feed.has_more());
    }

    #[test]
    fn test_reveal_more_until_exhausted() {
        let mut feed = PostFeed::new(posts(25), 10);

        assert_eq!(feed.reveal_more(), 10);
        assert_eq!(feed.revealed(), 20);
        assert_eq!(feed.reveal_more(), 5);
        assert_eq!(feed.revealed(), 25);
        assert!(!feed.has_more());

        assert_eq!(feed.reveal_more(), 0);
        assert_eq!(feed.visible().len(), 25);
    }

    #[test]
    fn test_short_list_fully_revealed() {
        let feed = PostFeed::new(posts(3), 10);
        assert_eq!(feed.visible().len(), 3);
        assert!(!feed.has_more());

        let empty = PostFeed::new(Vec::new(), 10);
        assert!(empty.visible().is_empty());
        assert!(!empty.has_more());
    }

    #[test]
    fn test_state_accessors() {
        assert!(PostListState::default().is_loading());
        assert!(PostListState::Loading.visible().is_empty());

        let mut ready = PostListState::Ready(PostFeed::new(posts(15), 10));
        assert!(ready.has_more());
        assert_eq!(ready.reveal_more(), 5);
        assert!(!ready.has_more());
        assert_eq!(ready.visible().len(), 15);
        assert!(ready.error().is_none());
    }

    #[tokio::test]
    async fn test_load_feed_success() {
        let source = FakeSource::new(posts(12), Vec::new());
        let state = load_feed(&source, 10).await;

        assert_eq!(state.visible().len(), 10);
        assert!(state.has_more());
    }

    #[tokio::test]
    async fn test_load_feed_failure_shows_message_and_no_items() {
        let source = FakeSource::failing(FetchError::Transport("connection refused".into()));
        let state = load_feed(&source, 10).await;

        assert_eq!(state.error(), Some(POSTS_LOAD_FAILED));
        assert!(state.visible().is_empty());
        assert!(!state.has_more());
        assert!(!state.is_loading());
    }
}
