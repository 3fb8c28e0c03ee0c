//! Post Detail Loader
//!
//! Fetches the post list and the post's comments concurrently; the view
//! renders only once both have settled.

use crate::domain::{Comment, Post, PostId};
use crate::error::DetailError;
use crate::posts::PostSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub post: Post,
    pub comments: Vec<Comment>,
}

/// Load one post and its comments.
///
/// A failure of either request wins over "not found".
pub async fn load_post_detail<S: PostSource + ?Sized>(
    source: &S,
    post_id: PostId,
) -> Result<PostDetail, DetailError> {
    let (posts, comments) = futures::try_join!(source.list_posts(), source.list_comments(post_id))
        .map_err(|e| {
            log::error!("Error fetching post {} details: {}", post_id, e);
            DetailError::from(e)
        })?;

    let post = posts
        .into_iter()
        .find(|post| post.id == post_id)
        .ok_or(DetailError::NotFound(post_id))?;

    log::debug!("Loaded post {} with {} comments", post_id, comments.len());
    Ok(PostDetail { post, comments })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, DETAIL_LOAD_FAILED, POST_NOT_FOUND};
    use crate::posts::source::tests::FakeSource;

    fn post(id: PostId) -> Post {
        Post {
            author_id: 1,
            id,
            title: format!("title {}", id),
            body: format!("body {}", id),
        }
    }

    fn comment(post_id: PostId, id: u32) -> Comment {
        Comment {
            post_id,
            id,
            name: format!("commenter {}", id),
            email: format!("c{}@example.com", id),
            body: "great post".to_string(),
        }
    }

    #[tokio::test]
    async fn test_detail_with_comments() {
        let source = FakeSource::new(
            vec![post(1), post(2)],
            vec![comment(2, 10), comment(1, 11), comment(2, 12)],
        );

        let detail = load_post_detail(&source, 2).await.expect("detail should load");
        assert_eq!(detail.post, post(2));
        assert_eq!(detail.comments.iter().map(|c| c.id).collect::<Vec<_>>(), [10, 12]);
    }

    #[tokio::test]
    async fn test_detail_without_comments_is_not_an_error() {
        let source = FakeSource::new(vec![post(1)], Vec::new());
        let detail = load_post_detail(&source, 1).await.unwrap();
        assert!(detail.comments.is_empty());
    }

    #[tokio::test]
    async fn test_detail_not_found() {
        let source = FakeSource::new(vec![post(1)], Vec::new());
        let err = load_post_detail(&source, 404).await.unwrap_err();
        assert_eq!(err, DetailError::NotFound(404));
        assert_eq!(err.user_message(), POST_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_detail_transport_failure() {
        let source = FakeSource::failing(FetchError::Timeout(5000));
        let err = load_post_detail(&source, 1).await.unwrap_err();
        assert_eq!(err, DetailError::Fetch(FetchError::Timeout(5000)));
        assert_eq!(err.user_message(), DETAIL_LOAD_FAILED);
    }

    #[tokio::test]
    async fn test_comment_failure_beats_not_found() {
        let source = FakeSource::new(vec![post(1)], Vec::new())
            .with_comments_error(FetchError::Status(500));
        let err = load_post_detail(&source, 99).await.unwrap_err();
        assert_eq!(err, DetailError::Fetch(FetchError::Status(500)));
    }
}
