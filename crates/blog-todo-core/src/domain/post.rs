//! Post Entity
//!
//! A blog entry as served by the posts endpoint.

use serde::{Deserialize, Serialize};

pub type PostId = u32;

/// Number of body characters shown in the list before the ellipsis
const EXCERPT_CHARS: usize = 60;

/// A blog post (immutable once fetched)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Author of the post (`userId` on the wire)
    #[serde(rename = "userId", alias = "authorId")]
    pub author_id: u32,
    pub id: PostId,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Shortened body for list rendering
    pub fn excerpt(&self) -> String {
        excerpt(&self.body, EXCERPT_CHARS)
    }
}

/// Cut `text` to `max_chars` characters and append "..." when it was longer.
fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_from_wire_json() {
        let raw = r#"{"userId": 3, "id": 21, "title": "hello", "body": "world"}"#;
        let post: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(post.author_id, 3);
        assert_eq!(post.id, 21);
        assert_eq!(post.title, "hello");
    }

    #[test]
    fn test_post_accepts_author_id_alias() {
        let raw = r#"{"authorId": 7, "id": 1, "title": "t", "body": "b"}"#;
        let post: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(post.author_id, 7);
    }

    #[test]
    fn test_excerpt_short_text_untouched() {
        assert_eq!(excerpt("short body", 60), "short body");
        let exactly = "a".repeat(60);
        assert_eq!(excerpt(&exactly, 60), exactly);
    }

    #[test]
    fn test_excerpt_long_text_truncated() {
        let long = "b".repeat(61);
        assert_eq!(excerpt(&long, 60), format!("{}...", "b".repeat(60)));
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let text = "é".repeat(65);
        let cut = excerpt(&text, 60);
        assert_eq!(cut.chars().count(), 63);
        assert!(cut.ends_with("..."));
    }
}
