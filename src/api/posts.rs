//! HTTP Post Source
//!
//! reqwest (fetch on wasm32) against the posts/comments API. A source built
//! with `bounded` races every request against a JS timer.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use blog_todo_core::domain::{Comment, Post, PostId};
use blog_todo_core::posts::{race_timeout, PostSource};
use blog_todo_core::{AppConfig, FetchError};

#[derive(Clone)]
pub struct HttpPostSource {
    client: reqwest::Client,
    posts_url: String,
    comments_url: String,
    timeout_ms: Option<u32>,
}

impl HttpPostSource {
    /// Requests wait as long as the browser lets them
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            posts_url: config.posts_url(),
            comments_url: config.comments_url(),
            timeout_ms: None,
        }
    }

    /// Fail any request still pending after `timeout_ms`
    pub fn bounded(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let request = async {
            let response = self
                .client
                .get(url)
                .query(query)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            FetchError::check_status(response.status().as_u16())?;

            response
                .json::<T>()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))
        };

        match self.timeout_ms {
            Some(ms) => race_timeout(request, TimeoutFuture::new(ms), ms).await,
            None => request.await,
        }
    }
}

#[async_trait(?Send)]
impl PostSource for HttpPostSource {
    async fn list_posts(&self) -> Result<Vec<Post>, FetchError> {
        self.get_json(&self.posts_url, &[]).await
    }

    async fn list_comments(&self, post_id: PostId) -> Result<Vec<Comment>, FetchError> {
        self.get_json(&self.comments_url, &[("postId", post_id.to_string())])
            .await
    }
}
