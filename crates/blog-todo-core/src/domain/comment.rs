//! Comment Entity

use serde::{Deserialize, Serialize};

use super::post::PostId;

/// A reader response attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: PostId,
    pub id: u32,
    pub name: String,
    pub email: String,
    pub body: String,
}
