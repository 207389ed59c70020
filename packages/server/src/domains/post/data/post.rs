use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{PostId, UserKind};
use crate::domains::post::models::Post;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub author_id: Uuid,
    pub author_kind: UserKind,
    pub content: String,
    pub image_url: Option<String>,
}

/// Body of the content edit routes, shared with comments.
#[derive(Debug, Clone, Deserialize)]
pub struct EditContentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub total_likes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnlikeResponse {
    pub unliked: bool,
    pub total_likes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LikedResponse {
    pub liked: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedQuery {
    #[serde(default = "default_feed_limit")]
    pub limit: usize,
}

fn default_feed_limit() -> usize {
    20
}

#[derive(Debug, Clone, Serialize)]
pub struct PostStats {
    pub id: PostId,
    pub likes: usize,
    pub comments: usize,
    pub has_image: bool,
    pub is_recent: bool,
    pub is_ngo_author: bool,
    pub is_volunteer_author: bool,
    pub active: bool,
}

impl From<&Post> for PostStats {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            likes: post.like_count(),
            comments: post.comment_count(),
            has_image: post.has_image(),
            is_recent: post.is_recent(),
            is_ngo_author: post.author_kind == UserKind::Ngo,
            is_volunteer_author: post.author_kind == UserKind::Volunteer,
            active: post.active,
        }
    }
}
