use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{CommentId, PostId, UserKind};
use crate::domains::comment::models::Comment;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub author_id: Uuid,
    pub author_kind: UserKind,
    pub content: String,
    pub post_id: PostId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentCommentsQuery {
    #[serde(default = "default_recent_limit")]
    pub limit: usize,
}

fn default_recent_limit() -> usize {
    50
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentStats {
    pub id: CommentId,
    pub post_id: PostId,
    pub length: usize,
    pub is_recent: bool,
    pub active: bool,
}

impl From<&Comment> for CommentStats {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            length: comment.content.chars().count(),
            is_recent: comment.is_recent(),
            active: comment.active,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentTotals {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub recent: usize,
}
