use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::profile::required;
use crate::common::time::within;
use crate::common::{CommentId, DomainError, PostId, UserKind};

pub const MAX_CONTENT_LEN: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: Uuid,
    pub author_kind: UserKind,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

impl Comment {
    pub fn new(
        post_id: PostId,
        author_id: Uuid,
        author_kind: UserKind,
        content: &str,
    ) -> Result<Self, DomainError> {
        if author_id.is_nil() {
            return Err(DomainError::validation("author_id is required"));
        }
        Ok(Self {
            id: CommentId::new(),
            post_id,
            author_id,
            author_kind,
            content: checked_content(content)?,
            created_at: Utc::now(),
            active: true,
        })
    }

    pub fn edit(&mut self, content: &str) -> Result<(), DomainError> {
        if !self.active {
            return Err(DomainError::rule("comment is inactive"));
        }
        self.content = checked_content(content)?;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn reactivate(&mut self) {
        self.active = true;
    }

    pub fn is_recent(&self) -> bool {
        within(self.created_at, Duration::hours(24))
    }
}

fn checked_content(content: &str) -> Result<String, DomainError> {
    let content = required("content", content)?;
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(DomainError::validation(format!(
            "content must be at most {} characters",
            MAX_CONTENT_LEN
        )));
    }
    Ok(content)
}
