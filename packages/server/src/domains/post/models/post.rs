use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::common::profile::required;
use crate::common::time::within;
use crate::common::{CommentId, DomainError, PostId, UserKind};

pub const MAX_CONTENT_LEN: usize = 2000;

/// A feed entry published by a volunteer or an NGO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: Uuid,
    pub author_kind: UserKind,
    pub content: String,
    pub image_url: Option<String>,
    /// Ids of users (of either kind) who liked the post.
    pub likes: HashSet<Uuid>,
    /// Active comments, oldest first.
    pub comment_ids: Vec<CommentId>,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

impl Post {
    pub fn new(author_id: Uuid, author_kind: UserKind, content: &str) -> Result<Self, DomainError> {
        if author_id.is_nil() {
            return Err(DomainError::validation("author_id is required"));
        }
        Ok(Self {
            id: PostId::new(),
            author_id,
            author_kind,
            content: checked_content(content)?,
            image_url: None,
            likes: HashSet::new(),
            comment_ids: Vec::new(),
            created_at: Utc::now(),
            active: true,
        })
    }

    /// Returns `false` if the user had already liked the post.
    pub fn like(&mut self, user_id: Uuid) -> Result<bool, DomainError> {
        self.ensure_active()?;
        Ok(self.likes.insert(user_id))
    }

    pub fn unlike(&mut self, user_id: Uuid) -> bool {
        self.likes.remove(&user_id)
    }

    pub fn is_liked_by(&self, user_id: Uuid) -> bool {
        self.likes.contains(&user_id)
    }

    pub fn edit(&mut self, content: &str) -> Result<(), DomainError> {
        self.ensure_active()?;
        self.content = checked_content(content)?;
        Ok(())
    }

    pub fn attach_comment(&mut self, comment_id: CommentId) {
        if !self.comment_ids.contains(&comment_id) {
            self.comment_ids.push(comment_id);
        }
    }

    pub fn detach_comment(&mut self, comment_id: CommentId) {
        self.comment_ids.retain(|id| *id != comment_id);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn reactivate(&mut self) {
        self.active = true;
    }

    pub fn has_image(&self) -> bool {
        self.image_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    pub fn is_recent(&self) -> bool {
        within(self.created_at, Duration::hours(24))
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comment_ids.len()
    }

    fn ensure_active(&self) -> Result<(), DomainError> {
        if !self.active {
            return Err(DomainError::rule("post is inactive"));
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post::new(Uuid::now_v7(), UserKind::Volunteer, "First day at the shelter!").unwrap()
    }

    #[test]
    fn content_limits() {
        assert!(Post::new(Uuid::now_v7(), UserKind::Ngo, "   ").is_err());
        assert!(Post::new(Uuid::now_v7(), UserKind::Ngo, &"x".repeat(2001)).is_err());
        assert!(Post::new(Uuid::now_v7(), UserKind::Ngo, &"x".repeat(2000)).is_ok());
        assert!(Post::new(Uuid::nil(), UserKind::Ngo, "hello").is_err());
    }

    #[test]
    fn likes_are_unique() {
        let mut p = post();
        let user = Uuid::now_v7();
        assert!(p.like(user).unwrap());
        assert!(!p.like(user).unwrap());
        assert_eq!(p.like_count(), 1);
        assert!(p.unlike(user));
        assert!(!p.unlike(user));
        assert_eq!(p.like_count(), 0);
    }

    #[test]
    fn inactive_post_rejects_likes_and_edits() {
        let mut p = post();
        p.deactivate();
        assert!(p.like(Uuid::now_v7()).is_err());
        assert!(p.edit("updated").is_err());

        p.reactivate();
        p.edit("updated").unwrap();
        assert_eq!(p.content, "updated");
    }

    #[test]
    fn comment_bookkeeping() {
        let mut p = post();
        let c = CommentId::new();
        p.attach_comment(c);
        p.attach_comment(c);
        assert_eq!(p.comment_count(), 1);
        p.detach_comment(c);
        assert_eq!(p.comment_count(), 0);
    }

    #[test]
    fn image_and_recency() {
        let mut p = post();
        assert!(!p.has_image());
        p.image_url = Some("https://img.example.org/a.png".into());
        assert!(p.has_image());
        assert!(p.is_recent());

        p.created_at = Utc::now() - Duration::hours(25);
        assert!(!p.is_recent());
    }
}
