//! Comment operations that keep the parent post's comment list in sync.

use tracing::info;

use crate::common::{CommentId, DomainError};
use crate::domains::comment::data::CreateCommentRequest;
use crate::domains::comment::models::Comment;
use crate::kernel::store::update;
use crate::kernel::Store;

pub fn add_comment(store: &Store, request: CreateCommentRequest) -> Result<Comment, DomainError> {
    let comment = Comment::new(
        request.post_id,
        request.author_id,
        request.author_kind,
        &request.content,
    )?;

    {
        let mut post = store.posts.get_mut(&request.post_id).ok_or_else(|| {
            DomainError::rule(format!("post {} does not exist", request.post_id))
        })?;
        if !post.active {
            return Err(DomainError::rule("cannot comment on an inactive post"));
        }
        post.attach_comment(comment.id);
    }
    store.comments.insert(comment.id, comment.clone());

    info!(comment_id = %comment.id, post_id = %comment.post_id, "Comment added");
    Ok(comment)
}

/// Deactivates a comment and drops it from its post.
pub fn remove_comment(store: &Store, id: CommentId) -> Result<Comment, DomainError> {
    let comment = update(&store.comments, &id, "comment", |comment| {
        comment.deactivate();
        Ok(comment.clone())
    })?;

    if let Some(mut post) = store.posts.get_mut(&comment.post_id) {
        post.detach_comment(id);
    }

    info!(comment_id = %id, "Comment removed");
    Ok(comment)
}

pub fn reactivate_comment(store: &Store, id: CommentId) -> Result<Comment, DomainError> {
    let comment = update(&store.comments, &id, "comment", |comment| {
        comment.reactivate();
        Ok(comment.clone())
    })?;

    if let Some(mut post) = store.posts.get_mut(&comment.post_id) {
        post.attach_comment(id);
    }

    info!(comment_id = %id, "Comment reactivated");
    Ok(comment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{PostId, UserKind};
    use crate::domains::post::models::Post;
    use uuid::Uuid;

    fn seeded() -> (Store, PostId) {
        let store = Store::new();
        let post = Post::new(Uuid::now_v7(), UserKind::Ngo, "Volunteers needed").unwrap();
        let id = post.id;
        store.posts.insert(id, post);
        (store, id)
    }

    fn request(post_id: PostId) -> CreateCommentRequest {
        CreateCommentRequest {
            author_id: Uuid::now_v7(),
            author_kind: UserKind::Volunteer,
            content: "Count me in".into(),
            post_id,
        }
    }

    #[test]
    fn comment_is_linked_to_post() {
        let (store, post_id) = seeded();
        let comment = add_comment(&store, request(post_id)).unwrap();
        assert_eq!(store.posts.get(&post_id).unwrap().comment_ids, vec![comment.id]);

        remove_comment(&store, comment.id).unwrap();
        assert!(store.posts.get(&post_id).unwrap().comment_ids.is_empty());
        assert!(!store.comments.get(&comment.id).unwrap().active);

        reactivate_comment(&store, comment.id).unwrap();
        assert_eq!(store.posts.get(&post_id).unwrap().comment_count(), 1);
    }

    #[test]
    fn unknown_or_inactive_post_is_rejected() {
        let (store, post_id) = seeded();
        let err = add_comment(&store, request(PostId::new())).unwrap_err();
        assert!(matches!(err, DomainError::RuleViolation(_)));

        store.posts.get_mut(&post_id).unwrap().deactivate();
        assert!(add_comment(&store, request(post_id)).is_err());
        assert!(store.comments.is_empty());
    }
}
