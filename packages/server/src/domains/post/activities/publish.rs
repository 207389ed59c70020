use tracing::info;
use uuid::Uuid;

use crate::common::{DomainError, NgoId, UserKind};
use crate::domains::notification::activities::notify_new_post;
use crate::domains::post::data::CreatePostRequest;
use crate::domains::post::models::Post;
use crate::kernel::Store;

/// Stores a post. Posts by a known NGO are announced to its followers.
pub fn publish(store: &Store, request: CreatePostRequest) -> Result<Post, DomainError> {
    let mut post = Post::new(request.author_id, request.author_kind, &request.content)?;
    post.image_url = request.image_url.filter(|url| !url.trim().is_empty());
    store.posts.insert(post.id, post.clone());

    if post.author_kind == UserKind::Ngo {
        let followers: Option<Vec<Uuid>> = store
            .ngos
            .get(&NgoId::from_uuid(post.author_id))
            .map(|ngo| ngo.followers.iter().map(|id| id.into_uuid()).collect());
        if let Some(followers) = followers {
            notify_new_post(store, post.id, post.author_id, &followers);
        }
    }

    info!(post_id = %post.id, author_id = %post.author_id, "Post published");
    Ok(post)
}
