//! `/api/posts` routes.

use axum::{
    extract::Extension,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::common::{ApiResult, JsonBody, PathParams, PostId, QueryParams, UserKind};
use crate::domains::post::activities::publish;
use crate::domains::post::data::{
    CreatePostRequest, EditContentRequest, FeedQuery, LikeResponse, LikedResponse, PostStats,
    UnlikeResponse,
};
use crate::domains::post::Post;
use crate::kernel::store::{collect, find, update};
use crate::server::app::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_post).get(list_posts))
        .route("/feed/recent", get(recent_feed))
        .route("/feed/popular", get(popular_feed))
        .route("/by-author/:author_id", get(posts_by_author))
        .route("/by-kind/:kind", get(posts_by_kind))
        .route("/:id", get(get_post).put(edit_post).delete(deactivate_post))
        .route("/:id/likes", get(list_likes))
        .route(
            "/:id/likes/:user_id",
            post(like_post).delete(unlike_post).get(has_liked),
        )
        .route("/:id/stats", get(post_stats))
}

fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
    posts
}

async fn create_post(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<Post>)> {
    let post = publish(&state.store, request)?;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn list_posts(Extension(state): Extension<AppState>) -> Json<Vec<Post>> {
    Json(newest_first(collect(&state.store.posts, |p| p.active)))
}

async fn get_post(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<PostId>,
) -> ApiResult<Json<Post>> {
    debug!(post_id = %id, "Fetching post");
    Ok(Json(find(&state.store.posts, &id, "post")?))
}

async fn edit_post(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<PostId>,
    JsonBody(request): JsonBody<EditContentRequest>,
) -> ApiResult<Json<Post>> {
    let post = update(&state.store.posts, &id, "post", |post| {
        post.edit(&request.content)?;
        Ok(post.clone())
    })?;

    info!(post_id = %id, "Post edited");
    Ok(Json(post))
}

async fn deactivate_post(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<PostId>,
) -> ApiResult<StatusCode> {
    update(&state.store.posts, &id, "post", |post| {
        post.deactivate();
        Ok(())
    })?;

    info!(post_id = %id, "Post deactivated");
    Ok(StatusCode::NO_CONTENT)
}

async fn like_post(
    Extension(state): Extension<AppState>,
    PathParams((id, user_id)): PathParams<(PostId, Uuid)>,
) -> ApiResult<Json<LikeResponse>> {
    let response = update(&state.store.posts, &id, "post", |post| {
        let liked = post.like(user_id)?;
        Ok(LikeResponse {
            liked,
            total_likes: post.like_count(),
        })
    })?;
    Ok(Json(response))
}

async fn unlike_post(
    Extension(state): Extension<AppState>,
    PathParams((id, user_id)): PathParams<(PostId, Uuid)>,
) -> ApiResult<Json<UnlikeResponse>> {
    let response = update(&state.store.posts, &id, "post", |post| {
        let unliked = post.unlike(user_id);
        Ok(UnlikeResponse {
            unliked,
            total_likes: post.like_count(),
        })
    })?;
    Ok(Json(response))
}

async fn has_liked(
    Extension(state): Extension<AppState>,
    PathParams((id, user_id)): PathParams<(PostId, Uuid)>,
) -> ApiResult<Json<LikedResponse>> {
    let post = find(&state.store.posts, &id, "post")?;
    Ok(Json(LikedResponse {
        liked: post.is_liked_by(user_id),
    }))
}

async fn list_likes(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<PostId>,
) -> ApiResult<Json<Vec<Uuid>>> {
    let post = find(&state.store.posts, &id, "post")?;
    let mut likes: Vec<Uuid> = post.likes.into_iter().collect();
    likes.sort();
    Ok(Json(likes))
}

async fn post_stats(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<PostId>,
) -> ApiResult<Json<PostStats>> {
    let post = find(&state.store.posts, &id, "post")?;
    Ok(Json(PostStats::from(&post)))
}

async fn posts_by_author(
    Extension(state): Extension<AppState>,
    PathParams(author_id): PathParams<Uuid>,
) -> Json<Vec<Post>> {
    Json(newest_first(collect(&state.store.posts, |p| {
        p.active && p.author_id == author_id
    })))
}

async fn posts_by_kind(
    Extension(state): Extension<AppState>,
    PathParams(kind): PathParams<UserKind>,
) -> Json<Vec<Post>> {
    Json(newest_first(collect(&state.store.posts, |p| {
        p.active && p.author_kind == kind
    })))
}

/// Active posts, newest first.
async fn recent_feed(
    Extension(state): Extension<AppState>,
    QueryParams(query): QueryParams<FeedQuery>,
) -> Json<Vec<Post>> {
    let mut posts = newest_first(collect(&state.store.posts, |p| p.active));
    posts.truncate(query.limit);
    Json(posts)
}

/// Most liked active posts, ties broken by recency.
async fn popular_feed(
    Extension(state): Extension<AppState>,
    QueryParams(query): QueryParams<FeedQuery>,
) -> Json<Vec<Post>> {
    let mut posts = collect(&state.store.posts, |p| p.active);
    posts.sort_by(|a, b| {
        b.like_count()
            .cmp(&a.like_count())
            .then_with(|| (b.created_at, b.id).cmp(&(a.created_at, a.id)))
    });
    posts.truncate(query.limit);
    Json(posts)
}
