//! `/api/comments` routes.

use axum::{
    extract::Extension,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::common::{
    ApiResult, CommentId, DomainError, JsonBody, PathParams, PostId, QueryParams, UserKind,
};
use crate::domains::comment::activities::{add_comment, reactivate_comment, remove_comment};
use crate::domains::comment::data::{
    CommentStats, CommentTotals, CreateCommentRequest, RecentCommentsQuery,
};
use crate::domains::comment::Comment;
use crate::domains::post::data::EditContentRequest;
use crate::kernel::store::{collect, find, update};
use crate::server::app::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_comment))
        .route("/recent", get(recent_comments))
        .route("/stats", get(totals))
        .route("/by-post/:post_id", get(comments_by_post))
        .route("/by-author/:author_id", get(comments_by_author))
        .route("/by-kind/:kind", get(comments_by_kind))
        .route(
            "/:id",
            get(get_comment).put(edit_comment).delete(delete_comment),
        )
        .route("/:id/reactivate", post(reactivate))
        .route("/:id/stats", get(comment_stats))
}

fn oldest_first(mut comments: Vec<Comment>) -> Vec<Comment> {
    comments.sort_by_key(|c| (c.created_at, c.id));
    comments
}

fn newest_first(mut comments: Vec<Comment>) -> Vec<Comment> {
    comments.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
    comments
}

async fn create_comment(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    let comment = add_comment(&state.store, request)?;
    Ok((StatusCode::CREATED, Json(comment)))
}

async fn get_comment(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<CommentId>,
) -> ApiResult<Json<Comment>> {
    debug!(comment_id = %id, "Fetching comment");
    Ok(Json(find(&state.store.comments, &id, "comment")?))
}

async fn edit_comment(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<CommentId>,
    JsonBody(request): JsonBody<EditContentRequest>,
) -> ApiResult<Json<Comment>> {
    let comment = update(&state.store.comments, &id, "comment", |comment| {
        comment.edit(&request.content)?;
        Ok(comment.clone())
    })?;

    info!(comment_id = %id, "Comment edited");
    Ok(Json(comment))
}

async fn delete_comment(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<CommentId>,
) -> ApiResult<StatusCode> {
    remove_comment(&state.store, id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn reactivate(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<CommentId>,
) -> ApiResult<Json<Comment>> {
    Ok(Json(reactivate_comment(&state.store, id)?))
}

async fn comments_by_post(
    Extension(state): Extension<AppState>,
    PathParams(post_id): PathParams<PostId>,
) -> ApiResult<Json<Vec<Comment>>> {
    if !state.store.posts.contains_key(&post_id) {
        return Err(DomainError::NotFound("post").into());
    }
    Ok(Json(oldest_first(collect(&state.store.comments, |c| {
        c.active && c.post_id == post_id
    }))))
}

async fn comments_by_author(
    Extension(state): Extension<AppState>,
    PathParams(author_id): PathParams<Uuid>,
) -> Json<Vec<Comment>> {
    Json(newest_first(collect(&state.store.comments, |c| {
        c.active && c.author_id == author_id
    })))
}

async fn comments_by_kind(
    Extension(state): Extension<AppState>,
    PathParams(kind): PathParams<UserKind>,
) -> Json<Vec<Comment>> {
    Json(newest_first(collect(&state.store.comments, |c| {
        c.active && c.author_kind == kind
    })))
}

/// Active comments from the last 24 hours, newest first.
async fn recent_comments(
    Extension(state): Extension<AppState>,
    QueryParams(query): QueryParams<RecentCommentsQuery>,
) -> Json<Vec<Comment>> {
    let mut comments = newest_first(collect(&state.store.comments, |c| {
        c.active && c.is_recent()
    }));
    comments.truncate(query.limit);
    Json(comments)
}

async fn comment_stats(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<CommentId>,
) -> ApiResult<Json<CommentStats>> {
    let comment = find(&state.store.comments, &id, "comment")?;
    Ok(Json(CommentStats::from(&comment)))
}

async fn totals(Extension(state): Extension<AppState>) -> Json<CommentTotals> {
    let comments = &state.store.comments;
    let total = comments.len();
    let active = comments.iter().filter(|c| c.active).count();
    let recent = comments.iter().filter(|c| c.active && c.is_recent()).count();

    Json(CommentTotals {
        total,
        active,
        inactive: total.saturating_sub(active),
        recent,
    })
}
