//! `/api/notifications` routes.

use axum::{
    extract::Extension,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::common::{
    catalog, ApiResult, CatalogEntry, DomainError, JsonBody, NotificationId, NotificationKind,
    PathParams, QueryParams,
};
use crate::domains::notification::activities::{
    self as service, notify_event_registration, notify_new_event, notify_new_follower,
    notify_rating, NotificationStats,
};
use crate::domains::notification::data::{
    EventRegistrationRequest, LimitQuery, MarkAllReadResponse, MarkReadResponse,
    NewEventRequest, NewFollowerRequest, PollResponse, PurgeResponse, RatingNotificationRequest,
    UnreadCountResponse,
};
use crate::domains::notification::Notification;
use crate::server::app::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/users/:user_id", get(for_user))
        .route("/users/:user_id/unread", get(unread))
        .route("/users/:user_id/unread-count", get(unread_count))
        .route("/users/:user_id/poll", get(poll))
        .route("/users/:user_id/read-all", post(read_all))
        .route("/rating", post(send_rating))
        .route("/new-follower", post(send_new_follower))
        .route("/new-event", post(send_new_event))
        .route("/event-registration", post(send_event_registration))
        .route("/stats", get(stats))
        .route("/kinds", get(kinds))
        .route("/purge", post(purge))
        .route("/:id", get(get_notification))
        .route("/:id/read/:user_id", post(mark_read))
        .route("/:id/users/:user_id", delete(remove))
}

async fn for_user(
    Extension(state): Extension<AppState>,
    PathParams(user_id): PathParams<Uuid>,
    QueryParams(query): QueryParams<LimitQuery>,
) -> Json<Vec<Notification>> {
    Json(service::all_for(&state.store, user_id, query.limit))
}

async fn unread(
    Extension(state): Extension<AppState>,
    PathParams(user_id): PathParams<Uuid>,
) -> Json<Vec<Notification>> {
    Json(service::unread_for(&state.store, user_id))
}

async fn unread_count(
    Extension(state): Extension<AppState>,
    PathParams(user_id): PathParams<Uuid>,
) -> Json<UnreadCountResponse> {
    Json(UnreadCountResponse {
        unread: service::unread_count(&state.store, user_id),
    })
}

async fn poll(
    Extension(state): Extension<AppState>,
    PathParams(user_id): PathParams<Uuid>,
) -> Json<PollResponse<Notification>> {
    let unread = service::unread_for(&state.store, user_id);
    let count = unread.len();
    Json(PollResponse {
        unread,
        count,
        has_new: count > 0,
    })
}

async fn read_all(
    Extension(state): Extension<AppState>,
    PathParams(user_id): PathParams<Uuid>,
) -> Json<MarkAllReadResponse> {
    let count = service::mark_all_read(&state.store, user_id);
    Json(MarkAllReadResponse {
        count,
        message: format!("{} notifications marked as read", count),
    })
}

async fn mark_read(
    Extension(state): Extension<AppState>,
    PathParams((id, user_id)): PathParams<(NotificationId, Uuid)>,
) -> ApiResult<Json<MarkReadResponse>> {
    let success = service::mark_read(&state.store, id, user_id)?;
    let message = if success {
        "Notification marked as read"
    } else {
        "Notification not found"
    };
    Ok(Json(MarkReadResponse {
        success,
        message: message.to_string(),
    }))
}

async fn remove(
    Extension(state): Extension<AppState>,
    PathParams((id, user_id)): PathParams<(NotificationId, Uuid)>,
) -> ApiResult<StatusCode> {
    if !service::remove(&state.store, id, user_id)? {
        return Err(DomainError::NotFound("notification").into());
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn get_notification(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<NotificationId>,
) -> ApiResult<Json<Notification>> {
    Ok(Json(service::get(&state.store, id)?))
}

async fn send_rating(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<RatingNotificationRequest>,
) -> ApiResult<(StatusCode, Json<Notification>)> {
    let notification = notify_rating(
        &state.store,
        request.recipient_id,
        request.recipient_kind,
        request.sender_id,
    )?;
    Ok((StatusCode::CREATED, Json(notification)))
}

async fn send_new_follower(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<NewFollowerRequest>,
) -> (StatusCode, Json<Notification>) {
    let notification = notify_new_follower(&state.store, request.ngo_id, request.volunteer_id);
    (StatusCode::CREATED, Json(notification))
}

async fn send_new_event(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<NewEventRequest>,
) -> (StatusCode, Json<Vec<Notification>>) {
    let sent = notify_new_event(
        &state.store,
        request.event_id,
        request.ngo_id,
        &request.followers,
    );
    (StatusCode::CREATED, Json(sent))
}

async fn send_event_registration(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<EventRegistrationRequest>,
) -> (StatusCode, Json<Notification>) {
    let notification = notify_event_registration(
        &state.store,
        request.volunteer_id,
        request.ngo_id,
        request.event_id,
    );
    (StatusCode::CREATED, Json(notification))
}

async fn stats(Extension(state): Extension<AppState>) -> Json<NotificationStats> {
    Json(service::stats(&state.store))
}

async fn kinds() -> Json<Vec<CatalogEntry>> {
    Json(catalog::<NotificationKind>())
}

async fn purge(Extension(state): Extension<AppState>) -> Json<PurgeResponse> {
    let removed = service::purge_read(&state.store, state.config.notification_retention());
    Json(PurgeResponse { removed })
}
