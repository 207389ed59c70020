//! `/api/events` routes.

use std::collections::HashSet;

use axum::{
    extract::Extension,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info};

use crate::common::{
    AreaOfInterest, AreaRequest, ApiResult, DomainError, EventId, EventStatus, JsonBody, NgoId,
    PathParams, VolunteerId,
};
use crate::domains::event::activities::{
    cancel_enrollment, cancel_event, confirm_attendance, create_event, enroll, update_event,
};
use crate::domains::event::{CreateEventRequest, Event, EventStats, UpdateEventRequest};
use crate::kernel::store::{collect, find, update};
use crate::server::app::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create).get(list_events))
        .route("/by-status/:status", get(events_by_status))
        .route("/by-area/:area", get(events_by_area))
        .route("/by-ngo/:ngo_id", get(events_by_ngo))
        .route("/:id", get(get_event).put(edit_event).delete(cancel))
        .route("/:id/open-registration", post(open_registration))
        .route("/:id/close-registration", post(close_registration))
        .route("/:id/start", post(start))
        .route("/:id/finish", post(finish))
        .route(
            "/:id/enrollments/:volunteer_id",
            post(enroll_volunteer).delete(unenroll_volunteer),
        )
        .route("/:id/attendance/:volunteer_id", post(mark_attendance))
        .route("/:id/areas", post(add_area))
        .route("/:id/areas/:area", post(add_area_by_path))
        .route("/:id/enrolled", get(enrolled))
        .route("/:id/attended", get(attended))
        .route("/:id/stats", get(event_stats))
}

fn by_schedule(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by_key(|e| (e.starts_at, e.id));
    events
}

fn sorted_ids(ids: HashSet<VolunteerId>) -> Vec<VolunteerId> {
    let mut ids: Vec<VolunteerId> = ids.into_iter().collect();
    ids.sort();
    ids
}

async fn create(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<CreateEventRequest>,
) -> ApiResult<(StatusCode, Json<Event>)> {
    let event = create_event(&state.store, request)?;
    Ok((StatusCode::CREATED, Json(event)))
}

async fn list_events(Extension(state): Extension<AppState>) -> Json<Vec<Event>> {
    Json(by_schedule(collect(&state.store.events, |_| true)))
}

async fn get_event(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<EventId>,
) -> ApiResult<Json<Event>> {
    debug!(event_id = %id, "Fetching event");
    Ok(Json(find(&state.store.events, &id, "event")?))
}

async fn edit_event(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<EventId>,
    JsonBody(request): JsonBody<UpdateEventRequest>,
) -> ApiResult<Json<Event>> {
    Ok(Json(update_event(&state.store, id, request)?))
}

async fn cancel(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<EventId>,
) -> ApiResult<StatusCode> {
    cancel_event(&state.store, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Applies a status transition and returns the updated event.
fn transition(
    state: &AppState,
    id: EventId,
    apply: impl FnOnce(&mut Event) -> Result<(), DomainError>,
) -> ApiResult<Json<Event>> {
    let event = update(&state.store.events, &id, "event", |event| {
        apply(event)?;
        Ok(event.clone())
    })?;

    info!(event_id = %id, status = %event.status, "Event status changed");
    Ok(Json(event))
}

async fn open_registration(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<EventId>,
) -> ApiResult<Json<Event>> {
    transition(&state, id, Event::open_registration)
}

async fn close_registration(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<EventId>,
) -> ApiResult<Json<Event>> {
    transition(&state, id, Event::close_registration)
}

async fn start(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<EventId>,
) -> ApiResult<Json<Event>> {
    transition(&state, id, Event::start)
}

async fn finish(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<EventId>,
) -> ApiResult<Json<Event>> {
    transition(&state, id, Event::finish)
}

async fn enroll_volunteer(
    Extension(state): Extension<AppState>,
    PathParams((id, volunteer_id)): PathParams<(EventId, VolunteerId)>,
) -> ApiResult<Json<Event>> {
    Ok(Json(enroll(&state.store, id, volunteer_id)?))
}

async fn unenroll_volunteer(
    Extension(state): Extension<AppState>,
    PathParams((id, volunteer_id)): PathParams<(EventId, VolunteerId)>,
) -> ApiResult<Json<Event>> {
    Ok(Json(cancel_enrollment(&state.store, id, volunteer_id)?))
}

async fn mark_attendance(
    Extension(state): Extension<AppState>,
    PathParams((id, volunteer_id)): PathParams<(EventId, VolunteerId)>,
) -> ApiResult<Json<Event>> {
    Ok(Json(confirm_attendance(&state.store, id, volunteer_id)?))
}

fn add_related_area(state: &AppState, id: EventId, area: AreaOfInterest) -> ApiResult<Json<Event>> {
    let event = update(&state.store.events, &id, "event", |event| {
        event.add_area(area);
        Ok(event.clone())
    })?;
    Ok(Json(event))
}

async fn add_area(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<EventId>,
    JsonBody(request): JsonBody<AreaRequest>,
) -> ApiResult<Json<Event>> {
    add_related_area(&state, id, request.area)
}

async fn add_area_by_path(
    Extension(state): Extension<AppState>,
    PathParams((id, area)): PathParams<(EventId, AreaOfInterest)>,
) -> ApiResult<Json<Event>> {
    add_related_area(&state, id, area)
}

async fn enrolled(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<EventId>,
) -> ApiResult<Json<Vec<VolunteerId>>> {
    let event = find(&state.store.events, &id, "event")?;
    Ok(Json(sorted_ids(event.enrolled_volunteers)))
}

async fn attended(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<EventId>,
) -> ApiResult<Json<Vec<VolunteerId>>> {
    let event = find(&state.store.events, &id, "event")?;
    Ok(Json(sorted_ids(event.attended_volunteers)))
}

async fn event_stats(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<EventId>,
) -> ApiResult<Json<EventStats>> {
    let event = find(&state.store.events, &id, "event")?;
    Ok(Json(EventStats::from(&event)))
}

async fn events_by_status(
    Extension(state): Extension<AppState>,
    PathParams(status): PathParams<EventStatus>,
) -> Json<Vec<Event>> {
    Json(by_schedule(collect(&state.store.events, |e| e.status == status)))
}

async fn events_by_area(
    Extension(state): Extension<AppState>,
    PathParams(area): PathParams<AreaOfInterest>,
) -> Json<Vec<Event>> {
    Json(by_schedule(collect(&state.store.events, |e| {
        e.related_areas.contains(&area)
    })))
}

async fn events_by_ngo(
    Extension(state): Extension<AppState>,
    PathParams(ngo_id): PathParams<NgoId>,
) -> Json<Vec<Event>> {
    Json(by_schedule(collect(&state.store.events, |e| e.ngo_id == ngo_id)))
}
