//! `/api/volunteers` routes.

use axum::{
    extract::Extension,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{debug, info};

use crate::common::profile::required;
use crate::common::{
    AreaOfInterest, AreaRequest, ApiResult, EventId, JsonBody, NgoId, PathParams, VolunteerId,
};
use crate::domains::volunteer::activities::{follow_ngo, unfollow_ngo};
use crate::domains::volunteer::{
    CreateVolunteerRequest, UpdateVolunteerRequest, Volunteer, VolunteerStats,
};
use crate::kernel::store::{collect, find, update};
use crate::server::app::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_volunteer).get(list_volunteers))
        .route("/by-area/:area", get(volunteers_by_area))
        .route(
            "/:id",
            get(get_volunteer)
                .put(update_volunteer)
                .delete(deactivate_volunteer),
        )
        .route("/:id/areas", post(add_area))
        .route("/:id/areas/:area", delete(remove_area))
        .route("/:id/follow/:ngo_id", post(follow).delete(unfollow))
        .route("/:id/followed-ngos", get(followed_ngos))
        .route(
            "/:id/favorites/:event_id",
            post(add_favorite).delete(remove_favorite),
        )
        .route("/:id/event-history", get(event_history))
        .route("/:id/stats", get(volunteer_stats))
}

fn by_signup(mut volunteers: Vec<Volunteer>) -> Vec<Volunteer> {
    volunteers.sort_by_key(|v| (v.profile.created_at, v.id));
    volunteers
}

async fn create_volunteer(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<CreateVolunteerRequest>,
) -> ApiResult<(StatusCode, Json<Volunteer>)> {
    let mut volunteer = Volunteer::new(&request.email, &request.password, &request.full_name)?;
    volunteer.profile.about = request.about;
    state.store.volunteers.insert(volunteer.id, volunteer.clone());

    info!(volunteer_id = %volunteer.id, "Volunteer created");
    Ok((StatusCode::CREATED, Json(volunteer)))
}

async fn list_volunteers(Extension(state): Extension<AppState>) -> Json<Vec<Volunteer>> {
    Json(by_signup(collect(&state.store.volunteers, |_| true)))
}

async fn get_volunteer(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<VolunteerId>,
) -> ApiResult<Json<Volunteer>> {
    debug!(volunteer_id = %id, "Fetching volunteer");
    Ok(Json(find(&state.store.volunteers, &id, "volunteer")?))
}

async fn update_volunteer(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<VolunteerId>,
    JsonBody(request): JsonBody<UpdateVolunteerRequest>,
) -> ApiResult<Json<Volunteer>> {
    let volunteer = update(&state.store.volunteers, &id, "volunteer", |v| {
        if let Some(name) = &request.full_name {
            v.profile.full_name = required("full_name", name)?;
        }
        if let Some(about) = request.about {
            v.profile.about = Some(about);
        }
        if let Some(photo) = request.profile_photo {
            v.profile.profile_photo = Some(photo);
        }
        if let Some(theme) = request.theme_preference {
            v.profile.theme_preference = theme;
        }
        Ok(v.clone())
    })?;

    info!(volunteer_id = %id, "Volunteer updated");
    Ok(Json(volunteer))
}

async fn deactivate_volunteer(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<VolunteerId>,
) -> ApiResult<StatusCode> {
    update(&state.store.volunteers, &id, "volunteer", |v| {
        v.profile.deactivate();
        Ok(())
    })?;

    info!(volunteer_id = %id, "Volunteer deactivated");
    Ok(StatusCode::NO_CONTENT)
}

async fn add_area(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<VolunteerId>,
    JsonBody(request): JsonBody<AreaRequest>,
) -> ApiResult<Json<Volunteer>> {
    let volunteer = update(&state.store.volunteers, &id, "volunteer", |v| {
        v.add_area(request.area);
        Ok(v.clone())
    })?;
    Ok(Json(volunteer))
}

async fn remove_area(
    Extension(state): Extension<AppState>,
    PathParams((id, area)): PathParams<(VolunteerId, AreaOfInterest)>,
) -> ApiResult<Json<Volunteer>> {
    let volunteer = update(&state.store.volunteers, &id, "volunteer", |v| {
        v.remove_area(area);
        Ok(v.clone())
    })?;
    Ok(Json(volunteer))
}

async fn follow(
    Extension(state): Extension<AppState>,
    PathParams((id, ngo_id)): PathParams<(VolunteerId, NgoId)>,
) -> ApiResult<Json<Volunteer>> {
    Ok(Json(follow_ngo(&state.store, id, ngo_id)?))
}

async fn unfollow(
    Extension(state): Extension<AppState>,
    PathParams((id, ngo_id)): PathParams<(VolunteerId, NgoId)>,
) -> ApiResult<Json<Volunteer>> {
    Ok(Json(unfollow_ngo(&state.store, id, ngo_id)?))
}

async fn followed_ngos(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<VolunteerId>,
) -> ApiResult<Json<Vec<NgoId>>> {
    let volunteer = find(&state.store.volunteers, &id, "volunteer")?;
    let mut ngos: Vec<NgoId> = volunteer.followed_ngos.into_iter().collect();
    ngos.sort();
    Ok(Json(ngos))
}

async fn add_favorite(
    Extension(state): Extension<AppState>,
    PathParams((id, event_id)): PathParams<(VolunteerId, EventId)>,
) -> ApiResult<Json<Volunteer>> {
    let volunteer = update(&state.store.volunteers, &id, "volunteer", |v| {
        v.favorite(event_id);
        Ok(v.clone())
    })?;
    Ok(Json(volunteer))
}

async fn remove_favorite(
    Extension(state): Extension<AppState>,
    PathParams((id, event_id)): PathParams<(VolunteerId, EventId)>,
) -> ApiResult<Json<Volunteer>> {
    let volunteer = update(&state.store.volunteers, &id, "volunteer", |v| {
        v.unfavorite(event_id);
        Ok(v.clone())
    })?;
    Ok(Json(volunteer))
}

async fn event_history(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<VolunteerId>,
) -> ApiResult<Json<Vec<EventId>>> {
    let volunteer = find(&state.store.volunteers, &id, "volunteer")?;
    Ok(Json(volunteer.event_history))
}

async fn volunteer_stats(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<VolunteerId>,
) -> ApiResult<Json<VolunteerStats>> {
    let volunteer = find(&state.store.volunteers, &id, "volunteer")?;
    Ok(Json(VolunteerStats::from(&volunteer)))
}

async fn volunteers_by_area(
    Extension(state): Extension<AppState>,
    PathParams(area): PathParams<AreaOfInterest>,
) -> Json<Vec<Volunteer>> {
    Json(by_signup(collect(&state.store.volunteers, |v| {
        v.profile.active && v.is_interested_in(area)
    })))
}
