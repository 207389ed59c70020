//! `/api/ngos` routes.

use axum::{
    extract::Extension,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{debug, info};

use crate::common::{
    AreaOfInterest, AreaRequest, ApiResult, EventId, JsonBody, NgoId, PathParams, VolunteerId,
};
use crate::domains::ngo::{CreateNgoRequest, Ngo, NgoStats, UpdateNgoRequest};
use crate::kernel::store::{collect, find, update};
use crate::server::app::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_ngo).get(list_ngos))
        .route("/verified", get(verified_ngos))
        .route("/by-area/:area", get(ngos_by_area))
        .route("/:id", get(get_ngo).put(update_ngo).delete(deactivate_ngo))
        .route("/:id/areas", post(add_area))
        .route("/:id/areas/:area", delete(remove_area))
        .route("/:id/verify", post(verify_ngo))
        .route("/:id/followers", get(followers))
        .route("/:id/organized-events", get(organized_events))
        .route("/:id/stats", get(ngo_stats))
}

fn by_signup(mut ngos: Vec<Ngo>) -> Vec<Ngo> {
    ngos.sort_by_key(|n| (n.profile.created_at, n.id));
    ngos
}

/// Optional text fields are stored only when they carry something.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

async fn create_ngo(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<CreateNgoRequest>,
) -> ApiResult<(StatusCode, Json<Ngo>)> {
    let mut ngo = Ngo::new(&request.email, &request.password, &request.full_name)?;
    ngo.cnpj = non_blank(request.cnpj);
    ngo.address = non_blank(request.address);
    ngo.phone = non_blank(request.phone);
    ngo.profile.about = non_blank(request.about);
    state.store.ngos.insert(ngo.id, ngo.clone());

    info!(ngo_id = %ngo.id, "NGO created");
    Ok((StatusCode::CREATED, Json(ngo)))
}

async fn list_ngos(Extension(state): Extension<AppState>) -> Json<Vec<Ngo>> {
    Json(by_signup(collect(&state.store.ngos, |_| true)))
}

async fn get_ngo(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<NgoId>,
) -> ApiResult<Json<Ngo>> {
    debug!(ngo_id = %id, "Fetching NGO");
    Ok(Json(find(&state.store.ngos, &id, "ngo")?))
}

async fn update_ngo(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<NgoId>,
    JsonBody(request): JsonBody<UpdateNgoRequest>,
) -> ApiResult<Json<Ngo>> {
    let ngo = update(&state.store.ngos, &id, "ngo", |ngo| {
        if let Some(address) = request.address {
            ngo.address = Some(address);
        }
        if let Some(phone) = request.phone {
            ngo.phone = Some(phone);
        }
        if let Some(about) = request.about {
            ngo.profile.about = Some(about);
        }
        if let Some(photo) = request.profile_photo {
            ngo.profile.profile_photo = Some(photo);
        }
        if let Some(theme) = request.theme_preference {
            ngo.profile.theme_preference = theme;
        }
        Ok(ngo.clone())
    })?;

    info!(ngo_id = %id, "NGO updated");
    Ok(Json(ngo))
}

async fn deactivate_ngo(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<NgoId>,
) -> ApiResult<StatusCode> {
    update(&state.store.ngos, &id, "ngo", |ngo| {
        ngo.profile.deactivate();
        Ok(())
    })?;

    info!(ngo_id = %id, "NGO deactivated");
    Ok(StatusCode::NO_CONTENT)
}

async fn add_area(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<NgoId>,
    JsonBody(request): JsonBody<AreaRequest>,
) -> ApiResult<Json<Ngo>> {
    let ngo = update(&state.store.ngos, &id, "ngo", |ngo| {
        ngo.add_area(request.area);
        Ok(ngo.clone())
    })?;
    Ok(Json(ngo))
}

async fn remove_area(
    Extension(state): Extension<AppState>,
    PathParams((id, area)): PathParams<(NgoId, AreaOfInterest)>,
) -> ApiResult<Json<Ngo>> {
    let ngo = update(&state.store.ngos, &id, "ngo", |ngo| {
        ngo.remove_area(area);
        Ok(ngo.clone())
    })?;
    Ok(Json(ngo))
}

async fn verify_ngo(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<NgoId>,
) -> ApiResult<Json<Ngo>> {
    let ngo = update(&state.store.ngos, &id, "ngo", |ngo| {
        ngo.verify();
        Ok(ngo.clone())
    })?;

    info!(ngo_id = %id, "NGO verified");
    Ok(Json(ngo))
}

async fn followers(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<NgoId>,
) -> ApiResult<Json<Vec<VolunteerId>>> {
    let ngo = find(&state.store.ngos, &id, "ngo")?;
    let mut followers: Vec<VolunteerId> = ngo.followers.into_iter().collect();
    followers.sort();
    Ok(Json(followers))
}

async fn organized_events(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<NgoId>,
) -> ApiResult<Json<Vec<EventId>>> {
    let ngo = find(&state.store.ngos, &id, "ngo")?;
    Ok(Json(ngo.organized_events))
}

async fn ngo_stats(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<NgoId>,
) -> ApiResult<Json<NgoStats>> {
    let ngo = find(&state.store.ngos, &id, "ngo")?;
    Ok(Json(NgoStats::from(&ngo)))
}

async fn verified_ngos(Extension(state): Extension<AppState>) -> Json<Vec<Ngo>> {
    Json(by_signup(collect(&state.store.ngos, |n| {
        n.profile.active && n.verified
    })))
}

async fn ngos_by_area(
    Extension(state): Extension<AppState>,
    PathParams(area): PathParams<AreaOfInterest>,
) -> Json<Vec<Ngo>> {
    Json(by_signup(collect(&state.store.ngos, |n| {
        n.profile.active && n.works_in_area(area)
    })))
}
