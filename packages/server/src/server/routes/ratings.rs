//! `/api/ratings` routes.

use axum::{
    extract::Extension,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::debug;
use uuid::Uuid;

use crate::common::{ApiResult, EventId, JsonBody, PathParams, QueryParams, RatingId};
use crate::domains::rating::activities::{self as service, RatingStats, UserRatingStats};
use crate::domains::rating::data::{
    AverageResponse, BetweenQuery, KindQuery, RateRequest, RemovedResponse, ScoreQuery,
    UpdateRatingRequest,
};
use crate::domains::rating::Rating;
use crate::server::app::AppState;

pub fn router() -> Router {
    Router::new()
        .route("/volunteer-rates-ngo", post(volunteer_rates_ngo))
        .route("/ngo-rates-volunteer", post(ngo_rates_volunteer))
        .route("/received/:user_id", get(received))
        .route("/given/:user_id", get(given))
        .route("/average/:user_id", get(average))
        .route("/by-event/:event_id", get(by_event))
        .route("/between", get(between))
        .route("/by-score", get(by_score))
        .route("/stats", get(stats))
        .route("/stats/users/:user_id", get(user_stats))
        .route("/:id", get(get_rating).put(update_rating))
        .route("/:id/users/:user_id", delete(remove_rating))
}

async fn volunteer_rates_ngo(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<RateRequest>,
) -> ApiResult<(StatusCode, Json<Rating>)> {
    let rating = service::volunteer_rates_ngo(
        &state.store,
        request.volunteer_id,
        request.ngo_id,
        request.event_id,
        request.score,
        request.comment,
    )?;
    Ok((StatusCode::CREATED, Json(rating)))
}

async fn ngo_rates_volunteer(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<RateRequest>,
) -> ApiResult<(StatusCode, Json<Rating>)> {
    let rating = service::ngo_rates_volunteer(
        &state.store,
        request.ngo_id,
        request.volunteer_id,
        request.event_id,
        request.score,
        request.comment,
    )?;
    Ok((StatusCode::CREATED, Json(rating)))
}

async fn get_rating(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<RatingId>,
) -> ApiResult<Json<Rating>> {
    debug!(rating_id = %id, "Fetching rating");
    Ok(Json(service::get(&state.store, id)?))
}

async fn update_rating(
    Extension(state): Extension<AppState>,
    PathParams(id): PathParams<RatingId>,
    JsonBody(request): JsonBody<UpdateRatingRequest>,
) -> ApiResult<Json<Rating>> {
    let rating = service::update(&state.store, id, request.score, request.comment)?;
    Ok(Json(rating))
}

async fn remove_rating(
    Extension(state): Extension<AppState>,
    PathParams((id, user_id)): PathParams<(RatingId, Uuid)>,
) -> ApiResult<Json<RemovedResponse>> {
    let rating = service::remove(&state.store, id, user_id)?;
    Ok(Json(RemovedResponse {
        message: "Rating removed".to_string(),
        rating_id: rating.id,
    }))
}

async fn received(
    Extension(state): Extension<AppState>,
    PathParams(user_id): PathParams<Uuid>,
    QueryParams(query): QueryParams<KindQuery>,
) -> Json<Vec<Rating>> {
    Json(service::received(&state.store, user_id, query.kind))
}

async fn given(
    Extension(state): Extension<AppState>,
    PathParams(user_id): PathParams<Uuid>,
    QueryParams(query): QueryParams<KindQuery>,
) -> Json<Vec<Rating>> {
    Json(service::given(&state.store, user_id, query.kind))
}

async fn average(
    Extension(state): Extension<AppState>,
    PathParams(user_id): PathParams<Uuid>,
    QueryParams(query): QueryParams<KindQuery>,
) -> Json<AverageResponse> {
    let average = service::average(&state.store, user_id, query.kind);
    Json(AverageResponse::new(user_id, query.kind, average))
}

async fn by_event(
    Extension(state): Extension<AppState>,
    PathParams(event_id): PathParams<EventId>,
) -> Json<Vec<Rating>> {
    Json(service::by_event(&state.store, event_id))
}

async fn between(
    Extension(state): Extension<AppState>,
    QueryParams(query): QueryParams<BetweenQuery>,
) -> Json<Vec<Rating>> {
    Json(service::between(&state.store, query.user1_id, query.user2_id))
}

async fn by_score(
    Extension(state): Extension<AppState>,
    QueryParams(query): QueryParams<ScoreQuery>,
) -> ApiResult<Json<Vec<Rating>>> {
    Ok(Json(service::by_score(&state.store, query.min, query.max)?))
}

async fn stats(Extension(state): Extension<AppState>) -> Json<RatingStats> {
    Json(service::stats(&state.store))
}

async fn user_stats(
    Extension(state): Extension<AppState>,
    PathParams(user_id): PathParams<Uuid>,
    QueryParams(query): QueryParams<KindQuery>,
) -> Json<UserRatingStats> {
    Json(service::user_stats(&state.store, user_id, query.kind))
}
