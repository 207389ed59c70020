//! `/api/system` routes: catalogs, service info, dashboard and settings.

use std::collections::BTreeMap;

use axum::{
    extract::Extension,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::common::profile::{MAX_SCORE, MIN_SCORE};
use crate::common::{
    catalog, ApiError, ApiResult, AreaOfInterest, Catalog, CatalogEntry, EventStatus,
    NotificationKind, ThemePreference,
};
use crate::domains::{comment, event, post, rating};
use crate::kernel::StoreCounts;
use crate::server::app::AppState;

use super::health::{HealthResponse, SERVICE_NAME};

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/areas-of-interest", get(areas_of_interest))
        .route("/event-statuses", get(event_statuses))
        .route("/notification-kinds", get(notification_kinds))
        .route("/theme-preferences", get(theme_preferences))
        .route("/info", get(service_info))
        .route("/dashboard", get(dashboard))
        .route("/settings", get(settings))
        .route("/reset", post(reset))
        .route("/version", get(version))
}

#[derive(Serialize)]
pub struct InfoResponse {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub counts: StoreCounts,
    pub users: usize,
    pub areas_of_interest: usize,
    pub event_statuses: usize,
    pub notification_kinds: usize,
}

#[derive(Serialize)]
pub struct SettingsResponse {
    pub min_score: f32,
    pub max_score: f32,
    pub max_post_length: usize,
    pub max_comment_length: usize,
    pub max_event_title_length: usize,
    pub max_event_description_length: usize,
    pub max_rating_comment_length: usize,
    pub request_timeout_secs: u64,
    pub notification_retention_days: i64,
    pub allow_data_reset: bool,
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub message: &'static str,
    pub removed: StoreCounts,
}

#[derive(Serialize)]
pub struct VersionResponse {
    pub api: &'static str,
    pub service: &'static str,
    pub axum: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}

async fn areas_of_interest() -> Json<Vec<CatalogEntry>> {
    Json(catalog::<AreaOfInterest>())
}

async fn event_statuses() -> Json<Vec<CatalogEntry>> {
    Json(catalog::<EventStatus>())
}

async fn notification_kinds() -> Json<Vec<CatalogEntry>> {
    Json(catalog::<NotificationKind>())
}

async fn theme_preferences() -> Json<Vec<CatalogEntry>> {
    Json(catalog::<ThemePreference>())
}

async fn service_info() -> Json<InfoResponse> {
    let endpoints = BTreeMap::from([
        ("volunteers", "/api/volunteers"),
        ("ngos", "/api/ngos"),
        ("events", "/api/events"),
        ("posts", "/api/posts"),
        ("comments", "/api/comments"),
        ("notifications", "/api/notifications"),
        ("ratings", "/api/ratings"),
        ("system", "/api/system"),
    ]);

    Json(InfoResponse {
        name: SERVICE_NAME,
        description: "Connects NGOs and volunteers through social events",
        version: env!("CARGO_PKG_VERSION"),
        endpoints,
    })
}

async fn dashboard(Extension(state): Extension<AppState>) -> Json<DashboardResponse> {
    let counts = state.store.counts();
    Json(DashboardResponse {
        users: counts.volunteers + counts.ngos,
        counts,
        areas_of_interest: AreaOfInterest::ALL.len(),
        event_statuses: EventStatus::ALL.len(),
        notification_kinds: NotificationKind::ALL.len(),
    })
}

async fn settings(Extension(state): Extension<AppState>) -> Json<SettingsResponse> {
    let config = &state.config;
    Json(SettingsResponse {
        min_score: MIN_SCORE,
        max_score: MAX_SCORE,
        max_post_length: post::models::post::MAX_CONTENT_LEN,
        max_comment_length: comment::models::comment::MAX_CONTENT_LEN,
        max_event_title_length: event::models::event::MAX_TITLE_LEN,
        max_event_description_length: event::models::event::MAX_DESCRIPTION_LEN,
        max_rating_comment_length: rating::models::rating::MAX_COMMENT_LEN,
        request_timeout_secs: config.request_timeout_secs,
        notification_retention_days: config.notification_retention_days,
        allow_data_reset: config.allow_data_reset,
    })
}

/// Wipes every resource. Disabled unless `ALLOW_DATA_RESET` is set.
async fn reset(Extension(state): Extension<AppState>) -> ApiResult<Json<ResetResponse>> {
    if !state.config.allow_data_reset {
        warn!("Rejected data reset: disabled by configuration");
        return Err(ApiError::bad_request("data reset is disabled"));
    }

    let removed = state.store.counts();
    state.store.clear();

    info!(?removed, "Store cleared");
    Ok(Json(ResetResponse {
        message: "All data cleared",
        removed,
    }))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        api: env!("CARGO_PKG_VERSION"),
        service: SERVICE_NAME,
        axum: "0.7",
    })
}
