//! Test fixtures for creating test data.
//!
//! These fixtures go through the HTTP API so side effects (notifications,
//! NGO bookkeeping) happen exactly as they do for real clients.

use serde_json::{json, Value};

use super::ApiClient;

pub const STARTS_AT: &str = "2030-05-10T09:00:00";
pub const ENDS_AT: &str = "2030-05-10T17:00:00";

/// The `id` field of a created entity.
pub fn id_of(body: &Value) -> String {
    body["id"]
        .as_str()
        .expect("entity has an id")
        .to_string()
}

pub async fn create_volunteer(client: &ApiClient, name: &str) -> String {
    let body = client
        .post(
            "/api/volunteers",
            json!({
                "email": format!("{}@volunteers.test", name.to_lowercase()),
                "password": "secret",
                "full_name": name,
            }),
        )
        .await
        .created();
    id_of(&body)
}

pub async fn create_ngo(client: &ApiClient, name: &str) -> String {
    let body = client
        .post(
            "/api/ngos",
            json!({
                "email": format!("contact@{}.test", name.to_lowercase()),
                "password": "secret",
                "full_name": name,
            }),
        )
        .await
        .created();
    id_of(&body)
}

/// A planned event organized by `ngo_id`.
pub async fn create_event(client: &ApiClient, ngo_id: &str, capacity: u32) -> String {
    let body = client
        .post(
            "/api/events",
            json!({
                "title": "Beach clean-up",
                "description": "Collecting plastic along the shore",
                "starts_at": STARTS_AT,
                "ends_at": ENDS_AT,
                "ngo_id": ngo_id,
                "capacity": capacity,
            }),
        )
        .await
        .created();
    id_of(&body)
}

/// An event already open for registration.
pub async fn create_open_event(client: &ApiClient, ngo_id: &str, capacity: u32) -> String {
    let event_id = create_event(client, ngo_id, capacity).await;
    client
        .post_empty(&format!("/api/events/{}/open-registration", event_id))
        .await
        .ok();
    event_id
}

/// A volunteer, an NGO, and an event the volunteer attended.
pub struct Attendance {
    pub volunteer_id: String,
    pub ngo_id: String,
    pub event_id: String,
}

pub async fn attended_event(client: &ApiClient) -> Attendance {
    let volunteer_id = create_volunteer(client, "Ana").await;
    let ngo_id = create_ngo(client, "Greenpeace").await;
    let event_id = create_open_event(client, &ngo_id, 10).await;

    client
        .post_empty(&format!(
            "/api/events/{}/enrollments/{}",
            event_id, volunteer_id
        ))
        .await
        .ok();
    client
        .post_empty(&format!(
            "/api/events/{}/attendance/{}",
            event_id, volunteer_id
        ))
        .await
        .ok();

    Attendance {
        volunteer_id,
        ngo_id,
        event_id,
    }
}

pub async fn create_post(client: &ApiClient, author_id: &str, author_kind: &str) -> String {
    let body = client
        .post(
            "/api/posts",
            json!({
                "author_id": author_id,
                "author_kind": author_kind,
                "content": "We need hands this weekend!",
            }),
        )
        .await
        .created();
    id_of(&body)
}
