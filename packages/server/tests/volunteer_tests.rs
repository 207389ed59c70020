//! Volunteer profile, areas, follows and favorites over HTTP.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use test_context::test_context;
use uuid::Uuid;

use crate::common::{create_ngo, create_volunteer, TestHarness};

#[test_context(TestHarness)]
#[tokio::test]
async fn create_and_fetch_volunteer(ctx: &TestHarness) {
    let client = ctx.client();
    let id = create_volunteer(&client, "Ana").await;

    let volunteer = client.get(&format!("/api/volunteers/{}", id)).await.ok();
    assert_eq!(volunteer["full_name"], "Ana");
    assert_eq!(volunteer["active"], true);
    assert_eq!(volunteer["rating"], 0.0);
    assert!(volunteer.get("password").is_none());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn create_rejects_blank_name(ctx: &TestHarness) {
    let error = ctx
        .client()
        .post(
            "/api/volunteers",
            json!({ "email": "a@b.org", "password": "pw", "full_name": "  " }),
        )
        .await
        .bad_request();
    assert!(error.contains("full_name"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn malformed_body_is_a_bad_request(ctx: &TestHarness) {
    let response = ctx
        .client()
        .post_raw("/api/volunteers", "{\"email\": ")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].is_string());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_volunteer_is_not_found(ctx: &TestHarness) {
    let response = ctx
        .client()
        .get(&format!("/api/volunteers/{}", Uuid::now_v7()))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "volunteer not found");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn invalid_id_is_a_bad_request(ctx: &TestHarness) {
    let response = ctx.client().get("/api/volunteers/not-a-uuid").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn update_changes_only_given_fields(ctx: &TestHarness) {
    let client = ctx.client();
    let id = create_volunteer(&client, "Ana").await;

    let updated = client
        .put(
            &format!("/api/volunteers/{}", id),
            json!({ "about": "Weekend helper", "theme_preference": "dark" }),
        )
        .await
        .ok();
    assert_eq!(updated["full_name"], "Ana");
    assert_eq!(updated["about"], "Weekend helper");
    assert_eq!(updated["theme_preference"], "dark");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn deactivated_volunteers_leave_area_listing(ctx: &TestHarness) {
    let client = ctx.client();
    let ana = create_volunteer(&client, "Ana").await;
    let bia = create_volunteer(&client, "Bia").await;

    for id in [&ana, &bia] {
        client
            .post(
                &format!("/api/volunteers/{}/areas", id),
                json!({ "area": "environment" }),
            )
            .await
            .ok();
    }
    client
        .delete(&format!("/api/volunteers/{}", bia))
        .await
        .expect_status(StatusCode::NO_CONTENT);

    let listed = client
        .get("/api/volunteers/by-area/environment")
        .await
        .ok();
    let ids: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![ana.as_str()]);

    // The full listing still includes inactive accounts.
    let all = client.get("/api/volunteers").await.ok();
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_area_is_rejected(ctx: &TestHarness) {
    let response = ctx.client().get("/api/volunteers/by-area/astronomy").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn follow_updates_both_sides_and_notifies_ngo(ctx: &TestHarness) {
    let client = ctx.client();
    let volunteer = create_volunteer(&client, "Ana").await;
    let ngo = create_ngo(&client, "Amparo").await;

    client
        .post_empty(&format!("/api/volunteers/{}/follow/{}", volunteer, ngo))
        .await
        .ok();
    // Following twice is idempotent.
    client
        .post_empty(&format!("/api/volunteers/{}/follow/{}", volunteer, ngo))
        .await
        .ok();

    let followed = client
        .get(&format!("/api/volunteers/{}/followed-ngos", volunteer))
        .await
        .ok();
    assert_eq!(followed, json!([ngo]));

    let followers = client
        .get(&format!("/api/ngos/{}/followers", ngo))
        .await
        .ok();
    assert_eq!(followers, json!([volunteer]));

    let notifications = client
        .get(&format!("/api/notifications/users/{}", ngo))
        .await
        .ok();
    let notifications = notifications.as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["kind"], "new_follower");

    client
        .delete(&format!("/api/volunteers/{}/follow/{}", volunteer, ngo))
        .await
        .ok();
    let followers = client
        .get(&format!("/api/ngos/{}/followers", ngo))
        .await
        .ok();
    assert_eq!(followers, json!([]));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn favorites_are_counted_in_stats(ctx: &TestHarness) {
    let client = ctx.client();
    let volunteer = create_volunteer(&client, "Ana").await;
    let event = Uuid::now_v7();

    client
        .post_empty(&format!("/api/volunteers/{}/favorites/{}", volunteer, event))
        .await
        .ok();
    let stats = client
        .get(&format!("/api/volunteers/{}/stats", volunteer))
        .await
        .ok();
    assert_eq!(stats["favorite_events"], 1);
    assert_eq!(stats["events_attended"], 0);

    client
        .delete(&format!("/api/volunteers/{}/favorites/{}", volunteer, event))
        .await
        .ok();
    let stats = client
        .get(&format!("/api/volunteers/{}/stats", volunteer))
        .await
        .ok();
    assert_eq!(stats["favorite_events"], 0);
}
