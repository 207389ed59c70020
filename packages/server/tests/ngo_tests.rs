//! NGO profile, verification and areas of work over HTTP.

mod common;

use serde_json::json;
use test_context::test_context;

use crate::common::{create_event, create_ngo, create_volunteer, TestHarness};

#[test_context(TestHarness)]
#[tokio::test]
async fn blank_optional_fields_are_dropped(ctx: &TestHarness) {
    let body = ctx
        .client()
        .post(
            "/api/ngos",
            json!({
                "email": "hello@amparo.org",
                "password": "secret",
                "full_name": "Amparo",
                "cnpj": "12.345.678/0001-90",
                "phone": "   ",
            }),
        )
        .await
        .created();
    assert_eq!(body["cnpj"], "12.345.678/0001-90");
    assert!(body["phone"].is_null());
    assert_eq!(body["verified"], false);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn verified_listing_only_has_verified_ngos(ctx: &TestHarness) {
    let client = ctx.client();
    let verified = create_ngo(&client, "Amparo").await;
    create_ngo(&client, "Outra").await;

    let body = client
        .post_empty(&format!("/api/ngos/{}/verify", verified))
        .await
        .ok();
    assert_eq!(body["verified"], true);

    let listed = client.get("/api/ngos/verified").await.ok();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], json!(verified));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn areas_of_work_drive_area_listing(ctx: &TestHarness) {
    let client = ctx.client();
    let ngo = create_ngo(&client, "Amparo").await;

    client
        .post(
            &format!("/api/ngos/{}/areas", ngo),
            json!({ "area": "animals" }),
        )
        .await
        .ok();
    let listed = client.get("/api/ngos/by-area/animals").await.ok();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    client
        .delete(&format!("/api/ngos/{}/areas/animals", ngo))
        .await
        .ok();
    let listed = client.get("/api/ngos/by-area/animals").await.ok();
    assert_eq!(listed, json!([]));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn stats_count_followers_and_events(ctx: &TestHarness) {
    let client = ctx.client();
    let ngo = create_ngo(&client, "Amparo").await;
    let volunteer = create_volunteer(&client, "Ana").await;
    client
        .post_empty(&format!("/api/volunteers/{}/follow/{}", volunteer, ngo))
        .await
        .ok();
    create_event(&client, &ngo, 10).await;

    let stats = client.get(&format!("/api/ngos/{}/stats", ngo)).await.ok();
    assert_eq!(stats["followers"], 1);
    assert_eq!(stats["organized_events"], 1);

    // The follower heard about the new event.
    let unread = client
        .get(&format!("/api/notifications/users/{}/unread", volunteer))
        .await
        .ok();
    assert_eq!(unread[0]["kind"], "event_created");
}
