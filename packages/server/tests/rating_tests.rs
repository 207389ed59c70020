//! Rating rules and aggregates over HTTP.

mod common;

use serde_json::{json, Value};
use test_context::test_context;
use uuid::Uuid;

use crate::common::{
    attended_event, create_ngo, create_open_event, create_volunteer, id_of, ApiClient,
    Attendance, TestHarness,
};

fn rate_body(attendance: &Attendance, score: f32) -> Value {
    json!({
        "volunteer_id": attendance.volunteer_id,
        "ngo_id": attendance.ngo_id,
        "event_id": attendance.event_id,
        "score": score,
        "comment": "Well organized",
    })
}

async fn rate_ngo(client: &ApiClient, attendance: &Attendance, score: f32) -> Value {
    client
        .post("/api/ratings/volunteer-rates-ngo", rate_body(attendance, score))
        .await
        .created()
}

#[test_context(TestHarness)]
#[tokio::test]
async fn score_outside_range_is_rejected(ctx: &TestHarness) {
    let client = ctx.client();
    let attendance = attended_event(&client).await;

    for score in [0.5, 5.5] {
        let error = client
            .post("/api/ratings/volunteer-rates-ngo", rate_body(&attendance, score))
            .await
            .bad_request();
        assert_eq!(error, "score must be between 1.0 and 5.0");
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn volunteer_must_have_attended(ctx: &TestHarness) {
    let client = ctx.client();
    let volunteer = create_volunteer(&client, "Ana").await;
    let ngo = create_ngo(&client, "Amparo").await;
    let event = create_open_event(&client, &ngo, 5).await;
    client
        .post_empty(&format!("/api/events/{}/enrollments/{}", event, volunteer))
        .await
        .ok();

    let error = client
        .post(
            "/api/ratings/volunteer-rates-ngo",
            json!({
                "volunteer_id": volunteer,
                "ngo_id": ngo,
                "event_id": event,
                "score": 4.0,
            }),
        )
        .await
        .bad_request();
    assert_eq!(error, "volunteer did not attend this event");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_event_is_a_bad_request(ctx: &TestHarness) {
    let client = ctx.client();
    let attendance = attended_event(&client).await;

    let mut body = rate_body(&attendance, 4.0);
    body["event_id"] = json!(Uuid::now_v7());
    let error = client
        .post("/api/ratings/volunteer-rates-ngo", body)
        .await
        .bad_request();
    assert!(error.contains("does not exist"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn ngo_must_be_the_organizer(ctx: &TestHarness) {
    let client = ctx.client();
    let attendance = attended_event(&client).await;
    let other = create_ngo(&client, "Outra").await;

    let mut body = rate_body(&attendance, 4.0);
    body["ngo_id"] = json!(other);
    let error = client
        .post("/api/ratings/volunteer-rates-ngo", body)
        .await
        .bad_request();
    assert_eq!(error, "NGO did not organize this event");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn duplicate_rating_is_rejected(ctx: &TestHarness) {
    let client = ctx.client();
    let attendance = attended_event(&client).await;

    rate_ngo(&client, &attendance, 4.0).await;
    let error = client
        .post("/api/ratings/volunteer-rates-ngo", rate_body(&attendance, 3.0))
        .await
        .bad_request();
    assert_eq!(error, "this user was already rated for this event");

    // The other direction is a separate rating.
    client
        .post("/api/ratings/ngo-rates-volunteer", rate_body(&attendance, 5.0))
        .await
        .created();
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rating_updates_profile_average_and_notifies(ctx: &TestHarness) {
    let client = ctx.client();
    let attendance = attended_event(&client).await;

    let rating = rate_ngo(&client, &attendance, 4.0).await;
    assert_eq!(rating["rater_kind"], "volunteer");
    assert_eq!(rating["ratee_kind"], "ngo");

    let ngo = client
        .get(&format!("/api/ngos/{}", attendance.ngo_id))
        .await
        .ok();
    assert_eq!(ngo["rating"], 4.0);

    let average = client
        .get(&format!(
            "/api/ratings/average/{}?kind=ngo",
            attendance.ngo_id
        ))
        .await
        .ok();
    assert_eq!(average["formatted"], "4.0");

    let unread = client
        .get(&format!(
            "/api/notifications/users/{}/unread",
            attendance.ngo_id
        ))
        .await
        .ok();
    let kinds: Vec<&str> = unread
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"new_rating"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn update_and_remove_refresh_average(ctx: &TestHarness) {
    let client = ctx.client();
    let attendance = attended_event(&client).await;
    let rating = id_of(&rate_ngo(&client, &attendance, 4.0).await);

    let updated = client
        .put(
            &format!("/api/ratings/{}", rating),
            json!({ "score": 2.0 }),
        )
        .await
        .ok();
    assert_eq!(updated["score"], 2.0);
    assert!(updated["comment"].is_null());

    client
        .put(
            &format!("/api/ratings/{}", rating),
            json!({ "score": 9.0 }),
        )
        .await
        .bad_request();

    // Only the rater may remove it.
    client
        .delete(&format!(
            "/api/ratings/{}/users/{}",
            rating, attendance.ngo_id
        ))
        .await
        .bad_request();

    let removed = client
        .delete(&format!(
            "/api/ratings/{}/users/{}",
            rating, attendance.volunteer_id
        ))
        .await
        .ok();
    assert_eq!(removed["rating_id"], json!(rating));

    let average = client
        .get(&format!(
            "/api/ratings/average/{}?kind=ngo",
            attendance.ngo_id
        ))
        .await
        .ok();
    assert_eq!(average["formatted"], "no ratings yet");

    let ngo = client
        .get(&format!("/api/ngos/{}", attendance.ngo_id))
        .await
        .ok();
    assert_eq!(ngo["rating"], 0.0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn queries_filter_by_kind_event_and_score(ctx: &TestHarness) {
    let client = ctx.client();
    let attendance = attended_event(&client).await;
    rate_ngo(&client, &attendance, 4.0).await;
    client
        .post("/api/ratings/ngo-rates-volunteer", rate_body(&attendance, 2.0))
        .await
        .created();

    let received = client
        .get(&format!(
            "/api/ratings/received/{}?kind=ngo",
            attendance.ngo_id
        ))
        .await
        .ok();
    assert_eq!(received.as_array().unwrap().len(), 1);

    // Received as a volunteer: nothing, the NGO id never was one.
    let wrong_kind = client
        .get(&format!(
            "/api/ratings/received/{}?kind=volunteer",
            attendance.ngo_id
        ))
        .await
        .ok();
    assert_eq!(wrong_kind, json!([]));

    let given = client
        .get(&format!(
            "/api/ratings/given/{}?kind=ngo",
            attendance.ngo_id
        ))
        .await
        .ok();
    assert_eq!(given.as_array().unwrap().len(), 1);

    let by_event = client
        .get(&format!("/api/ratings/by-event/{}", attendance.event_id))
        .await
        .ok();
    assert_eq!(by_event.as_array().unwrap().len(), 2);

    let between = client
        .get(&format!(
            "/api/ratings/between?user1_id={}&user2_id={}",
            attendance.volunteer_id, attendance.ngo_id
        ))
        .await
        .ok();
    assert_eq!(between.as_array().unwrap().len(), 2);

    let high = client.get("/api/ratings/by-score?min=3").await.ok();
    assert_eq!(high.as_array().unwrap().len(), 1);
    client
        .get("/api/ratings/by-score?min=4&max=2")
        .await
        .bad_request();

    let stats = client.get("/api/ratings/stats").await.ok();
    assert_eq!(stats["active"], 2);
    assert_eq!(stats["average_score"], 3.0);
    assert_eq!(stats["volunteer_to_ngo"], 1);
    assert_eq!(stats["ngo_to_volunteer"], 1);

    let user_stats = client
        .get(&format!(
            "/api/ratings/stats/users/{}?kind=volunteer",
            attendance.volunteer_id
        ))
        .await
        .ok();
    assert_eq!(user_stats["received"], 1);
    assert_eq!(user_stats["given"], 1);
    assert_eq!(user_stats["average"], 2.0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn kind_query_is_required(ctx: &TestHarness) {
    ctx.client()
        .get(&format!("/api/ratings/received/{}", Uuid::now_v7()))
        .await
        .bad_request();
}
