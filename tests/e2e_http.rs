// tests/e2e_http.rs
use axum::http::StatusCode;
use serde_json::{Value, json};

mod support;

use support::{assert_error_body, make_test_router, send};

const ALICE: (&str, &str) = ("x-user-id", "alice");
const BOB: (&str, &str) = ("x-user-id", "bob");

async fn create(app: &axum::Router, title: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/articles",
        &[ALICE],
        Some(json!({ "title": title, "content": "Body text", "excerpt": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body
}

fn id_of(article: &Value) -> String {
    article["id"].as_str().expect("id").to_string()
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let (app, _) = make_test_router(None);

    let (status, body) = send(&app, "GET", "/health", &[], None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", &[], None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/v1/articles/{id}/publish"].is_object());
}

#[tokio::test]
async fn create_requires_caller_identity() {
    let (app, _) = make_test_router(None);

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/articles",
        &[],
        Some(json!({ "title": "T", "content": "C" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error_body(&body, "Unauthorized");
}

#[tokio::test]
async fn create_reports_field_of_invalid_input() {
    let (app, _) = make_test_router(None);

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/articles",
        &[ALICE],
        Some(json!({ "title": "A".repeat(201), "content": "C" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, "Bad Request");
    assert_eq!(body["field"], "title");
}

#[tokio::test]
async fn publish_flow_over_http() {
    let (app, _) = make_test_router(None);
    let created = create(&app, "First Post").await;
    let id = id_of(&created);
    assert_eq!(created["state"], "DRAFT");
    assert!(created["excerpt"].is_null());
    assert_eq!(created["available_events"], json!(["SAVE_DRAFT", "SCHEDULE", "PUBLISH"]));

    let publish_uri = format!("/api/v1/articles/{id}/publish");

    let (status, body) = send(&app, "POST", &publish_uri, &[BOB], None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error_body(&body, "Forbidden");

    let (status, body) = send(&app, "POST", &publish_uri, &[ALICE], None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "PUBLISHED");
    assert_eq!(body["published_at"], "2024-01-01T00:00:00.000Z");

    let (status, body) = send(&app, "POST", &publish_uri, &[ALICE], None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("cannot transition from PUBLISHED with event PUBLISH")
    );

    let (status, fetched) = send(&app, "GET", &format!("/api/v1/articles/{id}"), &[], None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["author"]["id"], "alice");

    let slug = created["slug"].as_str().unwrap();
    let (status, by_slug) =
        send(&app, "GET", &format!("/api/v1/articles/slug/{slug}"), &[], None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_slug["id"], id.as_str());

    let (status, list) = send(&app, "GET", "/api/v1/articles?limit=500", &[], None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["total"], 1);
    assert_eq!(list["limit"], 100);
    assert_eq!(list["has_next"], false);

    let history_uri = format!("/api/v1/articles/{id}/history");
    let (status, history) = send(&app, "GET", &history_uri, &[ALICE], None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["from_state"], "DRAFT");
    assert_eq!(history[0]["to_state"], "PUBLISHED");
    assert_eq!(history[0]["triggered_by"], "alice");

    let (status, _) = send(&app, "GET", &history_uri, &[BOB], None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_and_malformed_ids() {
    let (app, _) = make_test_router(None);

    let (status, body) = send(
        &app,
        "GET",
        "/api/v1/articles/6f1c1a0e-8f0e-4c1b-9b6a-3f9a1b2c3d4e",
        &[],
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, "Not Found");

    let (status, body) = send(&app, "GET", "/api/v1/articles/42", &[], None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, "Not Found");

    let (status, _) = send(&app, "POST", "/api/v1/articles/42/publish", &[ALICE], None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/v1/articles/42/history", &[ALICE], None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn schedule_validates_timestamp() {
    let (app, _) = make_test_router(None);
    let id = id_of(&create(&app, "Later").await);
    let uri = format!("/api/v1/articles/{id}/schedule");

    for bad in ["2023-12-31T00:00:00Z", "tomorrow"] {
        let (status, body) =
            send(&app, "POST", &uri, &[ALICE], Some(json!({ "scheduled_at": bad }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{bad}");
        assert_eq!(body["field"], "scheduled_at");
    }

    let (status, body) = send(
        &app,
        "POST",
        &uri,
        &[ALICE],
        Some(json!({ "scheduledAt": "2030-01-01T09:00:00+09:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "SCHEDULED");
    assert_eq!(body["scheduled_at"], "2030-01-01T00:00:00.000Z");
    assert_eq!(body["available_events"], json!(["SAVE_DRAFT", "SCHEDULE", "PUBLISH"]));
}

#[tokio::test]
async fn my_articles_filters_by_state() {
    let (app, _) = make_test_router(None);
    let first = id_of(&create(&app, "One").await);
    create(&app, "Two").await;
    send(&app, "POST", &format!("/api/v1/articles/{first}/publish"), &[ALICE], None).await;

    let (status, all) = send(&app, "GET", "/api/v1/me/articles", &[ALICE], None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, drafts) = send(&app, "GET", "/api/v1/me/articles?state=draft", &[ALICE], None).await;
    assert_eq!(drafts.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "GET", "/api/v1/me/articles?state=LIVE", &[ALICE], None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, none) = send(&app, "GET", "/api/v1/me/articles", &[BOB], None).await;
    assert!(none.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn cron_endpoint_checks_shared_secret() {
    let (app, _) = make_test_router(Some("s3cret"));

    let (status, body) = send(&app, "POST", "/api/v1/cron/auto-publish", &[], None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_error_body(&body, "Unauthorized");

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/cron/auto-publish",
        &[("x-cron-key", "wrong")],
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/cron/auto-publish",
        &[("x-cron-key", "s3cret")],
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "published": 0 }));
}

#[tokio::test]
async fn cron_endpoint_is_open_without_configured_key() {
    let (app, _) = make_test_router(None);
    let (status, body) = send(&app, "POST", "/api/v1/cron/auto-publish", &[], None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["published"], 0);
}
