use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use countdown_challenge::{create_router, AppState};

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(0, "127.0.0.1".to_string(), 5))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = create_router(test_state());
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn about_page_lists_both_games() {
    let app = create_router(test_state());
    let (status, body) = send(&app, "GET", "/about", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "About");
    assert_eq!(body["games"].as_array().unwrap().len(), 2);
    assert_eq!(body["games"][0]["name"], "Countdown Timer Game");
    assert_eq!(body["games"][1]["name"], "Reflex Test Game");
}

#[tokio::test]
async fn countdown_commands_are_phase_gated_over_http() {
    let app = create_router(test_state());

    // Configure while idle is applied.
    let (status, body) = send(
        &app,
        "POST",
        "/countdown/configure",
        Some(json!({"seconds": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "applied");
    assert_eq!(body["countdown"]["duration_seconds"], 10);
    assert_eq!(body["countdown"]["remaining_ms"], 10_000);
    assert_eq!(body["countdown"]["display"], "10:00");

    // Out-of-range values are ignored, not errors.
    let (status, body) = send(
        &app,
        "POST",
        "/countdown/configure",
        Some(json!({"seconds": 7})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ignored");
    assert_eq!(body["countdown"]["duration_seconds"], 10);

    let (_, body) = send(&app, "POST", "/countdown/start", None).await;
    assert_eq!(body["status"], "applied");
    assert_eq!(body["countdown"]["phase"], "running");

    // Configure and start are ignored while running.
    let (_, body) = send(
        &app,
        "POST",
        "/countdown/configure",
        Some(json!({"seconds": 20})),
    )
    .await;
    assert_eq!(body["status"], "ignored");
    assert_eq!(body["countdown"]["duration_seconds"], 10);
    let (_, body) = send(&app, "POST", "/countdown/start", None).await;
    assert_eq!(body["status"], "ignored");

    let (_, body) = send(&app, "POST", "/countdown/stop", None).await;
    assert_eq!(body["status"], "applied");
    assert_eq!(body["countdown"]["phase"], "stopped");
    assert!(body["countdown"]["final_ms"].is_i64());
    assert!(body["countdown"]["score"].is_string());

    // Stop without a run is ignored.
    let (_, body) = send(&app, "POST", "/countdown/stop", None).await;
    assert_eq!(body["status"], "ignored");

    let (_, body) = send(&app, "POST", "/countdown/reset", None).await;
    assert_eq!(body["countdown"]["phase"], "idle");
    assert_eq!(body["countdown"]["remaining_ms"], 10_000);
    assert!(body["countdown"]["final_ms"].is_null());
    assert!(body["countdown"]["score"].is_null());
}

#[tokio::test]
async fn navigation_is_forwarded_without_interpretation() {
    let state = test_state();
    let mut navigation_rx = state.subscribe_navigation();
    let app = create_router(Arc::clone(&state));

    let (status, body) = send(&app, "POST", "/navigate/home", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "forwarded");
    assert_eq!(body["destination"], "home");
    assert_eq!(navigation_rx.recv().await.unwrap(), "home");

    // Destinations are opaque; unknown identifiers pass through untouched.
    let (_, body) = send(&app, "POST", "/navigate/some-future-screen", None).await;
    assert_eq!(body["destination"], "some-future-screen");
    assert_eq!(navigation_rx.recv().await.unwrap(), "some-future-screen");

    let (last_action, last_action_time) = state.get_last_action();
    assert_eq!(last_action.as_deref(), Some("navigate:some-future-screen"));
    assert!(last_action_time.is_some());
}

#[tokio::test]
async fn status_reports_both_games() {
    let app = create_router(test_state());
    let (status, body) = send(&app, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["countdown"]["phase"], "idle");
    assert_eq!(body["reflex"]["phase"], "waiting");
    assert!(body["uptime"].is_string());
    assert!(body["last_action"].is_null());
}
