//! Health check, share compatibility route and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get, post_json, TEST_ORIGIN};
use serde_json::json;
use tower::ServiceExt;

// The provider is never contacted by these routes.
const UNUSED_UPSTREAM: &str = "http://127.0.0.1:1";

#[tokio::test]
async fn health_check_returns_ok_with_version() {
    let response = get(build_test_app(UNUSED_UPSTREAM), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(build_test_app(UNUSED_UPSTREAM), "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36, "x-request-id should be a UUID string");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(build_test_app(UNUSED_UPSTREAM), "/api/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn share_route_answers_with_compat_message() {
    let response = post_json(
        build_test_app(UNUSED_UPSTREAM),
        "/api/share-to-linkedin",
        json!({ "content": "hello" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("handled client-side"));
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/generate")
        .header("Origin", TEST_ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = build_test_app(UNUSED_UPSTREAM).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some(TEST_ORIGIN)
    );
}
