//! `ProxyError` → HTTP response mapping, without a server.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use postgen_proxy::error::ProxyError;
use postgen_proxy::llm::LlmError;

async fn error_to_response(err: ProxyError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn bad_request_keeps_its_message() {
    let (status, json) = error_to_response(ProxyError::BadRequest("Prompt is required".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Prompt is required");
}

#[tokio::test]
async fn upstream_error_is_sanitized() {
    let err = ProxyError::Upstream {
        public: "Failed to generate post",
        source: LlmError::Api {
            status: 401,
            body: "Incorrect API key provided: sk-secret".into(),
        },
    };

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to generate post");
    assert!(!json.to_string().contains("sk-secret"));
}

#[tokio::test]
async fn malformed_output_is_sanitized() {
    let source = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
    let err = ProxyError::MalformedOutput {
        public: "Failed to generate ideas",
        source,
    };

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "Failed to generate ideas" }));
}
