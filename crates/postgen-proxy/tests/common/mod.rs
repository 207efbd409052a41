//! Shared helpers for the proxy integration tests.
//!
//! The provider is replaced by a small axum app on an ephemeral port that
//! records every request it receives and answers with a canned reply.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use postgen_proxy::config::{OpenAiConfig, ServerConfig};
use postgen_proxy::llm::ChatClient;
use postgen_proxy::router::build_app_router;
use postgen_proxy::state::AppState;

pub const TEST_API_KEY: &str = "sk-test";
pub const TEST_ORIGIN: &str = "http://localhost:8080";

/// A request seen by the fake provider.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub authorization: Option<String>,
    pub body: Value,
}

pub struct FakeUpstream {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeUpstream {
    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    reply: Value,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

async fn fake_completions(
    State(state): State<FakeState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.requests.lock().unwrap().push(Recorded {
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });
    (state.status, Json(state.reply.clone()))
}

/// Start a fake chat-completion provider answering every call with `reply`.
pub async fn spawn_upstream(status: StatusCode, reply: Value) -> FakeUpstream {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/v1/chat/completions", post(fake_completions))
        .with_state(FakeState {
            status,
            reply,
            requests: Arc::clone(&requests),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeUpstream {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// Provider reply whose first choice carries `content`.
pub fn chat_reply(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

pub fn test_config(base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![TEST_ORIGIN.to_string()],
        request_timeout_secs: 30,
        openai: OpenAiConfig {
            api_key: TEST_API_KEY.to_string(),
            base_url: base_url.to_string(),
            model: "gpt-4o-mini".to_string(),
        },
    }
}

/// The production router pointed at `base_url` as the provider.
pub fn build_test_app(base_url: &str) -> Router {
    let config = test_config(base_url);
    let chat = ChatClient::new(
        &config.openai,
        std::time::Duration::from_secs(config.request_timeout_secs),
    )
    .unwrap();

    build_app_router(AppState {
        config: Arc::new(config),
        chat,
    })
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
