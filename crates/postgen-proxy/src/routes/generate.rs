use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::{ProxyError, ProxyResult};
use crate::prompts::post_request;
use crate::state::AppState;

pub const GENERATE_FAILED: &str = "Failed to generate post";

/// `{prompt, theme, type}`. Only `prompt` reaches the model; the other two
/// are logged.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(rename = "type", default)]
    pub post_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
}

/// POST /api/generate
async fn generate_post(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> ProxyResult<Json<GenerateResponse>> {
    let Json(req) = payload.map_err(|e| ProxyError::BadRequest(e.body_text()))?;
    if req.prompt.trim().is_empty() {
        return Err(ProxyError::BadRequest("Prompt is required".into()));
    }

    tracing::info!(
        theme = req.theme.as_deref().unwrap_or(""),
        post_type = req.post_type.as_deref().unwrap_or(""),
        "Generating post"
    );

    let content = state
        .chat
        .complete(&post_request(state.chat.model(), &req.prompt))
        .await
        .map_err(|source| ProxyError::Upstream {
            public: GENERATE_FAILED,
            source,
        })?;

    Ok(Json(GenerateResponse { content }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generate_post))
}
