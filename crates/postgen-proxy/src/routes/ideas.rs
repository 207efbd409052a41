use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde::Serialize;

use crate::error::{ProxyError, ProxyResult};
use crate::prompts::{ideas_request, parse_ideas, GeneratedIdea};
use crate::state::AppState;

pub const IDEAS_FAILED: &str = "Failed to generate ideas";

#[derive(Debug, Serialize)]
pub struct IdeasResponse {
    pub ideas: Vec<GeneratedIdea>,
}

/// POST /api/generate-ideas. Takes no body; the prompt is fixed.
async fn generate_ideas(State(state): State<AppState>) -> ProxyResult<Json<IdeasResponse>> {
    let text = state
        .chat
        .complete(&ideas_request(state.chat.model()))
        .await
        .map_err(|source| ProxyError::Upstream {
            public: IDEAS_FAILED,
            source,
        })?;

    let ideas = parse_ideas(&text).map_err(|source| ProxyError::MalformedOutput {
        public: IDEAS_FAILED,
        source,
    })?;

    tracing::info!(count = ideas.len(), "Generated calendar ideas");
    Ok(Json(IdeasResponse { ideas }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/generate-ideas", post(generate_ideas))
}
