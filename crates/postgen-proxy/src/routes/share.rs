use axum::{routing::post, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub const SHARE_MESSAGE: &str =
    "Sharing is now handled client-side. Open LinkedIn directly from the app.";

/// POST /api/share-to-linkedin. Older clients still call this; sharing itself
/// happens in the browser through the share intent URL.
async fn share_to_linkedin() -> Json<Value> {
    Json(json!({ "message": SHARE_MESSAGE }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/share-to-linkedin", post(share_to_linkedin))
}
