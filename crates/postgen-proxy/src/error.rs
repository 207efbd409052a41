use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::llm::LlmError;

/// Error type for proxy handlers.
///
/// Upstream failures are logged in full and answered with the endpoint's
/// fixed public message; the provider's error text never reaches the browser.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// Missing or malformed input, reported back verbatim.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The chat-completion call failed.
    #[error("{public}: {source}")]
    Upstream {
        public: &'static str,
        #[source]
        source: LlmError,
    },

    /// The model answered, but not with the JSON the endpoint expects.
    #[error("{public}: malformed model output: {source}")]
    MalformedOutput {
        public: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for handler return values.
pub type ProxyResult<T> = Result<T, ProxyError>;

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ProxyError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ProxyError::Upstream { public, source } => {
                tracing::error!(error = %source, "{}", public);
                (StatusCode::INTERNAL_SERVER_ERROR, public.to_string())
            }
            ProxyError::MalformedOutput { public, source } => {
                tracing::error!(error = %source, "{}", public);
                (StatusCode::INTERNAL_SERVER_ERROR, public.to_string())
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
