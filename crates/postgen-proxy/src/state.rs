use std::sync::Arc;

use crate::config::ServerConfig;
use crate::llm::ChatClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the config sits behind an `Arc` and the client pools
/// connections internally.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub chat: ChatClient,
}
