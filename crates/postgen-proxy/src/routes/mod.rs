pub mod generate;
pub mod health;
pub mod ideas;
pub mod share;

use axum::Router;

use crate::state::AppState;

/// Everything mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(generate::router())
        .merge(ideas::router())
        .merge(share::router())
}
