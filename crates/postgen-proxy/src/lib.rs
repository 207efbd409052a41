//! LLM proxy for the PostGen dashboard.
//!
//! Keeps the provider API key on the server and exposes the small set of
//! generation endpoints the browser calls. The binary entrypoint and the
//! integration tests share [`router::build_app_router`].

pub mod config;
pub mod error;
pub mod llm;
pub mod prompts;
pub mod router;
pub mod routes;
pub mod state;
