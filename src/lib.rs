mod api;
mod app;
mod components;
mod models;
mod pages;
mod screens;
mod session;
mod share;
mod state;
mod storage;
mod util;

use crate::app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::models::{Session, User};
    use crate::storage::{
        clear_session_storage, load_session_from_storage, save_code_verifier,
        save_session_to_storage, take_code_verifier,
    };
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn session(token: &str) -> Session {
        Session {
            access_token: token.to_string(),
            refresh_token: Some("r1".to_string()),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            expires_at: Some(2_000_000_000),
            user: User {
                id: "u1".to_string(),
                email: Some("ada@example.com".to_string()),
                user_metadata: serde_json::json!({"full_name": "Ada"}),
            },
        }
    }

    #[wasm_bindgen_test]
    fn test_session_storage_roundtrip() {
        clear_session_storage();
        assert!(load_session_from_storage().is_none());

        save_session_to_storage(&session("t1"));
        let loaded = load_session_from_storage().expect("should load session from localStorage");
        assert_eq!(loaded.access_token, "t1");
        assert_eq!(loaded.user.initial(), "A");

        clear_session_storage();
        assert!(load_session_from_storage().is_none());
    }

    #[wasm_bindgen_test]
    fn test_code_verifier_is_consumed_once() {
        save_code_verifier("v1");
        assert_eq!(take_code_verifier().as_deref(), Some("v1"));
        assert!(take_code_verifier().is_none());
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
