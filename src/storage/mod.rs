use crate::models::Session;
use serde::{Deserialize, Serialize};

pub(crate) const SESSION_KEY: &str = "postgen_session";
pub(crate) const CODE_VERIFIER_KEY: &str = "postgen_code_verifier";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let json = local_storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, &json);
        }
    }
}

pub(crate) fn remove_from_storage(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub(crate) fn save_session_to_storage(session: &Session) {
    save_json_to_storage(SESSION_KEY, session);
}

pub(crate) fn load_session_from_storage() -> Option<Session> {
    load_json_from_storage(SESSION_KEY)
}

pub(crate) fn clear_session_storage() {
    remove_from_storage(SESSION_KEY);
}

pub(crate) fn save_code_verifier(verifier: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(CODE_VERIFIER_KEY, verifier);
    }
}

/// The verifier is single use; reading it removes it.
pub(crate) fn take_code_verifier() -> Option<String> {
    let storage = local_storage()?;
    let verifier = storage.get_item(CODE_VERIFIER_KEY).ok().flatten();
    let _ = storage.remove_item(CODE_VERIFIER_KEY);
    verifier.filter(|v| !v.is_empty())
}
