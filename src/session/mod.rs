//! The signed-in session and the OAuth (PKCE) flow around it.

mod pkce;

pub(crate) use pkce::{code_challenge, generate_code_verifier};

use crate::api::{ApiClient, ApiError, ApiErrorKind, ApiResult};
use crate::models::{Session, User};
use crate::storage::{
    clear_session_storage, load_session_from_storage, save_code_verifier, save_session_to_storage,
    take_code_verifier,
};
use crate::util::now_secs;
use leptos::logging::warn;
use leptos::prelude::*;

pub(crate) const DASHBOARD_PATH: &str = "/";
pub(crate) const LOGIN_PATH: &str = "/auth/login";
pub(crate) const AUTH_ERROR_PATH: &str = "/auth/error";

/// Session handle shared by every page for the lifetime of the app.
///
/// The backend client inside is fixed at startup; only the session signal changes.
#[derive(Clone, Copy)]
pub(crate) struct SessionStore {
    client: StoredValue<ApiClient>,
    session: RwSignal<Option<Session>>,
}

impl SessionStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: StoredValue::new(client),
            session: RwSignal::new(load_session_from_storage()),
        }
    }

    /// Client authorized as the current user (anon key when signed out).
    pub fn client(&self) -> ApiClient {
        let token = self
            .session
            .with_untracked(|s| s.as_ref().map(|s| s.access_token.clone()));
        self.client.with_value(|c| c.with_token(token))
    }

    fn anon_client(&self) -> ApiClient {
        self.client.get_value()
    }

    fn store(&self, session: Session) {
        save_session_to_storage(&session);
        self.session.set(Some(session));
    }

    fn clear(&self) {
        clear_session_storage();
        self.session.set(None);
    }

    /// `None` when nobody is signed in. An expired session is refreshed once; if the
    /// backend rejects the refresh the session is dropped.
    pub async fn get_current_session(&self) -> ApiResult<Option<Session>> {
        let Some(session) = self.session.get_untracked() else {
            return Ok(None);
        };
        if !session.is_expired(now_secs()) {
            return Ok(Some(session));
        }

        let Some(refresh_token) = session.refresh_token.clone() else {
            self.clear();
            return Ok(None);
        };

        match self.anon_client().refresh_session(&refresh_token).await {
            Ok(fresh) => {
                let fresh = fresh.with_expiry_from(now_secs());
                self.store(fresh.clone());
                Ok(Some(fresh))
            }
            Err(e) if e.kind == ApiErrorKind::Network => Err(e),
            Err(e) => {
                warn!("session refresh rejected: {e}");
                self.clear();
                Ok(None)
            }
        }
    }

    pub async fn get_current_user(&self) -> ApiResult<Option<User>> {
        let Some(session) = self.get_current_session().await? else {
            return Ok(None);
        };
        self.anon_client()
            .with_token(Some(session.access_token))
            .fetch_user()
            .await
            .map(Some)
    }

    /// Leaves the page for the provider's consent screen.
    pub fn sign_in_with_linkedin(&self) -> ApiResult<()> {
        let verifier = generate_code_verifier().map_err(|e| ApiError::config(e.to_string()))?;
        save_code_verifier(&verifier);

        let url = self.anon_client().authorize_url(&code_challenge(&verifier));
        window()
            .location()
            .set_href(&url)
            .map_err(|e| ApiError::config(format!("Redirect failed: {e:?}")))
    }

    pub async fn exchange_code(&self, code: &str) -> ApiResult<Session> {
        let verifier =
            take_code_verifier().ok_or_else(|| ApiError::auth("Missing PKCE code verifier"))?;
        let session = self
            .anon_client()
            .exchange_code_for_session(code, &verifier)
            .await?
            .with_expiry_from(now_secs());
        self.store(session.clone());
        Ok(session)
    }

    /// Always ends signed out on the login page, even if revoking the token failed.
    pub async fn sign_out(&self) {
        if let Err(e) = self.client().logout().await {
            warn!("sign out: token revoke failed: {e}");
        }
        self.clear();
        if let Err(e) = window().location().set_href(LOGIN_PATH) {
            warn!("sign out: redirect failed: {e:?}");
        }
    }
}

/// What the OAuth callback route does with its query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CallbackOutcome {
    Exchange { code: String },
    Fail { reason: String },
}

pub(crate) fn callback_outcome(code: Option<&str>, provider_error: Option<&str>) -> CallbackOutcome {
    if let Some(err) = provider_error.filter(|e| !e.trim().is_empty()) {
        return CallbackOutcome::Fail {
            reason: format!("Provider returned error: {err}"),
        };
    }
    match code.map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => CallbackOutcome::Exchange {
            code: code.to_string(),
        },
        None => CallbackOutcome::Fail {
            reason: "No authorization code in callback".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_without_code_fails() {
        assert!(matches!(callback_outcome(None, None), CallbackOutcome::Fail { .. }));
        assert!(matches!(callback_outcome(Some(""), None), CallbackOutcome::Fail { .. }));
    }

    #[test]
    fn test_callback_with_code_exchanges() {
        assert_eq!(
            callback_outcome(Some("abc123"), None),
            CallbackOutcome::Exchange {
                code: "abc123".to_string()
            }
        );
    }

    #[test]
    fn test_callback_provider_error_wins() {
        match callback_outcome(Some("abc123"), Some("access_denied")) {
            CallbackOutcome::Fail { reason } => assert!(reason.contains("access_denied")),
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
