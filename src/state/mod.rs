use crate::api::{ApiClient, ApiResult, EnvConfig};
use crate::session::SessionStore;
use crate::util::set_timeout;
use leptos::prelude::*;

const TOAST_TTL_MS: i32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToastKind {
    Success,
    Error,
}

/// Transient notification shown in the corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub session: SessionStore,

    /// Visible toasts, oldest first, keyed for removal.
    pub toasts: RwSignal<Vec<(u64, Toast)>>,
    next_toast_id: StoredValue<u64>,
}

impl AppState {
    pub fn new(config: EnvConfig) -> Self {
        Self {
            session: SessionStore::new(ApiClient::new(config)),
            toasts: RwSignal::new(vec![]),
            next_toast_id: StoredValue::new(0),
        }
    }

    /// Backend/proxy client for the current user.
    pub fn client(&self) -> ApiClient {
        self.session.client()
    }

    pub fn notify(&self, toast: Toast) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id.wrapping_add(1));
        self.toasts.update(|t| t.push((id, toast)));

        let toasts = self.toasts;
        set_timeout(TOAST_TTL_MS, move || {
            toasts.update(|t| t.retain(|(i, _)| *i != id));
        });
    }

    pub fn notify_opt(&self, toast: Option<Toast>) {
        if let Some(toast) = toast {
            self.notify(toast);
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);

/// Config problems are rendered instead of the app.
pub(crate) fn load_app_state() -> ApiResult<AppState> {
    EnvConfig::from_window().map(AppState::new)
}
