mod auth;
mod generation;
mod ideas;
mod posts;
mod rest;

#[cfg(test)]
pub(crate) use generation::GeneratePostRequest;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    Http,
    /// PostgREST / auth service answered with its own error object.
    Backend,
    Parse,
    Config,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error body shared by PostgREST (`message`) and the auth service (`msg`, `error_description`).
#[derive(Deserialize, Debug, Default)]
struct BackendErrorBody {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn unauthorized() -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: "Unauthorized".to_string(),
        }
    }

    /// Auth flow failure that never reached the backend (missing verifier, no session).
    pub(crate) fn auth(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Config,
            message: message.into(),
        }
    }

    fn http(status: u16, body: &str, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }

    /// Prefer the backend's structured error; fall back to a plain HTTP error.
    fn from_response(status: u16, body: &str, ctx: &str) -> Self {
        let parsed = serde_json::from_str::<BackendErrorBody>(body).ok();
        let message = parsed.as_ref().and_then(|b| {
            b.message
                .clone()
                .or_else(|| b.msg.clone())
                .or_else(|| b.error_description.clone())
        });

        match (parsed, message) {
            (Some(b), Some(message)) => {
                let mut out = format!("{ctx} ({status}): {message}");
                if let Some(code) = b.code.filter(|c| !c.is_null()) {
                    out.push_str(&format!(" [code {code}]"));
                }
                if let Some(details) = b.details.filter(|d| !d.is_empty()) {
                    out.push_str(&format!(" details: {details}"));
                }
                if let Some(hint) = b.hint.filter(|h| !h.is_empty()) {
                    out.push_str(&format!(" hint: {hint}"));
                }
                Self {
                    kind: ApiErrorKind::Backend,
                    message: out,
                }
            }
            _ => Self::http(status, body, ctx),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Map a finished response to a typed value.
///
/// An empty 2xx body decodes as JSON `null`, so `()` and `Option<_>` work for
/// `return=minimal` writes and 204 replies.
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
    ctx: &str,
) -> ApiResult<T> {
    if (200..300).contains(&status) {
        let body = if body.trim().is_empty() { "null" } else { body };
        serde_json::from_str(body).map_err(ApiError::parse)
    } else if status == 401 {
        Err(ApiError::unauthorized())
    } else {
        Err(ApiError::from_response(status, body, ctx))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct EnvConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    /// Base URL of the generation proxy; defaults to the page origin.
    pub proxy_url: String,
    pub auth_callback_url: String,
}

impl EnvConfig {
    /// Read `window.ENV`, written by `index.html` before the wasm bundle loads.
    ///
    /// `SUPABASE_URL` and `SUPABASE_ANON_KEY` are required. Both `SUPABASE_URL` and
    /// `supabase_url` spellings are accepted.
    pub fn from_window() -> ApiResult<Self> {
        let window = web_sys::window().ok_or_else(|| ApiError::config("No window object"))?;
        let origin = window.location().origin().unwrap_or_default();
        let env = window.get("ENV").filter(|env| !env.is_undefined() && env.is_object());

        Self::from_lookup(&origin, |key| {
            let env = env.as_ref()?;
            [key.to_string(), key.to_lowercase()].iter().find_map(|k| {
                js_sys::Reflect::get(env, &k.as_str().into())
                    .ok()
                    .and_then(|v| v.as_string())
            })
        })
    }

    pub fn from_lookup(origin: &str, lookup: impl Fn(&str) -> Option<String>) -> ApiResult<Self> {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &str| {
            value(key).ok_or_else(|| ApiError::config(format!("{key} is not configured")))
        };

        let supabase_url = required("SUPABASE_URL")?.trim_end_matches('/').to_string();
        let supabase_anon_key = required("SUPABASE_ANON_KEY")?;
        let origin = origin.trim_end_matches('/');
        let proxy_url = value("PROXY_URL")
            .unwrap_or_else(|| origin.to_string())
            .trim_end_matches('/')
            .to_string();
        let auth_callback_url =
            value("AUTH_CALLBACK_URL").unwrap_or_else(|| format!("{origin}/auth/callback"));

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            proxy_url,
            auth_callback_url,
        })
    }
}

/// HTTP client for the backend (auth + table API) and the generation proxy.
///
/// Cheap to clone; carries the signed-in user's access token once a session exists.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) config: EnvConfig,
    pub(crate) token: Option<String>,
}

impl ApiClient {
    pub fn new(config: EnvConfig) -> Self {
        Self {
            config,
            token: None,
        }
    }

    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            config: self.config.clone(),
            token,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Row-level security sees the user's JWT; without one the anon key stands in.
    fn bearer(&self) -> String {
        format!(
            "Bearer {}",
            self.token.as_deref().unwrap_or(&self.config.supabase_anon_key)
        )
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.config.supabase_url, path)
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.supabase_url, table)
    }

    pub(crate) fn proxy_url(&self, path: &str) -> String {
        format!("{}{}", self.config.proxy_url, path)
    }

    /// Request with the backend's `apikey` + bearer headers attached.
    fn backend_request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        reqwest::Client::new()
            .request(method, url)
            .header("apikey", &self.config.supabase_anon_key)
            .header("Authorization", self.bearer())
    }

    async fn execute<T: DeserializeOwned>(
        req: reqwest::RequestBuilder,
        ctx: &str,
    ) -> ApiResult<T> {
        let res = req.send().await.map_err(ApiError::network)?;
        let status = res.status().as_u16();
        let body = res.text().await.map_err(ApiError::network)?;
        decode_response(status, &body, ctx)
    }
}
