use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Upstream chat-completion provider settings.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    /// Base URL without the `/v1/...` path (default: `https://api.openai.com`).
    pub base_url: String,
    /// Model used for every completion (default: `gpt-4o-mini`).
    pub model: String,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8787`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Request timeout in seconds, applied both to inbound requests and to the
    /// upstream HTTP client (default: `60`).
    pub request_timeout_secs: u64,
    pub openai: OpenAiConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `OPENAI_API_KEY`       | required                   |
    /// | `OPENAI_BASE_URL`      | `https://api.openai.com`   |
    /// | `OPENAI_MODEL`         | `gpt-4o-mini`              |
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8787`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:8080`    |
    /// | `REQUEST_TIMEOUT_SECS` | `60`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary key lookup.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;
        let base_url = get("OPENAI_BASE_URL")
            .unwrap_or_else(|| "https://api.openai.com".into())
            .trim_end_matches('/')
            .to_string();
        let model = get("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".into());

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());
        host.parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
            name: "HOST",
            value: host.clone(),
        })?;

        let port = parse_or("PORT", get("PORT"), 8787u16)?;
        let request_timeout_secs = parse_or("REQUEST_TIMEOUT_SECS", get("REQUEST_TIMEOUT_SECS"), 60u64)?;

        let cors_origins: Vec<String> = get("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:8080".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins.iter().find(|o| HeaderValue::from_str(o).is_err()) {
            return Err(ConfigError::Invalid {
                name: "CORS_ORIGINS",
                value: bad.clone(),
            });
        }

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            openai: OpenAiConfig {
                api_key,
                base_url,
                model,
            },
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = self.host.parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
            name: "HOST",
            value: self.host.clone(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = ServerConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8787);
        assert_eq!(config.cors_origins, vec!["http://localhost:8080"]);
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.openai.base_url, "https://api.openai.com");
        assert_eq!(config.openai.model, "gpt-4o-mini");
        assert_eq!(config.bind_addr().unwrap().port(), 8787);
    }

    #[test]
    fn missing_or_blank_api_key_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("OPENAI_API_KEY")));

        let err = ServerConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("OPENAI_API_KEY")));
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn origins_are_split_and_base_url_trimmed() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://127.0.0.1:9000/"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,,"),
        ]))
        .unwrap();

        assert_eq!(config.openai.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn invalid_host_is_reported() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("HOST", "not an ip"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { name: "HOST", .. }));
    }
}
