//! Process configuration, read once from the environment at startup.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://westkueste.papierkram.de/api/v1";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_API_TOKEN: &str = "PAPIERKRAM_API_TOKEN";
pub const ENV_BASE_URL: &str = "PAPIERKRAM_BASE_URL";
pub const ENV_LOG: &str = "PAPIERKRAM_LOG";

/// Where the API lives and how to authenticate against it.
///
/// Immutable once built; the client takes it by value and never looks at the
/// environment itself.
#[derive(Clone)]
pub struct EndpointConfig {
    base_url: String,
    api_token: SecretString,
}

impl EndpointConfig {
    /// Both fields must be non-empty. One trailing slash is stripped from
    /// `base_url` so paths can be appended directly.
    pub fn new(base_url: &str, api_token: &str) -> Result<Self, ConfigError> {
        if api_token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        let base_url = base_url.strip_suffix('/').unwrap_or(base_url);
        if base_url.is_empty() {
            return Err(ConfigError::InvalidBaseUrl {
                url: String::new(),
                reason: "empty".into(),
            });
        }
        reqwest::Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            base_url: base_url.to_string(),
            api_token: SecretString::from(api_token.to_string()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_token(&self) -> &str {
        self.api_token.expose_secret()
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .finish()
    }
}

/// Everything the bootstrap needs.
///
/// | Variable | Default |
/// |---|---|
/// | `PAPIERKRAM_API_TOKEN` | *(required)* |
/// | `PAPIERKRAM_BASE_URL` | `https://westkueste.papierkram.de/api/v1` |
/// | `PAPIERKRAM_LOG` | `info` |
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub log_filter: String,
}

/// Values supplied on the command line take precedence over the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub log_filter: Option<String>,
}

impl Config {
    /// Build from an environment lookup function; the process passes
    /// `std::env::var`, tests pass a map.
    pub fn from_env_fn<F>(overrides: &Overrides, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let token = env(ENV_API_TOKEN)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let base_url = overrides
            .base_url
            .clone()
            .or_else(|| env(ENV_BASE_URL).ok().filter(|u| !u.is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            endpoint: EndpointConfig::new(&base_url, &token)?,
            log_filter: log_filter_from_env_fn(overrides, env),
        })
    }
}

/// Log filter alone, so logging can start before the credential is checked.
pub fn log_filter(overrides: &Overrides) -> String {
    log_filter_from_env_fn(overrides, |key| std::env::var(key))
}

fn log_filter_from_env_fn<F>(overrides: &Overrides, env: F) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    overrides
        .log_filter
        .clone()
        .or_else(|| env(ENV_LOG).ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn test_missing_token_is_fatal() {
        let err = Config::from_env_fn(&Overrides::default(), env_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let env = env_from(&[(ENV_API_TOKEN, "  ")]);
        let err = Config::from_env_fn(&Overrides::default(), env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));
    }

    #[test]
    fn test_defaults() {
        let env = env_from(&[(ENV_API_TOKEN, "tok")]);
        let config = Config::from_env_fn(&Overrides::default(), env).unwrap();
        assert_eq!(config.endpoint.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.endpoint.api_token(), "tok");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let env = env_from(&[
            (ENV_API_TOKEN, "tok"),
            (ENV_BASE_URL, "https://acme.papierkram.de/api/v1/"),
        ]);
        let config = Config::from_env_fn(&Overrides::default(), env).unwrap();
        assert_eq!(config.endpoint.base_url(), "https://acme.papierkram.de/api/v1");
    }

    #[test]
    fn test_overrides_win_over_env() {
        let env = env_from(&[
            (ENV_API_TOKEN, "tok"),
            (ENV_BASE_URL, "https://env.example/api/v1"),
            (ENV_LOG, "warn"),
        ]);
        let overrides = Overrides {
            base_url: Some("http://127.0.0.1:9000".into()),
            log_filter: Some("debug".into()),
        };
        let config = Config::from_env_fn(&overrides, env).unwrap();
        assert_eq!(config.endpoint.base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let env = env_from(&[(ENV_API_TOKEN, "tok"), (ENV_BASE_URL, "not a url")]);
        let err = Config::from_env_fn(&Overrides::default(), env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_debug_redacts_token() {
        let endpoint = EndpointConfig::new("https://x.example/api/v1", "super-secret").unwrap();
        let debug = format!("{endpoint:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
