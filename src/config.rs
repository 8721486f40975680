use crate::error::ConfigError;
use log::debug;
use reqwest::Url;
use reqwest::header::HeaderName;
use std::env;
use std::time::Duration;

pub const DEFAULT_ENV_PREFIX: &str = "CHOREO_SUMMARY_CONN";
pub const DEFAULT_AUTH_HEADER: &str = "choreo-api-key";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything the fetcher needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub service_url: Url,
    pub api_key: Option<String>,
    pub auth_header: HeaderName,
    pub timeout: Duration,
}

impl Config {
    /// Build a config for the given service URL with default header and timeout.
    pub fn new(service_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            service_url: parse_service_url("service_url", service_url)?,
            api_key: None,
            auth_header: HeaderName::from_static(DEFAULT_AUTH_HEADER),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Resolve `<PREFIX>_SERVICEURL` and `<PREFIX>_APIKEY` from the process environment.
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(prefix, |name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`] but against an arbitrary variable source.
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url_var = format!("{prefix}_SERVICEURL");
        let key_var = format!("{prefix}_APIKEY");

        let raw_url = lookup(&url_var)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingVar(url_var.clone()))?;
        let service_url = parse_service_url(&url_var, raw_url.trim())?;

        let api_key = lookup(&key_var).filter(|v| !v.is_empty());
        debug!(
            "Resolved config from {}: url={}, api key {}",
            prefix,
            service_url,
            if api_key.is_some() { "set" } else { "not set" }
        );

        Ok(Self {
            service_url,
            api_key,
            auth_header: HeaderName::from_static(DEFAULT_AUTH_HEADER),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Set the API key. An empty key means no key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into()).filter(|k| !k.is_empty());
        self
    }

    /// Send the API key under a different header name.
    pub fn with_auth_header(mut self, name: &str) -> Result<Self, ConfigError> {
        self.auth_header = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeaderName(name.to_string()))?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        self.timeout = timeout;
        Ok(self)
    }
}

fn parse_service_url(var: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        var: var.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            var: var.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}
