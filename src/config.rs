use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Deployment-time settings for reaching the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Always ends with `/` so endpoint paths join under any prefix.
    pub backend_url: Url,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Loads `.env` if present, then reads `BACKEND_URL` and `REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("BACKEND_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let backend_url = parse_backend_url(&raw_url)?;

        let raw_timeout = lookup("REQUEST_TIMEOUT_SECS").filter(|s| !s.trim().is_empty());
        let request_timeout = match raw_timeout {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        tracing::debug!(%backend_url, ?request_timeout, "Loaded backend configuration");
        Ok(Self {
            backend_url,
            request_timeout,
        })
    }

    pub fn with_backend_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.backend_url = parse_backend_url(raw)?;
        Ok(self)
    }

    /// Absolute URL for an endpoint path like `api/lead`.
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.backend_url.clone();
        let joined = format!("{}{}", self.backend_url.path(), path.trim_start_matches('/'));
        url.set_path(&joined);
        url
    }
}

fn parse_backend_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBackendUrl {
        value: raw.to_string(),
        reason,
    };
    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
