//! Harness configuration parsed from environment variables.

use slots::{DEFAULT_SLOTS_ENDPOINT, StalePolicy, slots_request_path};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotsConfig {
    pub base_url: String,
    pub endpoint_path: String,
    pub timeouts: HttpTimeouts,
    pub stale_policy: StalePolicy,
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            endpoint_path: DEFAULT_SLOTS_ENDPOINT.to_owned(),
            timeouts: HttpTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
            stale_policy: StalePolicy::default(),
        }
    }
}

impl SlotsConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `SLOTS_BASE_URL`: default `http://127.0.0.1:5000`
    /// - `SLOTS_ENDPOINT_PATH`: default `/api/slots`
    /// - `SLOTS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SLOTS_CONNECT_TIMEOUT_SECS`: default 10
    /// - `SLOTS_STALE_POLICY`: `discard` (default) or `last_wins`
    ///
    /// # Errors
    ///
    /// Returns an error if `SLOTS_STALE_POLICY` is not a known policy.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SlotsConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if `SLOTS_STALE_POLICY` is not a known policy.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(&lookup("SLOTS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()));
        let endpoint_path =
            normalize_endpoint(&lookup("SLOTS_ENDPOINT_PATH").unwrap_or_else(|| DEFAULT_SLOTS_ENDPOINT.to_owned()));
        let timeouts = HttpTimeouts {
            request_secs: parse_u64(lookup("SLOTS_REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("SLOTS_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let stale_policy = parse_stale_policy(lookup("SLOTS_STALE_POLICY").as_deref())?;

        Ok(Self { base_url, endpoint_path, timeouts, stale_policy })
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }

    #[must_use]
    pub fn with_endpoint_path(mut self, endpoint_path: &str) -> Self {
        self.endpoint_path = normalize_endpoint(endpoint_path);
        self
    }

    #[must_use]
    pub fn with_stale_policy(mut self, stale_policy: StalePolicy) -> Self {
        self.stale_policy = stale_policy;
        self
    }

    /// Absolute request URL for `date`.
    #[must_use]
    pub fn request_url(&self, date: &str) -> String {
        format!("{}{}", self.base_url, slots_request_path(&self.endpoint_path, date))
    }
}

/// Parse a stale policy name; `None` means the default.
///
/// # Errors
///
/// Returns an error for anything other than `discard` or `last_wins`.
pub fn parse_stale_policy(raw: Option<&str>) -> Result<StalePolicy, ConfigError> {
    let Some(raw) = raw else {
        return Ok(StalePolicy::default());
    };
    StalePolicy::parse(raw.trim()).ok_or_else(|| {
        ConfigError::Parse(format!("unknown SLOTS_STALE_POLICY '{raw}' (expected 'discard' or 'last_wins')"))
    })
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn normalize_endpoint(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('/') { trimmed.to_owned() } else { format!("/{trimmed}") }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
