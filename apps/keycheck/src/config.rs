//! Validation client configuration.

use std::env;
use std::time::Duration;

/// Environment variable holding the Keygen account ID.
pub const ACCOUNT_ID_ENV: &str = "KEYGEN_ACCOUNT_ID";
/// Environment variable overriding the API base URL (handy for local mocks).
pub const API_URL_ENV: &str = "KEYGEN_API_URL";
/// Environment variable overriding the request timeout, in seconds. `0` disables it.
pub const TIMEOUT_SECS_ENV: &str = "KEYGEN_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.keygen.sh";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the validation client.
/// Priority: command-line flags (applied by the binary) > environment variables > defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host of the licensing API, without a path
    pub api_url: String,
    /// Account the license belongs to. Interpolated into the URL as-is.
    pub account_id: String,
    /// Upper bound for the whole request. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// A missing account ID is not an error: it yields an empty path segment and the
    /// API answers with a 404, which surfaces as an ordinary API error.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let account_id = lookup(ACCOUNT_ID_ENV).unwrap_or_default();

        let api_url = lookup(API_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = lookup(TIMEOUT_SECS_ENV)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_url,
            account_id,
            timeout: timeout_from_secs(timeout_secs),
        }
    }

    /// Full URL of the validate-key action for the configured account.
    pub fn validate_key_url(&self) -> String {
        format!(
            "{}/v1/accounts/{}/licenses/actions/validate-key",
            self.api_url.trim_end_matches('/'),
            self.account_id
        )
    }
}

/// Converts a seconds count into a timeout, where `0` means "no timeout".
pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}
