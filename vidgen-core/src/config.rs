// ============================================================================
// vidgen-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Core Configuration Structure and Constants
//
// This module defines the configuration structure and constants used by the
// vidgen-core library: the API credential, the endpoint base URL, and the
// polling cadence for job status checks.
//
// KEY COMPONENTS:
// - CoreConfig: Main configuration structure for the library
// - Default constants: Predefined values for endpoint and timing settings
//
// USAGE:
// Instances of CoreConfig are created by consumers of the library (like
// vidgen-cli), usually via CoreConfig::from_env, and passed to generate_video
// to control the request.

use crate::error::{CoreError, CoreResult};
use std::time::Duration;

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Environment variable holding the API credential. Absence is a fatal,
/// pre-flight error.
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Environment variable that overrides the endpoint base URL when set.
pub const BASE_URL_ENV_VAR: &str = "OPENAI_BASE_URL";

/// Default base URL for the remote video generation API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Fixed wait between job status checks, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;

/// Default upper bound on total wait for job completion, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

// ============================================================================
// CORE CONFIGURATION
// ============================================================================

/// Main configuration structure for the vidgen-core library.
///
/// Holds the API credential, the endpoint base URL, and the polling timing.
/// Typically created by the consumer of the library (e.g., vidgen-cli) via
/// [`CoreConfig::from_env`] and passed to `generate_video`.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    // ---- Credentials / Endpoint ----
    /// API credential sent as a bearer token on every request
    pub api_key: String,

    /// Base URL of the remote API (no trailing slash)
    pub base_url: String,

    // ---- Polling ----
    /// Fixed wait between job status checks
    pub poll_interval: Duration,

    /// Upper bound on total wait for job completion
    pub timeout: Duration,
}

impl CoreConfig {
    /// Creates a configuration with the given credential and default
    /// endpoint and timing settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Creates a configuration from the environment.
    ///
    /// Reads the credential from `OPENAI_API_KEY` (required) and the base
    /// URL from `OPENAI_BASE_URL` (optional). A missing or empty credential
    /// is reported before any other work happens.
    pub fn from_env() -> CoreResult<Self> {
        let api_key = std::env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(CoreError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV_VAR) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url.trim_end_matches('/').to_string();
            }
        }
        Ok(config)
    }

    /// Validates the configuration, returning an error describing the first
    /// problem found.
    pub fn validate(&self) -> CoreResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(CoreError::Config("api_key must not be empty".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(CoreError::Config("base_url must not be empty".to_string()));
        }
        if self.poll_interval.is_zero() {
            return Err(CoreError::Config(
                "poll_interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = CoreConfig::new("sk-test");
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.poll_interval,
            Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS)
        );
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let config = CoreConfig::new("");
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_poll_interval() {
        let mut config = CoreConfig::new("sk-test");
        config.poll_interval = Duration::ZERO;
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }
}
