//! Public configuration for the cats client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;
use url::Url;

/// Default base URL, pointing at a local development server.
pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Configuration for the cats client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use cats_client::CatsClientConfig;
/// use std::time::Duration;
///
/// let config = CatsClientConfig::new()
///     .with_base_url("https://cats.example")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct CatsClientConfig {
    /// Base URL for the cats API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl Default for CatsClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("cats-client/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }
}

impl CatsClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the cats API.
    ///
    /// Defaults to `http://localhost:3000`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 3 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}

/// Internal configuration with the base URL already parsed.
#[derive(Debug, Clone)]
pub(crate) struct FetchConfig {
    /// Base URL for the cats API
    pub(crate) base_url: Url,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay in milliseconds for exponential backoff
    pub(crate) retry_base_delay_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::from_public(&CatsClientConfig::default())
    }
}

impl FetchConfig {
    /// Derive the internal config from the public one.
    ///
    /// A base URL that does not parse falls back to the default so the
    /// constructor stays infallible; the fallback is logged.
    pub(crate) fn from_public(config: &CatsClientConfig) -> Self {
        let base_url = Url::parse(&config.base_url).unwrap_or_else(|error| {
            tracing::warn!(
                base_url = %config.base_url,
                error = %error,
                "Invalid base URL, falling back to the default"
            );
            Url::parse(DEFAULT_BASE_URL).expect("default URL is valid")
        });

        Self {
            base_url,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            max_retries: config.max_retries,
            #[allow(clippy::cast_possible_truncation)] // Duration milliseconds won't exceed u64 in practice
            retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatsClientConfig::new();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert!(config.user_agent.contains("cats-client"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_base_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_builder_pattern() {
        let config = CatsClientConfig::new()
            .with_base_url("https://custom.api/")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(60))
            .with_max_retries(5)
            .with_retry_delay(Duration::from_millis(10));

        assert_eq!(config.base_url, "https://custom.api/");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_base_delay, Duration::from_millis(10));
    }

    #[test]
    fn test_internal_config_carries_settings_over() {
        let config = CatsClientConfig::new()
            .with_base_url("https://cats.example/api")
            .with_retry_delay(Duration::from_millis(250));
        let internal = FetchConfig::from_public(&config);

        assert_eq!(internal.base_url.as_str(), "https://cats.example/api");
        assert_eq!(internal.retry_base_delay_ms, 250);
        assert_eq!(internal.max_retries, 3);
    }

    #[test]
    fn test_invalid_base_url_falls_back_to_default() {
        let config = CatsClientConfig::new().with_base_url("not a url");
        let internal = FetchConfig::from_public(&config);

        assert_eq!(internal.base_url.as_str(), "http://localhost:3000/");
    }
}
