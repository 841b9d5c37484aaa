//! Client configuration.
//!
//! Configuration is an explicit object handed to the transport, not a
//! hidden global: construct one from the environment at startup and pass
//! it down.

use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "PADRON_API_URL";

/// Client-wide request timeout. Fixed; not configurable at call sites.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing PADRON_API_URL environment variable")]
    MissingBaseUrl,
}

/// Base URL and timeout for every request issued through the shared client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Applies to the whole client; call sites cannot override it.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Trailing slashes are stripped so path concatenation stays uniform.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        std::env::var(API_URL_ENV)
            .map(Self::new)
            .map_err(|_| ConfigError::MissingBaseUrl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_to_the_fixed_client_wide_value() {
        assert_eq!(ClientConfig::new("http://api.test").timeout, REQUEST_TIMEOUT);
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(ClientConfig::new("http://api.test/").base_url, "http://api.test");
        assert_eq!(ClientConfig::new("http://api.test//").base_url, "http://api.test");
        assert_eq!(ClientConfig::new("http://api.test").base_url, "http://api.test");
    }
}
