//! Client configuration

use std::time::Duration;
use super::error::ConfigError;

/// Environment variable holding the API base URL
pub const ENDPOINT_VAR: &str = "ARALIA_ENDPOINT";
/// Environment variable holding the bearer token
pub const TOKEN_VAR: &str = "ARALIA_TOKEN";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the API client.
///
/// An explicit value passed to [`Client::new`](super::Client::new); the
/// client keeps no ambient global state. `from_env` is a convenience for
/// processes configured through the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default API base URL (individual datasets may override it with their
    /// own `sourceURL`)
    pub endpoint: String,
    /// Bearer credential sent on every request
    pub token: String,
    /// Connect/read/write timeout applied to every request
    pub timeout: Duration,
}

impl Config {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the two required settings from the process environment.
    ///
    /// Absence of either is a startup-time failure.
    pub fn from_env() -> Result<Self, ConfigError> {
        let endpoint =
            std::env::var(ENDPOINT_VAR).map_err(|_| ConfigError::Missing(ENDPOINT_VAR))?;
        let token = std::env::var(TOKEN_VAR).map_err(|_| ConfigError::Missing(TOKEN_VAR))?;
        Ok(Self::new(endpoint, token))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let config = Config::new("https://tw-air.araliadata.io/api", "secret");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_with_timeout() {
        let config = Config::new("https://tw-air.araliadata.io/api", "secret")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
