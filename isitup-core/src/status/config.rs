use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://isitup.org";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Request settings shared by every check a `StatusChecker` makes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Base URL of the status service, without a trailing slash
    pub endpoint: String,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Bound on TCP connect plus TLS handshake
    pub connect_timeout: Duration,
    /// Bound on the whole request, body included
    pub request_timeout: Duration,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: default_user_agent(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl CheckerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the checker at another deployment of the service.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

fn default_user_agent() -> String {
    format!("isitup/{} (+{})", env!("CARGO_PKG_VERSION"), DEFAULT_ENDPOINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CheckerConfig::default();
        assert_eq!(config.endpoint, "https://isitup.org");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("isitup/"));
    }

    #[test]
    fn test_config_builder() {
        let config = CheckerConfig::new()
            .with_endpoint("http://127.0.0.1:8080/")
            .with_user_agent("probe/1.0")
            .with_connect_timeout(Duration::from_millis(250))
            .with_request_timeout(Duration::from_secs(2));

        assert_eq!(config.endpoint, "http://127.0.0.1:8080");
        assert_eq!(config.user_agent, "probe/1.0");
        assert_eq!(config.connect_timeout, Duration::from_millis(250));
        assert_eq!(config.request_timeout, Duration::from_secs(2));
    }
}
