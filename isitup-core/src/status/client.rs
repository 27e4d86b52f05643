use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, instrument};

use super::config::CheckerConfig;
use super::types::{CheckOutcome, StatusResponse};
use crate::error::{IsItUpError, Result};

/// Asks isitup.org whether one host is up
///
/// The request is prepared once at construction. Every operation performs its
/// own round trip; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct StatusChecker {
    host: String,
    url: Url,
    http: Client,
}

impl StatusChecker {
    /// Create a checker for `host` with default settings
    pub fn new(host: &str) -> Result<Self> {
        Self::with_config(host, CheckerConfig::default())
    }

    /// Create a checker for `host` using the given request settings
    ///
    /// The host is placed into the request path as-is. Only failures to build
    /// the request locally are reported here; whether the host is a valid
    /// domain is left to the service.
    pub fn with_config(host: &str, config: CheckerConfig) -> Result<Self> {
        check_host(host)?;

        let raw = format!("{}/{}.json", config.endpoint, host);
        let url = Url::parse(&raw)
            .map_err(|e| IsItUpError::InvalidRequest(format!("{}: {}", raw, e)))?;

        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| IsItUpError::InvalidRequest(e.to_string()))?;

        Ok(Self {
            host: host.to_string(),
            url,
            http,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The prepared request URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Query the service and decode its answer
    ///
    /// The service's own HTTP status is not inspected; the body is decoded
    /// whatever it is.
    #[instrument(skip(self), fields(host = %self.host))]
    pub async fn check(&self) -> Result<StatusResponse> {
        debug!(url = %self.url, "Querying status service");

        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;
        let status: StatusResponse = serde_json::from_slice(&body)?;

        debug!(
            status_code = status.status_code,
            response_ip = %status.response_ip,
            "Decoded status response"
        );

        Ok(status)
    }

    /// Like [`check`](Self::check), bounded by a caller-supplied limit on top
    /// of the configured timeouts
    pub async fn check_within(&self, limit: Duration) -> Result<StatusResponse> {
        tokio::time::timeout(limit, self.check())
            .await
            .map_err(|_| {
                IsItUpError::Timeout(format!("check of {} exceeded {:?}", self.host, limit))
            })?
    }

    /// Run a check and classify it as up, down or failed
    pub async fn outcome(&self) -> CheckOutcome {
        self.check().await.into()
    }

    /// Whether the service reports the host as up
    ///
    /// Any failure to reach the service or decode its answer reads as down.
    pub async fn fetch_status(&self) -> bool {
        match self.check().await {
            Ok(status) => status.is_up(),
            Err(e) => {
                debug!(host = %self.host, error = %e, "Status check failed, reporting down");
                false
            }
        }
    }

    /// IP address the service resolved the host to, empty on failure
    pub async fn resolved_ip(&self) -> String {
        match self.check().await {
            Ok(status) => status.response_ip,
            Err(e) => {
                debug!(host = %self.host, error = %e, "IP lookup failed");
                String::new()
            }
        }
    }

    /// All response fields as a `field: value` block, empty on failure
    pub async fn diagnostics(&self) -> String {
        match self.check().await {
            Ok(status) => status.to_string(),
            Err(e) => {
                debug!(host = %self.host, error = %e, "Diagnostics fetch failed");
                String::new()
            }
        }
    }

    fn request_error(&self, error: reqwest::Error) -> IsItUpError {
        if error.is_timeout() {
            IsItUpError::Timeout(format!("request to {} timed out", self.url))
        } else {
            IsItUpError::HttpError(error)
        }
    }
}

/// Reject hosts that URL parsing would rewrite or refuse to send as-is.
///
/// Dot segments are resolved away by URL normalisation, so `a.com/../b.com`
/// would silently become a check of `b.com`.
fn check_host(host: &str) -> Result<()> {
    let invalid =
        |reason: &str| IsItUpError::InvalidRequest(format!("{} in host {:?}", reason, host));

    if host.chars().any(|c| c.is_ascii_control()) {
        return Err(invalid("control character"));
    }

    let bytes = host.as_bytes();
    for (i, _) in bytes.iter().enumerate().filter(|(_, b)| **b == b'%') {
        let escaped = bytes.get(i + 1..i + 3);
        if !escaped.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
            return Err(invalid("malformed percent escape"));
        }
    }

    let path = host.split(['?', '#']).next().unwrap_or(host);
    let is_dot_segment = |segment: &str| {
        let segment = segment.to_ascii_lowercase().replace("%2e", ".");
        segment == "." || segment == ".."
    };
    if path.split(['/', '\\']).any(is_dot_segment) {
        return Err(invalid("dot path segment"));
    }

    Ok(())
}

/// One-shot check of `host` with default settings
pub async fn is_up(host: &str) -> bool {
    match StatusChecker::new(host) {
        Ok(checker) => checker.fetch_status().await,
        Err(e) => {
            debug!(host = %host, error = %e, "Could not build status request");
            false
        }
    }
}
