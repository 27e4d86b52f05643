use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const STATUS_SUCCESS: i64 = 1;
const STATUS_DOWN: i64 = 2;
const STATUS_INVALID_DOMAIN: i64 = 3;

/// Response returned by isitup.org for a single host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// The host as echoed back by the service
    pub domain: String,
    /// Port the service probed
    pub port: u16,
    /// Tri-state result code (1 = up, 2 = down, 3 = invalid domain)
    pub status_code: i64,
    /// Resolved IP address of the target
    pub response_ip: String,
    /// HTTP status code the service saw when probing the target
    pub response_code: u16,
    /// Probe latency in seconds
    pub response_time: f64,
}

/// Typed view of the service's `status_code`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteStatus {
    Up,
    Down,
    InvalidDomain,
    Unknown(i64),
}

impl From<i64> for SiteStatus {
    fn from(code: i64) -> Self {
        match code {
            STATUS_SUCCESS => SiteStatus::Up,
            STATUS_DOWN => SiteStatus::Down,
            STATUS_INVALID_DOMAIN => SiteStatus::InvalidDomain,
            other => SiteStatus::Unknown(other),
        }
    }
}

impl SiteStatus {
    pub fn is_up(&self) -> bool {
        matches!(self, SiteStatus::Up)
    }
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteStatus::Up => write!(f, "up"),
            SiteStatus::Down => write!(f, "down"),
            SiteStatus::InvalidDomain => write!(f, "invalid domain"),
            SiteStatus::Unknown(code) => write!(f, "unknown ({})", code),
        }
    }
}

impl StatusResponse {
    pub fn status(&self) -> SiteStatus {
        SiteStatus::from(self.status_code)
    }

    /// Only an explicit success code counts as up.
    pub fn is_up(&self) -> bool {
        self.status().is_up()
    }
}

/// Fixed multi-line diagnostic block, one `field: value` pair per line.
impl fmt::Display for StatusResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "domain: {}", self.domain)?;
        writeln!(f, "port: {}", self.port)?;
        writeln!(f, "status_code: {}", self.status_code)?;
        writeln!(f, "response_ip: {}", self.response_ip)?;
        writeln!(f, "response_code: {}", self.response_code)?;
        write!(f, "response_time: {:.2}", self.response_time)
    }
}

/// Three-way result of a check.
///
/// `Down` covers both the "down" and "invalid domain" answers from the
/// service; `CheckFailed` means no usable answer was obtained at all.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Up(StatusResponse),
    Down(StatusResponse),
    CheckFailed(String),
}

impl CheckOutcome {
    pub fn is_up(&self) -> bool {
        matches!(self, CheckOutcome::Up(_))
    }

    pub fn response(&self) -> Option<&StatusResponse> {
        match self {
            CheckOutcome::Up(response) | CheckOutcome::Down(response) => Some(response),
            CheckOutcome::CheckFailed(_) => None,
        }
    }
}

impl From<StatusResponse> for CheckOutcome {
    fn from(response: StatusResponse) -> Self {
        if response.is_up() {
            CheckOutcome::Up(response)
        } else {
            CheckOutcome::Down(response)
        }
    }
}

impl<E: fmt::Display> From<std::result::Result<StatusResponse, E>> for CheckOutcome {
    fn from(result: std::result::Result<StatusResponse, E>) -> Self {
        match result {
            Ok(response) => response.into(),
            Err(e) => CheckOutcome::CheckFailed(e.to_string()),
        }
    }
}

/// Serializable record of one check, as printed by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// The host that was checked, as given by the caller
    pub host: String,
    /// When the check finished
    pub checked_at: DateTime<Utc>,
    pub up: bool,
    /// Decoded service response, absent when the check failed
    pub response: Option<StatusResponse>,
    /// Why the check failed, if it did
    pub error: Option<String>,
}

impl CheckReport {
    pub fn new(host: impl Into<String>, outcome: &CheckOutcome) -> Self {
        let error = match outcome {
            CheckOutcome::CheckFailed(reason) => Some(reason.clone()),
            _ => None,
        };

        Self {
            host: host.into(),
            checked_at: Utc::now(),
            up: outcome.is_up(),
            response: outcome.response().cloned(),
            error,
        }
    }
}
