//! Site status checking against isitup.org
//!
//! The service probes a host on our behalf and answers with a small JSON
//! document; this module builds the request, decodes the answer and maps its
//! status code to up or down.

mod client;
mod config;
mod types;

pub use client::{is_up, StatusChecker};
pub use config::{
    CheckerConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT,
};
pub use types::{CheckOutcome, CheckReport, SiteStatus, StatusResponse};
