pub mod colors;
pub mod error;
pub mod output;
pub mod status;

pub use error::{IsItUpError, Result};

pub use output::{OutputFormat, OutputFormatter};
pub use status::{
    is_up, CheckOutcome, CheckReport, CheckerConfig, SiteStatus, StatusChecker, StatusResponse,
};
