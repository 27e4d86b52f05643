use thiserror::Error;

#[derive(Error, Debug)]
pub enum IsItUpError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Timeout: {0}")]
    Timeout(String),
}

impl IsItUpError {
    /// True for failures that happened on the wire rather than while decoding.
    pub fn is_network(&self) -> bool {
        match self {
            IsItUpError::HttpError(e) => !e.is_decode(),
            IsItUpError::Timeout(_) => true,
            IsItUpError::InvalidRequest(_) | IsItUpError::JsonError(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, IsItUpError>;
