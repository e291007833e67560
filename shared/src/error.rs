use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the search service on 4xx/5xx.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("failed to build search request: {0}")]
    Request(String),
    #[error("search service unreachable: {0}")]
    Transport(String),
    #[error("search request timed out")]
    Timeout,
    #[error("search service returned HTTP {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid search response: {0}")]
    Decode(String),
}

impl SearchError {
    /// Message forwarded by the service, if it sent one.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}
