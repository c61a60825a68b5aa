use reqwest::{Method, StatusCode};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{method} {path} failed to reach the server: {source}")]
    Transport {
        method: Method,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {path} returned {status}: {body}")]
    Status {
        method: Method,
        path: String,
        status: StatusCode,
        body: String,
    },

    #[error("{method} {path} returned a body that does not match the declared type: {message}")]
    Decode {
        method: Method,
        path: String,
        message: String,
    },
}

impl ApiError {
    /// HTTP status of a rejected call. Diagnostic only.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
