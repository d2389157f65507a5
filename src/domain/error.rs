use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Failure of the HTTP layer while talking to Mayan EDMS.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Failed to encode request body for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to send {method} request to {path}: {source}")]
    Transport {
        method: Method,
        path: String,
        #[source]
        source: reqwest_middleware::Error,
    },
    #[error("{method} {path} returned {status}: {body}")]
    Status {
        method: Method,
        path: String,
        status: StatusCode,
        body: String,
    },
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl RemoteError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error("Expected id format: {expected}, got: {id}")]
    InvalidIdentifier { id: String, expected: &'static str },
}

impl Error {
    pub fn invalid_identifier(id: &str, expected: &'static str) -> Self {
        Error::InvalidIdentifier {
            id: id.to_string(),
            expected,
        }
    }
}
