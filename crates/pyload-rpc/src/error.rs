//! Internal error types for RPC operations.
//!
//! These errors are internal to `pyload-rpc` and are mapped to the core
//! [`RpcError`] at the boundary, so every caller sees one error type.

use pyload_core::RpcError;
use thiserror::Error;

/// Result type alias for internal client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Failures raised while building, sending or decoding a request.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Connection refused: {url}")]
    ConnectionRefused { url: String },

    #[error("Host not found: {url}")]
    HostNotFound { url: String },

    #[error("Request timed out: {url}")]
    Timeout { url: String },

    /// Any other transport failure.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Server answered with a non-success status.
    #[error("Request failed with status {status}: {url}")]
    Status {
        status: u16,
        url: String,
        body: Option<String>,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("No async runtime: {message}")]
    Runtime { message: String },
}

impl ClientError {
    pub(crate) fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

impl From<ClientError> for RpcError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ConnectionRefused { url } => Self::ConnectionRefused { url },
            ClientError::HostNotFound { url } => Self::HostNotFound { url },
            ClientError::Timeout { url } => Self::Timeout { url },
            ClientError::Network { message } => Self::Network { message },
            ClientError::Status { status, url, body } => Self::Status { status, url, body },
            ClientError::InvalidUrl(e) => Self::InvalidRequest {
                message: e.to_string(),
            },
            ClientError::Json(e) => Self::Decode {
                message: e.to_string(),
            },
            ClientError::InvalidRequest { message } => Self::InvalidRequest { message },
            ClientError::Runtime { message } => Self::Runtime { message },
        }
    }
}
