//! Error types for pyLoad port operations.

use thiserror::Error;

/// Result type alias for pyLoad port operations.
pub type RpcResult<T> = Result<T, RpcError>;

/// Failure of a single remote call.
///
/// Every failure is delivered as a value, never raised past the client.
/// Callers branch on [`RpcError::category`] rather than on the variant when
/// they only care about the kind of failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpcError {
    /// The server actively refused the connection.
    #[error("Connection refused: {url}")]
    ConnectionRefused { url: String },

    /// The host name could not be resolved.
    #[error("Host not found: {url}")]
    HostNotFound { url: String },

    /// The transport gave up waiting for a response.
    #[error("Request timed out: {url}")]
    Timeout { url: String },

    /// Any other transport failure.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success HTTP status.
    #[error("Server returned {status} for {url}")]
    Status {
        status: u16,
        url: String,
        /// Response body, usually carrying the server-side exception.
        body: Option<String>,
    },

    /// The response body was not the expected JSON.
    #[error("Invalid response: {message}")]
    Decode { message: String },

    /// The request could not be built (bad method name, argument, URL).
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// No async runtime was available to run the request.
    #[error("Runtime error: {message}")]
    Runtime { message: String },
}

/// Coarse failure kind, stable across variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    ConnectionRefused,
    HostNotFound,
    Timeout,
    Network,
    /// 401 or 403: the session is missing or expired.
    Unauthorized,
    NotFound,
    /// 5xx.
    ServerError,
    /// Any other non-success status.
    Protocol,
    Decode,
    InvalidRequest,
    Internal,
}

impl RpcError {
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ConnectionRefused { .. } => ErrorCategory::ConnectionRefused,
            Self::HostNotFound { .. } => ErrorCategory::HostNotFound,
            Self::Timeout { .. } => ErrorCategory::Timeout,
            Self::Network { .. } => ErrorCategory::Network,
            Self::Status { status, .. } => match *status {
                401 | 403 => ErrorCategory::Unauthorized,
                404 => ErrorCategory::NotFound,
                500..=599 => ErrorCategory::ServerError,
                _ => ErrorCategory::Protocol,
            },
            Self::Decode { .. } => ErrorCategory::Decode,
            Self::InvalidRequest { .. } => ErrorCategory::InvalidRequest,
            Self::Runtime { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether the failure happened before the server produced a response.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::ConnectionRefused
                | ErrorCategory::HostNotFound
                | ErrorCategory::Timeout
                | ErrorCategory::Network
        )
    }

    /// Server-side detail attached to a status error, if any.
    #[must_use]
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}
