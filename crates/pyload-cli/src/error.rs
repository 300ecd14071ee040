//! CLI-specific error types and mappings.
//!
//! Maps port and local-config failures to exit codes and user-facing
//! messages.

use pyload_core::{ErrorCategory, LocalConfigError, RpcError, ValidationError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The server could not be reached.
    #[error("Cannot reach server: {0}")]
    Connection(String),

    /// Login was rejected or the session expired.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The server answered, but not with what was expected.
    #[error("Server error: {0}")]
    Server(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// A configuration value was rejected before sending.
    #[error("Invalid value: {0}")]
    Validation(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Local settings error.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Internal(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Internal(_) => 1,
            Self::Arguments(_) => 2,   // EX_USAGE
            Self::Validation(_) => 65, // EX_DATAERR
            Self::Connection(_) => 69, // EX_UNAVAILABLE
            Self::Io(_) => 74,         // EX_IOERR
            Self::Server(_) => 76,     // EX_PROTOCOL
            Self::Auth(_) => 77,       // EX_NOPERM
            Self::Config(_) => 78,     // EX_CONFIG
        }
    }
}

impl From<RpcError> for CliError {
    fn from(err: RpcError) -> Self {
        let message = match err.server_detail() {
            Some(detail) => format!("{err}\n{detail}"),
            None => err.to_string(),
        };
        match err.category() {
            ErrorCategory::ConnectionRefused
            | ErrorCategory::HostNotFound
            | ErrorCategory::Timeout
            | ErrorCategory::Network => Self::Connection(message),
            ErrorCategory::Unauthorized => Self::Auth(message),
            ErrorCategory::NotFound
            | ErrorCategory::ServerError
            | ErrorCategory::Protocol
            | ErrorCategory::Decode => Self::Server(message),
            ErrorCategory::InvalidRequest => Self::Arguments(message),
            ErrorCategory::Internal => Self::Internal(message),
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<LocalConfigError> for CliError {
    fn from(err: LocalConfigError) -> Self {
        match err {
            LocalConfigError::Io { .. } => Self::Io(err.to_string()),
            _ => Self::Config(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error bubbled up from a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    if let Some(rpc) = err.downcast_ref::<RpcError>() {
        return CliError::from(rpc.clone()).exit_code();
    }
    if let Some(validation) = err.downcast_ref::<ValidationError>() {
        return CliError::from(validation.clone()).exit_code();
    }
    if let Some(local) = err.downcast_ref::<LocalConfigError>() {
        return match local {
            LocalConfigError::Io { .. } => 74,
            _ => 78,
        };
    }
    1
}
