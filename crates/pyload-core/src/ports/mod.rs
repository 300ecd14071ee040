//! Port definitions (trait abstractions) for the remote pyLoad server.
//!
//! Ports define what the rest of the application expects from the server.
//! They use only domain types; the HTTP implementation lives in `pyload-rpc`.
//!
//! # Design Rules
//!
//! - No HTTP or JSON types in any signature
//! - Every failure is an [`RpcError`] value
//! - One trait per concern so consumers can depend on the narrowest one

mod config;
mod error;
mod queue;
mod server;
mod session;

pub use config::ConfigPort;
#[cfg(test)]
pub use config::MockConfigPort;
pub use error::{ErrorCategory, RpcError, RpcResult};
pub use queue::QueuePort;
pub use server::ServerPort;
pub use session::{SessionPort, SessionState};

/// Everything a front-end needs from the server.
pub trait PyLoadPort: SessionPort + QueuePort + ServerPort + ConfigPort {}

impl<T: SessionPort + QueuePort + ServerPort + ConfigPort> PyLoadPort for T {}
