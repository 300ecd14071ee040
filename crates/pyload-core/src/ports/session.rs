//! Authentication port.

use async_trait::async_trait;

use super::error::RpcResult;

/// Whether the client currently holds a session cookie.
///
/// There is no transition back to `Unauthenticated`: an expired session
/// only shows up as requests failing with
/// [`ErrorCategory::Unauthorized`](super::ErrorCategory::Unauthorized).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

/// Port trait for logging in to the server.
#[async_trait]
pub trait SessionPort: Send + Sync {
    /// Log in with form credentials.
    ///
    /// Returns `Ok(true)` once a session cookie has been stored, `Ok(false)`
    /// when the server answered without issuing one (rejected credentials),
    /// and `Err` for transport or protocol failures.
    async fn login(&self, username: &str, password: &str) -> RpcResult<bool>;

    /// Current session state.
    fn session_state(&self) -> SessionState;
}
