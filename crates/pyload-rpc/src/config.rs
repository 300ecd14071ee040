//! Public configuration for the RPC client.

use std::time::Duration;

/// Configuration for the RPC client.
///
/// # Example
///
/// ```
/// use pyload_rpc::RpcClientConfig;
/// use std::time::Duration;
///
/// let config = RpcClientConfig::new()
///     .with_base_url("http://192.168.1.10:8000")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct RpcClientConfig {
    /// Server root, without the `api`/`json` namespace segment
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout; `None` leaves it to the transport
    pub(crate) timeout: Option<Duration>,
}

impl Default for RpcClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://[::1]:8000".to_string(),
            user_agent: concat!("pyload-rpc/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl RpcClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server root.
    ///
    /// Defaults to `http://[::1]:8000`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout. No timeout is applied by default.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub const fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured server root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
