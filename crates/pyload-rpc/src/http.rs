//! HTTP backend abstraction.
//!
//! The client talks to the network only through [`HttpBackend`], so tests
//! can swap in a recording fake. The production implementation uses reqwest
//! and classifies transport failures into the categories callers branch on.

use async_trait::async_trait;
use std::error::Error as StdError;
use url::Url;

use crate::config::RpcClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::routing::Verb;

/// A fully built request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub verb: Verb,
    pub url: Url,
    /// `Cookie` header value, if a session is held.
    pub cookie: Option<String>,
    /// Form-urlencoded body for `POST`.
    pub form: Option<String>,
}

/// What the client needs from a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Raw `Set-Cookie` header values, in order.
    pub set_cookies: Vec<String>,
    pub body: String,
}

impl HttpResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends one request and returns the response, whatever its status.
///
/// Only transport failures are errors here; status handling is left to
/// the client.
#[async_trait]
pub trait HttpBackend: Send + Sync + 'static {
    async fn execute(&self, request: &HttpRequest) -> ClientResult<HttpResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &RpcClientConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ClientError::Network {
            message: format!("failed to create HTTP client: {e}"),
        })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: &HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder = match request.verb {
            Verb::Get => self.client.get(request.url.clone()),
            Verb::Post => self.client.post(request.url.clone()),
        };
        if let Some(cookie) = &request.cookie {
            builder = builder.header(reqwest::header::COOKIE, cookie);
        }
        if let Some(form) = &request.form {
            builder = builder
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(form.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| classify(&e, request.url.as_str()))?;

        let status = response.status().as_u16();
        let set_cookies = response
            .headers()
            .get_all(reqwest::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| classify(&e, request.url.as_str()))?;

        Ok(HttpResponse {
            status,
            set_cookies,
            body,
        })
    }
}

/// Map a reqwest failure onto a transport category.
fn classify(err: &reqwest::Error, url: &str) -> ClientError {
    let url = url.to_string();
    if err.is_timeout() {
        return ClientError::Timeout { url };
    }

    let chain = error_chain(err);
    let refused = source_chain(err).any(|source| {
        source
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::ConnectionRefused)
    });
    if refused || chain.contains("Connection refused") || chain.contains("connection refused") {
        return ClientError::ConnectionRefused { url };
    }
    if chain.contains("dns error") || chain.contains("failed to lookup address") {
        return ClientError::HostNotFound { url };
    }
    ClientError::Network { message: chain }
}

fn source_chain<'a>(err: &'a (dyn StdError + 'static)) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

/// Render an error with all of its sources, `outer: inner: ...`.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    source_chain(err)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
