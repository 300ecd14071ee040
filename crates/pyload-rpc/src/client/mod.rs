//! RPC client for the pyLoad HTTP API.
//!
//! [`RpcClient::invoke`] is the single generic primitive; the typed methods
//! in the submodules are thin wrappers around it.

mod auth;
mod config;
mod queue;
mod server;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use url::Url;

use pyload_core::{RpcError, RpcResult, SessionState};

use crate::callbacks::Callbacks;
use crate::config::RpcClientConfig;
use crate::dispatch::Delivery;
use crate::error::{ClientError, ClientResult};
use crate::http::{HttpBackend, HttpRequest, HttpResponse, ReqwestBackend};
use crate::request::RpcRequest;
use crate::routing::Verb;
use crate::session::Session;
use crate::url::{build_form, build_url};

/// Longest response body kept on a status error.
const MAX_ERROR_BODY: usize = 1024;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default client using the reqwest HTTP backend.
pub type DefaultRpcClient = RpcClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

struct Inner<B> {
    backend: B,
    base_url: Url,
    session: Session,
}

/// Client for a pyLoad server.
///
/// Cheap to clone; clones share the backend and the session cookie. Use
/// [`DefaultRpcClient`] in production code.
pub struct RpcClient<B: HttpBackend> {
    inner: Arc<Inner<B>>,
    delivery: Delivery,
}

impl<B: HttpBackend> Clone for RpcClient<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            delivery: self.delivery.clone(),
        }
    }
}

impl DefaultRpcClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &RpcClientConfig) -> RpcResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(ClientError::from)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self::from_parts(base_url, backend))
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> RpcResult<Self> {
        Self::new(&RpcClientConfig::default())
    }
}

impl<B: HttpBackend> RpcClient<B> {
    fn from_parts(base_url: Url, backend: B) -> Self {
        Self {
            inner: Arc::new(Inner {
                backend,
                base_url,
                session: Session::default(),
            }),
            delivery: Delivery::default(),
        }
    }

    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) fn with_backend(base_url: &str, backend: B) -> Self {
        Self::from_parts(Url::parse(base_url).unwrap(), backend)
    }

    /// Route completed callbacks through `delivery`.
    #[must_use]
    pub fn with_delivery(mut self, delivery: Delivery) -> Self {
        self.delivery = delivery;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    #[must_use]
    pub fn session_state(&self) -> SessionState {
        self.inner.session.state()
    }

    /// The stored `name=value` session cookie.
    #[must_use]
    pub fn cookie(&self) -> Option<String> {
        self.inner.session.cookie()
    }

    /// Callback-style access to the named methods.
    #[must_use]
    pub const fn callbacks(&self) -> Callbacks<'_, B> {
        Callbacks::new(self)
    }

    /// Build and send `request`, failing on non-success statuses.
    async fn send(&self, request: &RpcRequest) -> ClientResult<HttpResponse> {
        let url = build_url(&self.inner.base_url, request)?;
        let verb = request.route().verb;
        let http_request = HttpRequest {
            verb,
            url,
            cookie: self.inner.session.cookie(),
            form: (verb == Verb::Post).then(|| build_form(request)),
        };

        tracing::debug!(
            method = request.method(),
            verb = %verb,
            url = %http_request.url,
            "Sending RPC request"
        );

        let response = self.inner.backend.execute(&http_request).await;
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(method = request.method(), error = %e, "RPC transport failure");
                return Err(e);
            }
        };

        if !response.is_success() {
            let body = truncate_body(&response.body);
            tracing::warn!(
                method = request.method(),
                status = response.status,
                body = body.as_deref().unwrap_or(""),
                "RPC request failed"
            );
            return Err(ClientError::Status {
                status: response.status,
                url: http_request.url.to_string(),
                body,
            });
        }
        Ok(response)
    }

    /// Send `request` and decode the body as JSON.
    pub async fn invoke(&self, request: RpcRequest) -> RpcResult<Value> {
        let response = self.send(&request).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!(method = request.method(), error = %e, "Response is not JSON");
            RpcError::Decode {
                message: format!("{}: {e}", request.method()),
            }
        })
    }

    /// Send `request` and decode the body into `T`.
    pub async fn invoke_as<T: DeserializeOwned>(&self, request: RpcRequest) -> RpcResult<T> {
        let method = request.method().to_string();
        let value = self.invoke(request).await?;
        serde_json::from_value(value).map_err(|e| RpcError::Decode {
            message: format!("{method}: {e}"),
        })
    }

    /// Send `request` and discard the (usually `null`) result.
    pub(crate) async fn invoke_unit(&self, request: RpcRequest) -> RpcResult<()> {
        self.invoke(request).await.map(|_| ())
    }

    /// Send `request` in the background and pass the result to `callback`.
    ///
    /// Returns immediately. `callback` runs exactly once, through this
    /// client's [`Delivery`]. Without a tokio runtime it runs right away
    /// with [`RpcError::Runtime`].
    pub fn call<F>(&self, request: RpcRequest, callback: F)
    where
        F: FnOnce(RpcResult<Value>) + Send + 'static,
    {
        let client = self.clone();
        self.spawn(async move { client.invoke(request).await }, callback);
    }

    /// Run `future` on the ambient runtime and deliver its output.
    ///
    /// `callback` runs exactly once, with [`RpcError::Runtime`] if the
    /// future panics.
    pub(crate) fn spawn<T, Fut, F>(&self, future: Fut, callback: F)
    where
        T: Send + 'static,
        Fut: Future<Output = RpcResult<T>> + Send + 'static,
        F: FnOnce(RpcResult<T>) + Send + 'static,
    {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let delivery = self.delivery.clone();
                let worker = handle.clone();
                handle.spawn(async move {
                    // A panicking request still resolves its callback
                    let result = match worker.spawn(future).await {
                        Ok(result) => result,
                        Err(e) => {
                            tracing::warn!(error = %e, "Callback call task failed");
                            Err(ClientError::Runtime {
                                message: e.to_string(),
                            }
                            .into())
                        }
                    };
                    delivery.deliver(Box::new(move || callback(result)));
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "No tokio runtime for callback call");
                callback(Err(ClientError::Runtime {
                    message: e.to_string(),
                }
                .into()));
            }
        }
    }
}

fn truncate_body(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    Some(body.chars().take(MAX_ERROR_BODY).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::CallbackLoop;
    use crate::http::testing::{FakeBackend, FakeReply};
    use pyload_core::ErrorCategory;
    use serde_json::json;
    use std::sync::Mutex;

    pub(super) const BASE: &str = "http://[::1]:8000";

    pub(super) fn client(backend: &FakeBackend) -> RpcClient<FakeBackend> {
        RpcClient::with_backend(BASE, backend.clone())
    }

    #[test]
    fn test_default_client_creation() {
        let client = DefaultRpcClient::default_client().unwrap();
        assert_eq!(client.base_url().as_str(), "http://[::1]:8000/");
        assert_eq!(client.session_state(), SessionState::Unauthenticated);
    }

    #[test]
    fn test_invalid_base_url() {
        let config = RpcClientConfig::new().with_base_url("not a url");
        let err = DefaultRpcClient::new(&config).err().unwrap();
        assert_eq!(err.category(), ErrorCategory::InvalidRequest);
    }

    #[tokio::test]
    async fn test_invoke_decodes_json() {
        let backend = FakeBackend::new().with_json("/api/get_server_version", json!("0.5.0"));
        let value = client(&backend)
            .invoke(RpcRequest::new("get_server_version"))
            .await
            .unwrap();
        assert_eq!(value, json!("0.5.0"));

        let request = backend.last_request().unwrap();
        assert_eq!(request.verb, Verb::Get);
        assert!(request.cookie.is_none());
        assert!(request.form.is_none());
    }

    #[tokio::test]
    async fn test_invoke_status_error_keeps_body() {
        let backend = FakeBackend::new().with_reply(
            "get_queue",
            FakeReply::status(500, "Traceback: KeyError 'pid'"),
        );
        let err = client(&backend)
            .invoke(RpcRequest::new("get_queue"))
            .await
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::ServerError);
        assert_eq!(err.server_detail(), Some("Traceback: KeyError 'pid'"));
    }

    #[tokio::test]
    async fn test_invoke_non_json_is_decode_error() {
        let backend = FakeBackend::new()
            .with_reply("get_queue", FakeReply::status(200, "<html>login</html>"));
        let err = client(&backend)
            .invoke(RpcRequest::new("get_queue"))
            .await
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Decode);
    }

    #[tokio::test]
    async fn test_invoke_empty_body_is_decode_error() {
        let backend = FakeBackend::new().with_reply("pause_server", FakeReply::status(200, ""));
        let err = client(&backend)
            .invoke(RpcRequest::new("pause_server"))
            .await
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Decode);
    }

    #[tokio::test]
    async fn test_invoke_as_shape_mismatch() {
        let backend = FakeBackend::new().with_json("get_queue", json!({"not": "a list"}));
        let result: RpcResult<Vec<pyload_core::Package>> =
            client(&backend).invoke_as(RpcRequest::new("get_queue")).await;
        assert_eq!(result.unwrap_err().category(), ErrorCategory::Decode);
    }

    #[tokio::test]
    async fn test_invalid_request_never_sent() {
        let backend = FakeBackend::new();
        let err = client(&backend)
            .invoke(RpcRequest::new("set_config_value").arg("a,b"))
            .await
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::InvalidRequest);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_category() {
        let backend = FakeBackend::new().with_reply("get_queue", FakeReply::Refused);
        let err = client(&backend)
            .invoke(RpcRequest::new("get_queue"))
            .await
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::ConnectionRefused);
    }

    #[tokio::test]
    async fn test_call_fires_callback_once() {
        let backend = FakeBackend::new().with_json("get_queue", json!([]));
        let (tx, rx) = tokio::sync::oneshot::channel();
        client(&backend).call(RpcRequest::new("get_queue"), move |result| {
            let _ = tx.send(result);
        });
        assert_eq!(rx.await.unwrap().unwrap(), json!([]));
    }

    #[test]
    fn test_call_without_runtime_reports_error() {
        let backend = FakeBackend::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        client(&backend).call(RpcRequest::new("get_queue"), move |result| {
            sink.lock().unwrap().push(result);
        });

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].as_ref().unwrap_err().category(),
            ErrorCategory::Internal
        );
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_panicking_call_still_reports() {
        let backend = FakeBackend::new();
        let (tx, rx) = tokio::sync::oneshot::channel();
        let fail = true;
        client(&backend).spawn(
            async move {
                if fail {
                    panic!("decode blew up");
                }
                Ok::<Value, RpcError>(Value::Null)
            },
            move |result: RpcResult<Value>| {
                let _ = tx.send(result);
            },
        );

        let err = rx.await.unwrap().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[tokio::test]
    async fn test_call_through_callback_loop() {
        let backend = FakeBackend::new().with_json("get_queue", json!([]));
        let mut callbacks = CallbackLoop::new();
        let client = client(&backend).with_delivery(callbacks.delivery());

        let seen = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&seen);
        client.call(RpcRequest::new("get_queue"), move |result| {
            assert!(result.is_ok());
            *sink.lock().unwrap() += 1;
        });

        callbacks.run_next().await;
        assert_eq!(*seen.lock().unwrap(), 1);
        assert_eq!(callbacks.run_pending(), 0);
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("  "), None);
        let long = "x".repeat(MAX_ERROR_BODY * 2);
        assert_eq!(truncate_body(&long).unwrap().len(), MAX_ERROR_BODY);
    }
}
