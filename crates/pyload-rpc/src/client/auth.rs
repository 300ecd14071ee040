//! Login.

use pyload_core::RpcResult;
use serde_json::Value;

use super::RpcClient;
use crate::http::HttpBackend;
use crate::request::RpcRequest;
use crate::session::cookie_pair;

impl<B: HttpBackend> RpcClient<B> {
    /// Log in and store the session cookie.
    ///
    /// `Ok(true)` once a cookie is stored. `Ok(false)` when the server
    /// answered without a cookie or with a JSON `false`. Transport and
    /// status failures are errors.
    pub async fn login(&self, username: &str, password: &str) -> RpcResult<bool> {
        let request = RpcRequest::new("login")
            .kwarg("username", username)
            .kwarg("password", password);
        let response = self.send(&request).await?;

        if serde_json::from_str::<Value>(&response.body).is_ok_and(|v| v == Value::Bool(false)) {
            tracing::warn!(username, "Login rejected by server");
            return Ok(false);
        }

        match response.set_cookies.first().and_then(|c| cookie_pair(c)) {
            Some(cookie) => {
                self.inner.session.store(cookie);
                tracing::info!(username, "Logged in");
                Ok(true)
            }
            None => {
                tracing::warn!(username, "Login response carried no session cookie");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::client;
    use crate::http::HttpResponse;
    use crate::http::testing::{FakeBackend, FakeReply};
    use crate::routing::Verb;
    use pyload_core::{ErrorCategory, SessionState};
    use serde_json::json;

    fn login_reply(set_cookies: &[&str], body: &str) -> FakeReply {
        FakeReply::Response(HttpResponse {
            status: 200,
            set_cookies: set_cookies.iter().map(ToString::to_string).collect(),
            body: body.to_string(),
        })
    }

    #[tokio::test]
    async fn test_login_stores_cookie() {
        let backend = FakeBackend::new()
            .with_reply(
                "/api/login",
                login_reply(&["session=abc123; Path=/; HttpOnly", "other=1"], "true"),
            )
            .with_json("/api/get_queue", json!([]));
        let client = client(&backend);

        assert!(client.login("pyload", "pyload").await.unwrap());
        assert_eq!(client.cookie().as_deref(), Some("session=abc123"));
        assert_eq!(client.session_state(), SessionState::Authenticated);

        let login = backend.last_request().unwrap();
        assert_eq!(login.verb, Verb::Post);
        assert!(login.cookie.is_none());
        assert_eq!(login.form.as_deref(), Some("username=pyload&password=pyload"));
        assert_eq!(login.url.query(), None);

        client.get_queue().await.unwrap();
        let next = backend.last_request().unwrap();
        assert_eq!(next.cookie.as_deref(), Some("session=abc123"));
    }

    #[tokio::test]
    async fn test_login_without_cookie_fails() {
        let backend = FakeBackend::new().with_reply("/api/login", login_reply(&[], "true"));
        let client = client(&backend);

        assert!(!client.login("pyload", "wrong").await.unwrap());
        assert!(client.cookie().is_none());
        assert_eq!(client.session_state(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_login_false_body_ignores_cookie() {
        let backend = FakeBackend::new()
            .with_reply("/api/login", login_reply(&["session=anon"], "false"));
        let client = client(&backend);

        assert!(!client.login("pyload", "wrong").await.unwrap());
        assert!(client.cookie().is_none());
    }

    #[tokio::test]
    async fn test_login_transport_error() {
        let backend = FakeBackend::new().with_reply("/api/login", FakeReply::Refused);
        let err = client(&backend).login("pyload", "pyload").await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::ConnectionRefused);
    }

    #[tokio::test]
    async fn test_no_cookie_before_login() {
        let backend = FakeBackend::new().with_json("/api/get_queue", json!([]));
        client(&backend).get_queue().await.unwrap();
        assert!(backend.last_request().unwrap().cookie.is_none());
    }
}
