//! Request descriptor for a single remote call.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::routing::{Route, route};

/// A method name with its positional and keyword arguments.
///
/// ```
/// use pyload_rpc::RpcRequest;
///
/// let request = RpcRequest::new("add_package")
///     .kwarg("name", "Holiday")
///     .kwarg("links", vec!["http://x/y.zip"]);
/// assert_eq!(request.method(), "add_package");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RpcRequest {
    method: String,
    args: Vec<String>,
    kwargs: Vec<(String, Value)>,
    /// First argument that failed to serialize; reported when sent.
    rejected: Option<String>,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Vec::new(),
            kwargs: Vec::new(),
            rejected: None,
        }
    }

    /// Append a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl ToString) -> Self {
        self.args.push(value.to_string());
        self
    }

    #[must_use]
    pub fn args<I, T>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.args.extend(values.into_iter().map(|v| v.to_string()));
        self
    }

    /// Append a keyword argument. Insertion order is kept on the wire.
    #[must_use]
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.push((key.into(), value.into()));
        self
    }

    /// Append a keyword argument from any serializable value.
    ///
    /// A serialization failure is kept and surfaces as an invalid request
    /// when the request is sent.
    #[must_use]
    pub fn try_kwarg<T: Serialize + ?Sized>(mut self, key: impl Into<String>, value: &T) -> Self {
        let key = key.into();
        match serde_json::to_value(value) {
            Ok(value) => self.kwargs.push((key, value)),
            Err(e) => {
                if self.rejected.is_none() {
                    self.rejected = Some(format!("argument '{key}': {e}"));
                }
            }
        }
        self
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn positional(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn keywords(&self) -> &[(String, Value)] {
        &self.kwargs
    }

    #[must_use]
    pub fn route(&self) -> Route {
        route(&self.method)
    }

    /// Reject requests that cannot be put on the wire unambiguously.
    pub(crate) fn validate(&self) -> ClientResult<()> {
        if let Some(reason) = &self.rejected {
            return Err(ClientError::invalid_request(reason.clone()));
        }
        if self.method.is_empty() {
            return Err(ClientError::invalid_request("empty method name"));
        }
        if !self
            .method
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ClientError::invalid_request(format!(
                "invalid method name: {}",
                self.method
            )));
        }
        if let Some(arg) = self.args.iter().find(|a| a.contains(',')) {
            return Err(ClientError::invalid_request(format!(
                "positional argument contains ',': {arg}"
            )));
        }
        Ok(())
    }
}
