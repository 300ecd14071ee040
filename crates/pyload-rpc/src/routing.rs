//! Static method routing.
//!
//! Which HTTP verb and which API namespace a method uses is decided by two
//! explicit allow-lists. Names are never guessed from patterns.

use std::fmt;

/// Methods sent as `POST` with a form body. Everything else is `GET`.
pub const POST_METHODS: &[&str] = &["login"];

/// Methods served under the lightweight `json` namespace.
pub const JSON_NAMESPACE_METHODS: &[&str] = &["status", "links"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
}

/// First path segment after the server root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Api,
    Json,
}

impl Namespace {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub verb: Verb,
    pub namespace: Namespace,
}

/// Look up the route for `method`.
#[must_use]
pub fn route(method: &str) -> Route {
    let verb = if POST_METHODS.contains(&method) {
        Verb::Post
    } else {
        Verb::Get
    };
    let namespace = if JSON_NAMESPACE_METHODS.contains(&method) {
        Namespace::Json
    } else {
        Namespace::Api
    };
    Route { verb, namespace }
}
