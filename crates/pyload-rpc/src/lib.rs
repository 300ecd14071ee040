//! HTTP RPC client for a pyLoad download server.
//!
//! Every remote operation is addressed by name. A static routing table picks
//! the HTTP verb and API namespace, [`RpcRequest`] carries the positional and
//! keyword arguments, and [`DefaultRpcClient`] sends it with the session
//! cookie attached.
//!
//! ```no_run
//! use pyload_rpc::{DefaultRpcClient, RpcClientConfig};
//!
//! # async fn run() -> pyload_core::RpcResult<()> {
//! let client = DefaultRpcClient::new(&RpcClientConfig::new().with_base_url("http://127.0.0.1:8000"))?;
//! if client.login("pyload", "pyload").await? {
//!     for package in client.get_queue().await? {
//!         println!("{} {:.1}%", package.name, package.progress_percent());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Callback-style use goes through [`DefaultRpcClient::call`] and
//! [`DefaultRpcClient::callbacks`]; completions can be handed to a
//! [`CallbackLoop`] so they run on the thread that owns the UI state.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// RpcClient<B> is used through DefaultRpcClient and the core port traits;
// the backend parameter is an implementation detail
#![allow(private_interfaces, private_bounds)]

mod callbacks;
mod client;
mod config;
mod dispatch;
mod error;
mod http;
mod port;
mod request;
mod routing;
mod session;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use callbacks::Callbacks;
pub use client::{DefaultRpcClient, RpcClient};

// Configuration
pub use config::RpcClientConfig;

// Requests and routing
pub use request::RpcRequest;
pub use routing::{JSON_NAMESPACE_METHODS, Namespace, POST_METHODS, Route, Verb, route};

// Callback delivery
pub use dispatch::{CallbackLoop, Delivery};

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
#[cfg(test)]
use tokio_test as _;
