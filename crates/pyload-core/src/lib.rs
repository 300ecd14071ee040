//! Domain types, port traits and client-side services for talking to a
//! pyLoad download server.
//!
//! This crate holds no HTTP code. The `pyload-rpc` crate implements the
//! ports over the server's HTTP API; front-ends depend on the ports only.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod local_config;
pub mod ports;
pub mod services;

pub use domain::{
    AccountInfo, ActiveLink, ActiveLinks, ConfigItem, ConfigScope, ConfigSection, ConfigTree,
    ConfigType, Destination, FileId, FullConfig, Link, LinkStatus, Package, PackageId,
    ServerStatus, StatusFilter, UserData, UserTable, ValidationError, extract_links, format_size,
};
pub use local_config::{LocalConfig, LocalConfigError, LocalValue};
pub use ports::{
    ConfigPort, ErrorCategory, PyLoadPort, QueuePort, RpcError, RpcResult, ServerPort,
    SessionPort, SessionState,
};
pub use services::{ApplyReport, ChangeKey, ConfigEditor};
