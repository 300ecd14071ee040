//! Core domain types.
//!
//! These types mirror what the pyLoad server reports and are independent
//! of any transport concerns.
//!
//! # Structure
//!
//! - `package` - Packages, links and their status codes
//! - `server` - Server status, active transfers, accounts and users
//! - `config` - Configuration tree, option types and validation
//! - `links` - Link extraction from pasted text

pub mod config;
mod links;
mod package;
mod server;

pub use config::{
    ConfigItem, ConfigScope, ConfigSection, ConfigTree, ConfigType, FullConfig, ValidationError,
};
pub use links::extract_links;
pub use package::{
    Destination, FileId, Link, LinkStatus, Package, PackageId, StatusFilter, format_size,
};
pub use server::{AccountInfo, ActiveLink, ActiveLinks, ServerStatus, UserData, UserTable};
