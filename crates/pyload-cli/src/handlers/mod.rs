//! Command handlers that delegate to the server ports.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call a port method
//!   3. Format output for the terminal
//!
//! Input checks that can fail without the server live in small pure
//! functions next to each handler.

pub mod accounts;
pub mod add;
pub mod call;
pub mod config;
pub mod local_config;
pub mod package;
pub mod queue;
pub mod remove;
pub mod server;
