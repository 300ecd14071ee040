//! Server status and download control port.

use async_trait::async_trait;

use super::error::RpcResult;
use crate::domain::{ActiveLinks, ServerStatus};

/// Port trait for polling the server and toggling downloads.
#[async_trait]
pub trait ServerPort: Send + Sync {
    /// Lightweight status snapshot.
    async fn status(&self) -> RpcResult<ServerStatus>;

    /// Links currently being transferred.
    async fn active_links(&self) -> RpcResult<ActiveLinks>;

    /// Stop starting new downloads.
    async fn pause_server(&self) -> RpcResult<()>;

    /// Resume starting downloads.
    async fn unpause_server(&self) -> RpcResult<()>;

    /// Abort every running download.
    async fn stop_all_downloads(&self) -> RpcResult<()>;

    /// Requeue every failed link.
    async fn restart_failed(&self) -> RpcResult<()>;
}
