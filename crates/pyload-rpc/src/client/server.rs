//! Server status polling and download control.

use pyload_core::{ActiveLinks, RpcResult, ServerStatus};

use super::RpcClient;
use crate::http::HttpBackend;
use crate::request::RpcRequest;

impl<B: HttpBackend> RpcClient<B> {
    /// `json/status` snapshot.
    pub async fn status(&self) -> RpcResult<ServerStatus> {
        self.invoke_as(RpcRequest::new("status")).await
    }

    /// `json/links`: transfers in progress.
    pub async fn links(&self) -> RpcResult<ActiveLinks> {
        self.invoke_as(RpcRequest::new("links")).await
    }

    pub async fn pause_server(&self) -> RpcResult<()> {
        self.invoke_unit(RpcRequest::new("pause_server")).await
    }

    pub async fn unpause_server(&self) -> RpcResult<()> {
        self.invoke_unit(RpcRequest::new("unpause_server")).await
    }

    pub async fn stop_all_downloads(&self) -> RpcResult<()> {
        self.invoke_unit(RpcRequest::new("stop_all_downloads")).await
    }

    pub async fn restart_failed(&self) -> RpcResult<()> {
        self.invoke_unit(RpcRequest::new("restart_failed")).await
    }
}
