//! Core port implementations for `RpcClient`.
//!
//! Front-ends hold an `Arc<dyn PyLoadPort>`; these impls forward to the
//! client's inherent methods.

use async_trait::async_trait;
use pyload_core::{
    AccountInfo, ActiveLinks, ConfigPort, ConfigScope, ConfigTree, FileId, FullConfig, Package,
    PackageId, QueuePort, RpcResult, ServerPort, ServerStatus, SessionPort, SessionState,
    UserTable,
};
use std::collections::BTreeMap;

use crate::client::RpcClient;
use crate::http::HttpBackend;

#[async_trait]
impl<B: HttpBackend> SessionPort for RpcClient<B> {
    async fn login(&self, username: &str, password: &str) -> RpcResult<bool> {
        Self::login(self, username, password).await
    }

    fn session_state(&self) -> SessionState {
        Self::session_state(self)
    }
}

#[async_trait]
impl<B: HttpBackend> QueuePort for RpcClient<B> {
    async fn get_queue(&self) -> RpcResult<Vec<Package>> {
        Self::get_queue(self).await
    }

    async fn get_queue_and_collector(&self) -> RpcResult<Vec<Package>> {
        Self::get_queue_and_collector(self).await
    }

    async fn get_package_data(&self, id: PackageId) -> RpcResult<Package> {
        Self::get_package_data(self, id).await
    }

    async fn add_package(
        &self,
        name: &str,
        links: &[String],
        password: Option<&str>,
    ) -> RpcResult<PackageId> {
        Self::add_package(self, name, links, password).await
    }

    async fn delete_files(&self, ids: &[FileId]) -> RpcResult<()> {
        Self::delete_files(self, ids).await
    }

    async fn delete_unfinished_links(&self, package_ids: &[PackageId]) -> RpcResult<u64> {
        Self::delete_unfinished_links(self, package_ids).await
    }

    async fn set_package_data(
        &self,
        id: PackageId,
        data: &BTreeMap<String, String>,
    ) -> RpcResult<()> {
        Self::set_package_data(self, id, data).await
    }
}

#[async_trait]
impl<B: HttpBackend> ServerPort for RpcClient<B> {
    async fn status(&self) -> RpcResult<ServerStatus> {
        Self::status(self).await
    }

    async fn active_links(&self) -> RpcResult<ActiveLinks> {
        self.links().await
    }

    async fn pause_server(&self) -> RpcResult<()> {
        Self::pause_server(self).await
    }

    async fn unpause_server(&self) -> RpcResult<()> {
        Self::unpause_server(self).await
    }

    async fn stop_all_downloads(&self) -> RpcResult<()> {
        Self::stop_all_downloads(self).await
    }

    async fn restart_failed(&self) -> RpcResult<()> {
        Self::restart_failed(self).await
    }
}

#[async_trait]
impl<B: HttpBackend> ConfigPort for RpcClient<B> {
    async fn get_config(&self) -> RpcResult<ConfigTree> {
        Self::get_config(self).await
    }

    async fn get_plugin_config(&self) -> RpcResult<ConfigTree> {
        Self::get_plugin_config(self).await
    }

    async fn get_core_and_plugins_config(&self) -> RpcResult<FullConfig> {
        Self::get_core_and_plugins_config(self).await
    }

    async fn get_accounts(&self) -> RpcResult<Vec<AccountInfo>> {
        Self::get_accounts(self).await
    }

    async fn get_all_userdata(&self) -> RpcResult<UserTable> {
        Self::get_all_userdata(self).await
    }

    async fn set_config_value(
        &self,
        category: &str,
        option: &str,
        value: &str,
        scope: ConfigScope,
    ) -> RpcResult<()> {
        Self::set_config_value(self, category, option, value, scope).await
    }
}
