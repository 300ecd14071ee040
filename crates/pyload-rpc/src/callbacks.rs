//! Callback-style facade over the named methods.
//!
//! Each method returns immediately and hands the result to `callback`
//! exactly once, the way a UI event loop expects it.

use pyload_core::{
    AccountInfo, ActiveLinks, ConfigScope, ConfigTree, FileId, FullConfig, Package, PackageId,
    RpcResult, ServerStatus, UserTable,
};
use std::collections::BTreeMap;

use crate::client::RpcClient;
use crate::http::HttpBackend;

/// Borrowed view of a client returned by [`RpcClient::callbacks`].
pub struct Callbacks<'a, B: HttpBackend> {
    client: &'a RpcClient<B>,
}

/// No-argument methods that forward to the async client method of the
/// same name.
macro_rules! forward {
    ($($(#[$doc:meta])* $name:ident -> $ty:ty;)+) => {
        $(
            $(#[$doc])*
            pub fn $name<F>(&self, callback: F)
            where
                F: FnOnce(RpcResult<$ty>) + Send + 'static,
            {
                let client = self.client.clone();
                self.client
                    .spawn(async move { client.$name().await }, callback);
            }
        )+
    };
}

impl<'a, B: HttpBackend> Callbacks<'a, B> {
    pub(crate) const fn new(client: &'a RpcClient<B>) -> Self {
        Self { client }
    }

    /// Log in; `callback` receives whether a session cookie was stored.
    pub fn login<F>(&self, callback: F, username: &str, password: &str)
    where
        F: FnOnce(RpcResult<bool>) + Send + 'static,
    {
        let client = self.client.clone();
        let (username, password) = (username.to_string(), password.to_string());
        self.client.spawn(
            async move { client.login(&username, &password).await },
            callback,
        );
    }

    forward! {
        get_queue -> Vec<Package>;
        get_queue_and_collector -> Vec<Package>;
        get_config -> ConfigTree;
        get_plugin_config -> ConfigTree;
        get_core_and_plugins_config -> FullConfig;
        get_accounts -> Vec<AccountInfo>;
        get_all_userdata -> UserTable;
        status -> ServerStatus;
        links -> ActiveLinks;
        pause_server -> ();
        unpause_server -> ();
        stop_all_downloads -> ();
        restart_failed -> ();
    }

    pub fn get_package_data<F>(&self, callback: F, id: PackageId)
    where
        F: FnOnce(RpcResult<Package>) + Send + 'static,
    {
        let client = self.client.clone();
        self.client
            .spawn(async move { client.get_package_data(id).await }, callback);
    }

    pub fn add_package<F>(
        &self,
        callback: F,
        name: &str,
        links: Vec<String>,
        password: Option<String>,
    ) where
        F: FnOnce(RpcResult<PackageId>) + Send + 'static,
    {
        let client = self.client.clone();
        let name = name.to_string();
        self.client.spawn(
            async move {
                client
                    .add_package(&name, &links, password.as_deref())
                    .await
            },
            callback,
        );
    }

    pub fn delete_files<F>(&self, callback: F, ids: Vec<FileId>)
    where
        F: FnOnce(RpcResult<()>) + Send + 'static,
    {
        let client = self.client.clone();
        self.client
            .spawn(async move { client.delete_files(&ids).await }, callback);
    }

    pub fn delete_unfinished_links<F>(&self, callback: F, package_ids: Vec<PackageId>)
    where
        F: FnOnce(RpcResult<u64>) + Send + 'static,
    {
        let client = self.client.clone();
        self.client.spawn(
            async move { client.delete_unfinished_links(&package_ids).await },
            callback,
        );
    }

    pub fn set_config_value<F>(
        &self,
        callback: F,
        category: &str,
        option: &str,
        value: &str,
        scope: ConfigScope,
    ) where
        F: FnOnce(RpcResult<()>) + Send + 'static,
    {
        let client = self.client.clone();
        let (category, option, value) =
            (category.to_string(), option.to_string(), value.to_string());
        self.client.spawn(
            async move {
                client
                    .set_config_value(&category, &option, &value, scope)
                    .await
            },
            callback,
        );
    }

    pub fn set_package_data<F>(&self, callback: F, id: PackageId, data: BTreeMap<String, String>)
    where
        F: FnOnce(RpcResult<()>) + Send + 'static,
    {
        let client = self.client.clone();
        self.client
            .spawn(async move { client.set_package_data(id, &data).await }, callback);
    }
}
