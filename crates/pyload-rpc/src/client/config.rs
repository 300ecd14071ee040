//! Configuration, accounts and users.

use pyload_core::{AccountInfo, ConfigScope, ConfigTree, FullConfig, RpcResult, UserTable};

use super::RpcClient;
use crate::http::HttpBackend;
use crate::request::RpcRequest;

impl<B: HttpBackend> RpcClient<B> {
    pub async fn get_config(&self) -> RpcResult<ConfigTree> {
        self.invoke_as(RpcRequest::new("get_config")).await
    }

    pub async fn get_plugin_config(&self) -> RpcResult<ConfigTree> {
        self.invoke_as(RpcRequest::new("get_plugin_config")).await
    }

    /// Fetch core and plugin configuration concurrently.
    pub async fn get_core_and_plugins_config(&self) -> RpcResult<FullConfig> {
        let (core, plugins) = tokio::try_join!(self.get_config(), self.get_plugin_config())?;
        Ok(FullConfig { core, plugins })
    }

    pub async fn get_accounts(&self) -> RpcResult<Vec<AccountInfo>> {
        self.invoke_as(RpcRequest::new("get_accounts")).await
    }

    pub async fn get_all_userdata(&self) -> RpcResult<UserTable> {
        self.invoke_as(RpcRequest::new("get_all_userdata")).await
    }

    /// Set one option.
    ///
    /// Sent as `/set_config_value/{category},{option},{value},{section}`.
    /// Values containing `,` cannot travel positionally and are sent as
    /// keyword arguments instead.
    pub async fn set_config_value(
        &self,
        category: &str,
        option: &str,
        value: &str,
        scope: ConfigScope,
    ) -> RpcResult<()> {
        let section = scope.as_section();
        let request = if [category, option, value].iter().any(|s| s.contains(',')) {
            RpcRequest::new("set_config_value")
                .kwarg("category", category)
                .kwarg("option", option)
                .kwarg("value", value)
                .kwarg("section", section)
        } else {
            RpcRequest::new("set_config_value").args([category, option, value, section])
        };
        self.invoke_unit(request).await
    }
}
