//! Server configuration port.

use async_trait::async_trait;

use super::error::RpcResult;
use crate::domain::{AccountInfo, ConfigScope, ConfigTree, FullConfig, UserTable};

/// Port trait for reading and writing server configuration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigPort: Send + Sync {
    /// Core configuration tree.
    async fn get_config(&self) -> RpcResult<ConfigTree>;

    /// Plugin configuration tree.
    async fn get_plugin_config(&self) -> RpcResult<ConfigTree>;

    /// Core and plugin trees together.
    async fn get_core_and_plugins_config(&self) -> RpcResult<FullConfig>;

    /// Configured hoster accounts.
    async fn get_accounts(&self) -> RpcResult<Vec<AccountInfo>>;

    /// Web UI users.
    async fn get_all_userdata(&self) -> RpcResult<UserTable>;

    /// Set one option. `value` must already be validated.
    async fn set_config_value(
        &self,
        category: &str,
        option: &str,
        value: &str,
        scope: ConfigScope,
    ) -> RpcResult<()>;
}
