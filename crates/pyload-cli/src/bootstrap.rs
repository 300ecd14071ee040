//! CLI bootstrap - the composition root.
//!
//! This is the only place where the HTTP client is built. Handlers get a
//! `CliContext` and talk to the server through [`PyLoadPort`]; only the
//! raw `call` command reaches for the client itself.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use pyload_core::{LocalConfig, PyLoadPort, local_config};
use pyload_rpc::{DefaultRpcClient, RpcClientConfig};

use crate::error::CliError;
use crate::parser::Cli;

/// Server root used when neither a flag nor a local settings file names one.
pub const DEFAULT_BASE_URL: &str = "http://[::1]:8000";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Server root, without the `api`/`json` segment.
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Per-request timeout. `None` waits for the transport.
    pub timeout: Option<Duration>,
}

impl CliConfig {
    /// Resolve settings from parsed arguments.
    ///
    /// The server root comes from `--url`/`PYLOAD_URL` first, then from the
    /// web interface section of the local settings file, then the default.
    /// An explicitly named settings file must load; the default location is
    /// only consulted when it exists.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let local = if cli.url.is_some() {
            None
        } else {
            load_local_config(cli.local_config.as_deref())?
        };
        Ok(Self {
            base_url: resolve_base_url(cli.url.as_deref(), local.as_ref()),
            username: cli.username.clone(),
            password: cli.password.clone(),
            timeout: cli.timeout.map(Duration::from_secs),
        })
    }

    fn rpc_config(&self) -> RpcClientConfig {
        RpcClientConfig::new()
            .with_base_url(self.base_url.clone())
            .with_user_agent(concat!("pyload-cli/", env!("CARGO_PKG_VERSION")))
            .with_optional_timeout(self.timeout)
    }
}

/// Pick the server root from a flag, a local settings file or the default.
pub fn resolve_base_url(flag: Option<&str>, local: Option<&LocalConfig>) -> String {
    if let Some(url) = flag.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }
    local
        .and_then(LocalConfig::webui_base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Load the local settings file.
///
/// `Ok(None)` when no path was given and nothing exists at the default
/// location.
pub fn load_local_config(explicit: Option<&Path>) -> Result<Option<LocalConfig>, CliError> {
    if let Some(path) = explicit {
        return Ok(Some(local_config::load(path)?));
    }
    let Some(path) = local_config::default_path().filter(|p| p.exists()) else {
        return Ok(None);
    };
    match local_config::load(&path) {
        Ok(cfg) => Ok(Some(cfg)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable settings file");
            Ok(None)
        }
    }
}

/// Path shown by `local-config` when none is given.
pub fn local_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, CliError> {
    explicit
        .or_else(local_config::default_path)
        .ok_or_else(|| CliError::Config("Cannot determine home directory".to_string()))
}

/// Logged-in application context for CLI commands.
pub struct CliContext {
    client: DefaultRpcClient,
    base_url: String,
}

impl CliContext {
    /// Access the server through the port traits.
    pub fn port(&self) -> &dyn PyLoadPort {
        &self.client
    }

    /// Access the raw client, for calls the ports do not cover.
    pub fn rpc(&self) -> &DefaultRpcClient {
        &self.client
    }

    /// Server root the session belongs to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Bootstrap the CLI application.
///
/// Builds the HTTP client and logs in. Rejected credentials become
/// [`CliError::Auth`]; transport failures keep their [`pyload_core::RpcError`].
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let client = DefaultRpcClient::new(&config.rpc_config())?;
    tracing::debug!(url = %config.base_url, user = %config.username, "Logging in");

    if !client.login(&config.username, &config.password).await? {
        return Err(CliError::Auth(format!(
            "{} rejected the credentials for '{}'",
            config.base_url, config.username
        ))
        .into());
    }

    Ok(CliContext {
        client,
        base_url: config.base_url,
    })
}
