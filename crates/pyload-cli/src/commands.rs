//! Main commands enum.

use clap::Subcommand;
use pyload_core::StatusFilter;
use std::path::PathBuf;

use crate::config_commands::ConfigCommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List packages in the queue
    Queue {
        /// Include the link collector
        #[arg(long)]
        all: bool,
    },

    /// Show one package and its links
    Package {
        /// Package id
        id: i64,
        /// Only show links with this status: all, active, finished, failed
        #[arg(long, default_value = "all")]
        filter: StatusFilter,
    },

    /// Add a package from pasted text; every http(s):// or www. link is used
    Add {
        /// Package name
        name: String,
        /// Text containing the links
        #[arg(required = true)]
        text: Vec<String>,
        /// Archive password for the package
        #[arg(long = "package-password")]
        package_password: Option<String>,
    },

    /// Remove links by file id
    Remove {
        #[arg(required = true)]
        ids: Vec<i64>,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Remove every unfinished link from the given packages
    RemoveUnfinished {
        #[arg(required = true)]
        packages: Vec<i64>,
    },

    /// Show server status
    Status,

    /// List running transfers
    Active,

    /// Resume downloading
    Start,

    /// Pause downloading
    Pause,

    /// Abort all running downloads
    Stop,

    /// Requeue failed links
    RestartFailed,

    /// List configured hoster accounts
    Accounts,

    /// List web interface users
    Users,

    /// Inspect or change server configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Call any API method and print the JSON result
    Call {
        /// Method name, e.g. get_server_version
        method: String,
        /// Positional arguments
        args: Vec<String>,
        /// Keyword argument as key=<json>; values that are not JSON are sent as strings
        #[arg(long = "kw", value_name = "KEY=JSON")]
        kwargs: Vec<String>,
    },

    /// Show the server's local settings file
    LocalConfig {
        /// Settings file (default: ~/.pyload/settings/pyload.cfg)
        path: Option<PathBuf>,
    },
}
