//! Main CLI parser and top-level argument handling.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface for controlling a pyLoad server.
#[derive(Parser)]
#[command(name = "pyload-cli")]
#[command(about = "Control a pyLoad download server")]
#[command(version)]
pub struct Cli {
    /// Server root, e.g. http://127.0.0.1:8000 (default: local settings file, then http://[::1]:8000)
    #[arg(long, env = "PYLOAD_URL", global = true)]
    pub url: Option<String>,

    /// Login name
    #[arg(long, env = "PYLOAD_USERNAME", default_value = "pyload", global = true)]
    pub username: String,

    /// Login password
    #[arg(
        long,
        env = "PYLOAD_PASSWORD",
        default_value = "pyload",
        hide_env_values = true,
        hide_default_value = true,
        global = true
    )]
    pub password: String,

    /// Request timeout in seconds (default: none)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Server settings file used to find the web interface address
    #[arg(long = "local-config", global = true)]
    pub local_config: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
