//! Configuration subcommands.

use clap::Subcommand;

/// Server configuration commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// List categories, or the options of one category
    Show {
        /// Category to show (omit to list categories)
        category: Option<String>,
        /// Use plugin configuration instead of core
        #[arg(long)]
        plugins: bool,
    },
    /// Change one option; the value is checked against the option's type first
    Set {
        category: String,
        option: String,
        value: String,
        /// Option belongs to a plugin
        #[arg(long)]
        plugin: bool,
    },
}
