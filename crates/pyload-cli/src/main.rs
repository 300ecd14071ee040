//! CLI entry point.
//!
//! Resolves settings, logs in through bootstrap and dispatches to a
//! handler. Errors are printed once here and mapped to an exit code.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pyload_cli::error::exit_code_for;
use pyload_cli::handlers::server::ServerAction;
use pyload_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads PYLOAD_*
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code_for(&e));
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(mut cli: Cli) -> anyhow::Result<()> {
    let command = match cli.command.take() {
        Some(Commands::LocalConfig { path }) => {
            return handlers::local_config::execute(path.or(cli.local_config));
        }
        Some(command) => command,
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config).await?;

    match command {
        Commands::Queue { all } => handlers::queue::execute(&ctx, all).await,
        Commands::Package { id, filter } => handlers::package::execute(&ctx, id, filter).await,
        Commands::Add {
            name,
            text,
            package_password,
        } => handlers::add::execute(&ctx, &name, &text, package_password.as_deref()).await,
        Commands::Remove { ids, force } => handlers::remove::execute(&ctx, &ids, force).await,
        Commands::RemoveUnfinished { packages } => {
            handlers::remove::execute_unfinished(&ctx, &packages).await
        }
        Commands::Status => handlers::server::status(&ctx).await,
        Commands::Active => handlers::server::active(&ctx).await,
        Commands::Start => handlers::server::control(&ctx, ServerAction::Start).await,
        Commands::Pause => handlers::server::control(&ctx, ServerAction::Pause).await,
        Commands::Stop => handlers::server::control(&ctx, ServerAction::Stop).await,
        Commands::RestartFailed => {
            handlers::server::control(&ctx, ServerAction::RestartFailed).await
        }
        Commands::Accounts => handlers::accounts::accounts(&ctx).await,
        Commands::Users => handlers::accounts::users(&ctx).await,
        Commands::Config { command } => handlers::config::execute(&ctx, command).await,
        Commands::Call {
            method,
            args,
            kwargs,
        } => handlers::call::execute(&ctx, &method, &args, &kwargs).await,
        // Handled before bootstrap
        Commands::LocalConfig { .. } => Ok(()),
    }
}
