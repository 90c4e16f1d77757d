#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use skytap_setup::cli::{Cli, Commands};
use skytap_setup::commands;
use skytap_setup::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let project_dir = std::env::current_dir()?;

    // Config commands report on the files themselves, so they load on their own
    if let Commands::Config { command } = &cli.command {
        commands::config::execute(command, &project_dir)?;
        return Ok(());
    }

    let config = Config::load(&project_dir)?;

    match &cli.command {
        Commands::Setup(cmd) => {
            let config = config.with_overrides(&cmd.connection_overrides());
            commands::setup::execute(&config, cmd)?;
        }
        Commands::Show(args) => {
            commands::show::execute(&config, args)?;
        }
        Commands::Routes(cmd) => {
            commands::routes::execute(&config, cmd)?;
        }
        Commands::Clean { machine, yes } => {
            commands::clean::execute(&config, machine, *yes)?;
        }
        Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}

/// Send diagnostics to stderr so they never mix with prompts on stdout.
/// `RUST_LOG` wins over `--verbose` when set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
