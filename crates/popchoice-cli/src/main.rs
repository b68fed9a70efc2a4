//! PopChoice CLI entry point.
//!
//! Binary name: `popchoice`
//!
//! Parses CLI arguments, sets up tracing, resolves configuration, then
//! dispatches to the requested command. Runs on a single-threaded runtime:
//! the only suspension point is the recommendation request itself.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,popchoice_core=debug,popchoice_infra=debug",
        _ => "trace",
    };

    popchoice_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    popchoice_observe::tracing_setup::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "popchoice", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.api_url.clone()).await?;

    match cli.command.unwrap_or(Commands::Ask) {
        Commands::Ask => {
            cli::ask::loop_runner::run_ask_loop(&state, cli.quiet).await?;
        }

        Commands::Recommend { q1, q2, q3 } => {
            cli::recommend::recommend(&state, q1, q2, q3, cli.json, cli.quiet).await?;
        }

        Commands::Config => {
            cli::config::show_config(&state, cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
