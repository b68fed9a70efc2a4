//! CLI command definitions and dispatch for the `popchoice` binary.
//!
//! Uses clap derive macros for argument parsing. Running without a
//! subcommand starts the interactive `ask` flow.

pub mod ask;
pub mod config;
pub mod recommend;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Answer three questions, get a movie.
#[derive(Parser)]
#[command(name = "popchoice", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Recommendation API base URL (overrides POPCHOICE_API_URL and config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer the three questions interactively (default).
    Ask,

    /// Get a single recommendation without prompts.
    Recommend {
        /// What's your favorite movie and why?
        #[arg(long)]
        q1: String,

        /// Are you in the mood for something new or a classic?
        #[arg(long)]
        q2: String,

        /// Do you wanna have fun or do you want something serious?
        #[arg(long)]
        q3: String,
    },

    /// Show the resolved configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
