//! locationkit CLI - Command-line interface
//!
//! Thin front end over the `locationkit` library: manage the settings file,
//! fetch map tiles, geocode, calculate routes and inspect trackers.

mod commands;
mod error;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::config::ConfigCommands;
use commands::keys::KeysAction;
use commands::position::PositionArgs;
use commands::route::RouteArgs;
use commands::search::{ReverseArgs, SearchArgs};
use commands::tile::TileArgs;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "locationkit", version, about = "Amazon Location Service from the command line")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Region to call, overriding the config file and environment
    #[arg(long, global = true)]
    region: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// View or change configuration settings
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Fetch the map tile containing a position
    Tile(TileArgs),

    /// Geocode free-form text
    Search(SearchArgs),

    /// Reverse geocode a position
    Reverse(ReverseArgs),

    /// Calculate a route between two positions
    Route(RouteArgs),

    /// Show a device's latest position or position history
    Position(PositionArgs),

    /// Manage API keys
    Keys {
        #[command(subcommand)]
        action: KeysAction,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "locationkit=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let region = cli.region.as_deref();

    match cli.command {
        Commands::Config { action } => commands::config::run(action),
        Commands::Tile(args) => commands::tile::run(args, region),
        Commands::Search(args) => commands::search::run_search(args, region),
        Commands::Reverse(args) => commands::search::run_reverse(args, region),
        Commands::Route(args) => commands::route::run(args, region),
        Commands::Position(args) => commands::position::run(args, region),
        Commands::Keys { action } => commands::keys::run(action, region),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
