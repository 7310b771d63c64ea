//! CLI error type.

use locationkit::client::LocationError;
use locationkit::config::ConfigError;
use locationkit::coord::CoordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Coord(#[from] CoordError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to format output: {0}")]
    Output(#[from] serde_json::Error),
}
