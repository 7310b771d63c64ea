//! Tile command - fetch the map tile containing a position.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;
use tracing::info;

use locationkit::model::GetMapTileRequest;

use super::common::{build_client, print_json};
use crate::error::CliError;

/// Arguments for the tile command.
#[derive(Debug, Args)]
pub struct TileArgs {
    /// Map resource name
    #[arg(long)]
    pub map: String,

    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Zoom level (0-22)
    #[arg(long, default_value_t = 12)]
    pub zoom: u8,

    /// Write the tile to this file instead of printing a summary
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the tile command.
pub fn run(args: TileArgs, region: Option<&str>) -> Result<(), CliError> {
    let request = GetMapTileRequest::for_position(&args.map, args.lat, args.lon, args.zoom)?;
    let client = build_client(region)?;
    let tile = client.get_map_tile(&request)?;

    let blob = tile.blob.unwrap_or_default();
    if let Some(path) = &args.output {
        std::fs::write(path, &blob)?;
        info!(path = %path.display(), bytes = blob.len(), "Wrote tile");
    }

    print_json(&json!({
        "Z": request.z,
        "X": request.x,
        "Y": request.y,
        "ContentType": tile.content_type,
        "CacheControl": tile.cache_control,
        "Bytes": blob.len(),
        "Output": args.output.as_ref().map(|p| p.display().to_string()),
    }))
}
