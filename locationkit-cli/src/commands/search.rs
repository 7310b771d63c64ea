//! Search and reverse geocoding commands.

use clap::Args;

use locationkit::coord::position;
use locationkit::model::{SearchPlaceIndexForPositionRequest, SearchPlaceIndexForTextRequest};

use super::common::{build_client, parse_position, print_json, LonLat};
use crate::error::CliError;

/// Arguments for the search command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Place index resource name
    #[arg(long)]
    pub index: String,

    /// Free-form address or place name
    pub text: String,

    /// Maximum number of results (1-50)
    #[arg(long)]
    pub max_results: Option<i32>,

    /// Prefer results near this position, given as lon,lat
    #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
    pub bias: Option<LonLat>,
}

/// Arguments for the reverse command.
#[derive(Debug, Args)]
pub struct ReverseArgs {
    /// Place index resource name
    #[arg(long)]
    pub index: String,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Maximum number of results (1-50)
    #[arg(long)]
    pub max_results: Option<i32>,
}

/// Run the search command.
pub fn run_search(args: SearchArgs, region: Option<&str>) -> Result<(), CliError> {
    let mut request = SearchPlaceIndexForTextRequest::default()
        .with_index_name(args.index)
        .with_text(args.text);
    request.max_results = args.max_results;
    request.bias_position = args.bias.map(LonLat::to_vec);

    let client = build_client(region)?;
    let result = client.search_place_index_for_text(&request)?;
    print_json(&result)
}

/// Run the reverse command.
pub fn run_reverse(args: ReverseArgs, region: Option<&str>) -> Result<(), CliError> {
    let mut request = SearchPlaceIndexForPositionRequest::default()
        .with_index_name(args.index)
        .with_position(position(args.lon, args.lat));
    request.max_results = args.max_results;

    let client = build_client(region)?;
    let result = client.search_place_index_for_position(&request)?;
    print_json(&result)
}
