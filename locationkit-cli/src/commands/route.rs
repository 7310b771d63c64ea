//! Route command - calculate a route between two positions.

use clap::Args;

use locationkit::model::CalculateRouteRequest;

use super::common::{
    build_client, parse_position, print_json, DistanceUnitArg, LonLat, TravelModeArg,
};
use crate::error::CliError;

/// Arguments for the route command.
#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Route calculator resource name
    #[arg(long)]
    pub calculator: String,

    /// Departure position as lon,lat
    #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
    pub from: LonLat,

    /// Destination position as lon,lat
    #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
    pub to: LonLat,

    /// Intermediate stop as lon,lat (repeatable)
    #[arg(long = "via", value_parser = parse_position, allow_hyphen_values = true)]
    pub waypoints: Vec<LonLat>,

    /// Travel mode
    #[arg(long, value_enum, default_value = "car")]
    pub mode: TravelModeArg,

    /// Distance unit for the summary and legs
    #[arg(long, value_enum, default_value = "kilometers")]
    pub unit: DistanceUnitArg,

    /// Include leg geometry in the output
    #[arg(long)]
    pub geometry: bool,
}

impl RouteArgs {
    fn to_request(&self) -> CalculateRouteRequest {
        let mut request = CalculateRouteRequest::default()
            .with_calculator_name(self.calculator.clone())
            .with_departure_position(self.from.to_vec())
            .with_destination_position(self.to.to_vec())
            .with_travel_mode(self.mode)
            .with_distance_unit(self.unit)
            .with_include_leg_geometry(self.geometry);
        if !self.waypoints.is_empty() {
            let waypoints: Vec<Vec<f64>> = self.waypoints.iter().map(|p| p.to_vec()).collect();
            request = request.with_waypoint_positions(waypoints);
        }
        request
    }
}

/// Run the route command.
pub fn run(args: RouteArgs, region: Option<&str>) -> Result<(), CliError> {
    let client = build_client(region)?;
    let result = client.calculate_route(&args.to_request())?;
    print_json(&result)
}
