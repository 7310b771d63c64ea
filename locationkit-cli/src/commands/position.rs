//! Position command - latest and historical device positions.

use clap::Args;

use locationkit::model::{GetDevicePositionHistoryRequest, GetDevicePositionRequest};

use super::common::{build_client, print_json};
use crate::error::CliError;

/// Arguments for the position command.
#[derive(Debug, Args)]
pub struct PositionArgs {
    /// Tracker resource name
    #[arg(long)]
    pub tracker: String,

    /// Device identifier
    #[arg(long)]
    pub device: String,

    /// Print the stored position history instead of the latest position
    #[arg(long)]
    pub history: bool,
}

/// Run the position command.
pub fn run(args: PositionArgs, region: Option<&str>) -> Result<(), CliError> {
    let client = build_client(region)?;

    if args.history {
        let request = GetDevicePositionHistoryRequest::default()
            .with_tracker_name(args.tracker)
            .with_device_id(args.device);

        let mut positions = Vec::new();
        for page in client.paginate(request) {
            positions.extend(page?.device_positions.unwrap_or_default());
        }
        return print_json(&positions);
    }

    let request = GetDevicePositionRequest::default()
        .with_tracker_name(args.tracker)
        .with_device_id(args.device);
    let result = client.get_device_position(&request)?;
    print_json(&result)
}
