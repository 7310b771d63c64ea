//! Common types and utilities shared across CLI commands.

use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use locationkit::client::{ClientConfig, LocationClient};
use locationkit::config::ConfigFile;
use locationkit::model::{DistanceUnit, TravelMode};

use crate::error::CliError;

/// Travel mode selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TravelModeArg {
    Car,
    Truck,
    Walking,
}

impl From<TravelModeArg> for TravelMode {
    fn from(mode: TravelModeArg) -> Self {
        match mode {
            TravelModeArg::Car => TravelMode::Car,
            TravelModeArg::Truck => TravelMode::Truck,
            TravelModeArg::Walking => TravelMode::Walking,
        }
    }
}

/// Distance unit selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DistanceUnitArg {
    Kilometers,
    Miles,
}

impl From<DistanceUnitArg> for DistanceUnit {
    fn from(unit: DistanceUnitArg) -> Self {
        match unit {
            DistanceUnitArg::Kilometers => DistanceUnit::Kilometers,
            DistanceUnitArg::Miles => DistanceUnit::Miles,
        }
    }
}

/// Loads settings (file, then environment, then `--region`) and builds a client.
pub fn build_client(region: Option<&str>) -> Result<LocationClient, CliError> {
    let mut file = ConfigFile::load()?.with_env_overrides();
    if let Some(region) = region {
        file.client.region = region.to_string();
    }
    debug!(region = %file.client.region, "Building client");

    Ok(LocationClient::new(ClientConfig::from_config_file(&file))?)
}

/// A `lon,lat` pair given on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    /// Returns the `[longitude, latitude]` wire form.
    pub fn to_vec(self) -> Vec<f64> {
        locationkit::coord::position(self.lon, self.lat)
    }
}

/// Parses a `lon,lat` pair.
pub fn parse_position(s: &str) -> Result<LonLat, String> {
    let (lon, lat) = s
        .split_once(',')
        .ok_or_else(|| format!("expected 'lon,lat', got '{}'", s))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;

    if !(-180.0..=180.0).contains(&lon) {
        return Err(format!("longitude {} out of range [-180, 180]", lon));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("latitude {} out of range [-90, 90]", lat));
    }
    Ok(LonLat { lon, lat })
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
