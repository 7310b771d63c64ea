//! LocationKit - client SDK for a cloud geolocation service
//!
//! This library provides typed request and response shapes for trackers,
//! geofence collections, maps, place indexes, route calculators, API keys
//! and resource tags, plus a synchronous client that sends them over
//! HTTPS as JSON.
//!
//! # Modules
//!
//! - [`model`]: one `*Request` / `*Result` shape per operation
//! - [`client`]: routing, transport, error mapping, retries and pagination
//! - [`coord`]: positions, bounding boxes and map tile addressing
//! - [`config`]: `~/.locationkit/config.ini` handling
//!
//! # Example
//!
//! ```no_run
//! use locationkit::client::{ClientConfig, LocationClient};
//! use locationkit::config::ConfigFile;
//! use locationkit::coord::position;
//! use locationkit::model::SearchPlaceIndexForPositionRequest;
//!
//! let file = ConfigFile::load()?.with_env_overrides();
//! let client = LocationClient::new(ClientConfig::from_config_file(&file))?;
//!
//! let result = client.search_place_index_for_position(
//!     &SearchPlaceIndexForPositionRequest::default()
//!         .with_index_name("explore")
//!         .with_position(position(-123.1187, 49.2819)),
//! )?;
//! println!("{:?}", result.results);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod config;
pub mod coord;
pub mod model;
