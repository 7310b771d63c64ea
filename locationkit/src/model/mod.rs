//! Request and response shapes for the geolocation service.
//!
//! Every operation has a `*Request` shape that callers populate and a
//! `*Result` shape the service returns. Shapes are plain data: all fields are
//! optional, equality is structural, and format constraints (ARN patterns,
//! numeric ranges, name lengths) are documented but not enforced here; the
//! service validates them.
//!
//! # Example
//!
//! ```
//! use locationkit::model::{BatchUpdateDevicePositionRequest, DevicePositionUpdate};
//! use chrono::Utc;
//!
//! let update = DevicePositionUpdate::default()
//!     .with_device_id("truck-17")
//!     .with_position(vec![-123.1187, 49.2819])
//!     .with_sample_time(Utc::now())
//!     .add_position_properties_entry("driver", "ana")
//!     .unwrap();
//!
//! let request = BatchUpdateDevicePositionRequest::default()
//!     .with_tracker_name("fleet")
//!     .with_updates(vec![update]);
//! assert_eq!(request.updates.as_ref().map(Vec::len), Some(1));
//! ```

#[macro_use]
mod macros;

mod common;
mod error;
mod geofencing;
mod keys;
mod maps;
mod places;
mod routes;
mod tagging;
mod tracking;

pub use common::*;
pub use error::ModelError;
pub use geofencing::*;
pub use keys::*;
pub use maps::*;
pub use places::*;
pub use routes::*;
pub use tagging::*;
pub use tracking::*;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// String-to-string map used for tags and free-form properties.
pub type StringMap = BTreeMap<String, String>;

/// Timestamp type used by every shape (ISO 8601 on the wire).
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Inserts `key` into an optional map, rejecting keys that already exist.
pub(crate) fn insert_unique_entry(
    map: &mut Option<StringMap>,
    field: &'static str,
    key: String,
    value: String,
) -> Result<(), ModelError> {
    match map.get_or_insert_with(StringMap::new).entry(key) {
        Entry::Occupied(entry) => Err(ModelError::DuplicateKey {
            field,
            key: entry.key().clone(),
        }),
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}

/// Serde adapter for binary members, which travel as base64 text in JSON.
pub(crate) mod blob {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_str(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(deserializer)?;
        encoded
            .map(|text| STANDARD.decode(text).map_err(D::Error::custom))
            .transpose()
    }
}
