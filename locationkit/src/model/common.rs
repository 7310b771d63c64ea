//! Shapes and enumerations shared by several resource families.

use super::{StringMap, Timestamp};

string_enum! {
    /// Unit for distances in requests and responses.
    pub enum DistanceUnit {
        Kilometers => "Kilometers",
        Miles => "Miles",
    }
}

string_enum! {
    /// Unit for speeds in geofence forecasts.
    pub enum SpeedUnit {
        KilometersPerHour => "KilometersPerHour",
        MilesPerHour => "MilesPerHour",
    }
}

string_enum! {
    /// Billing plan of a resource.
    ///
    /// The service has deprecated this member; it is still accepted and echoed.
    pub enum PricingPlan {
        RequestBasedUsage => "RequestBasedUsage",
        MobileAssetTracking => "MobileAssetTracking",
        MobileAssetManagement => "MobileAssetManagement",
    }
}

string_enum! {
    /// Error code attached to a failed item of a batch operation.
    pub enum BatchItemErrorCode {
        AccessDeniedError => "AccessDeniedError",
        ConflictError => "ConflictError",
        InternalServerError => "InternalServerError",
        ResourceNotFoundError => "ResourceNotFoundError",
        ThrottlingError => "ThrottlingError",
        ValidationError => "ValidationError",
    }
}

string_enum! {
    /// Why the service rejected a request as invalid.
    pub enum ValidationExceptionReason {
        UnknownOperation => "UnknownOperation",
        Missing => "Missing",
        CannotParse => "CannotParse",
        FieldValidationFailed => "FieldValidationFailed",
        Other => "Other",
        UnknownField => "UnknownField",
    }
}

model! {
    /// Accuracy of a reported position.
    pub struct PositionalAccuracy {
        /// Horizontal accuracy radius in meters. Range 0 to 10000.
        "Horizontal" horizontal: f64,
    }
}

model! {
    /// Error details for one failed item of a batch operation.
    #[derive(Eq, Hash)]
    pub struct BatchItemError {
        "Code" code: BatchItemErrorCode,
        "Message" message: String,
    }
}

model! {
    /// A device position submitted to a tracker or evaluated against geofences.
    pub struct DevicePositionUpdate {
        /// Device identifier, 1 to 100 characters.
        "DeviceId" device_id: String,
        /// When the position was sampled on the device.
        "SampleTime" sample_time: Timestamp,
        /// `[longitude, latitude]`.
        "Position" position: Vec<f64>,
        "Accuracy" accuracy: PositionalAccuracy,
        /// Up to three free-form key/value pairs.
        "PositionProperties" position_properties: StringMap,
    }
}

map_entries!(DevicePositionUpdate: position_properties);

model! {
    /// A stored device position as reported by the tracker.
    pub struct DevicePosition {
        "DeviceId" device_id: String,
        "SampleTime" sample_time: Timestamp,
        /// When the tracker received the position.
        "ReceivedTime" received_time: Timestamp,
        /// `[longitude, latitude]`.
        "Position" position: Vec<f64>,
        "Accuracy" accuracy: PositionalAccuracy,
        "PositionProperties" position_properties: StringMap,
    }
}

map_entries!(DevicePosition: position_properties);

model! {
    /// A single field that failed validation.
    #[derive(Eq, Hash)]
    pub struct ValidationExceptionField {
        "Name" name: String,
        "Message" message: String,
    }
}
