//! Tracker resources: device position ingestion, history and consumers.

use super::{
    BatchItemError, DevicePosition, DevicePositionUpdate, DistanceUnit, PositionalAccuracy,
    PricingPlan, StringMap, Timestamp,
};

string_enum! {
    /// How a tracker filters incoming position updates.
    pub enum PositionFiltering {
        /// Keep at most one update per device every 30 seconds.
        TimeBased => "TimeBased",
        /// Drop updates that moved less than 30 meters.
        DistanceBased => "DistanceBased",
        /// Drop updates whose move is within the measurement accuracy.
        AccuracyBased => "AccuracyBased",
    }
}

// ---------------------------------------------------------------------------
// Consumers
// ---------------------------------------------------------------------------

model! {
    /// Links a geofence collection to a tracker so its positions are evaluated.
    ///
    /// A tracker accepts up to five consumers. Cross-account associations are
    /// not supported by the service.
    #[derive(Eq, Hash)]
    pub struct AssociateTrackerConsumerRequest {
        @http {
            "TrackerName" tracker_name: String,
        }
        /// ARN of the geofence collection, e.g.
        /// `arn:aws:geo:region:account-id:geofence-collection/ExampleGeofenceCollectionConsumer`.
        "ConsumerArn" consumer_arn: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct AssociateTrackerConsumerResult {}
}

model! {
    /// Removes a geofence collection from a tracker's consumers.
    #[derive(Eq, Hash)]
    pub struct DisassociateTrackerConsumerRequest {
        @http {
            "TrackerName" tracker_name: String,
            "ConsumerArn" consumer_arn: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DisassociateTrackerConsumerResult {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListTrackerConsumersRequest {
        @http {
            "TrackerName" tracker_name: String,
        }
        /// Page size, 1 to 100 (service default 100).
        "MaxResults" max_results: i32,
        "NextToken" next_token: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListTrackerConsumersResult {
        "ConsumerArns" consumer_arns: Vec<String>,
        "NextToken" next_token: String,
    }
}

// ---------------------------------------------------------------------------
// Batch position operations
// ---------------------------------------------------------------------------

model! {
    /// Deletes the stored position history of up to 100 devices.
    #[derive(Eq, Hash)]
    pub struct BatchDeleteDevicePositionHistoryRequest {
        @http {
            "TrackerName" tracker_name: String,
        }
        "DeviceIds" device_ids: Vec<String>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchDeleteDevicePositionHistoryResult {
        "Errors" errors: Vec<BatchDeleteDevicePositionHistoryError>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchDeleteDevicePositionHistoryError {
        "DeviceId" device_id: String,
        "Error" error: BatchItemError,
    }
}

model! {
    /// Fetches the latest position of up to 10 devices.
    #[derive(Eq, Hash)]
    pub struct BatchGetDevicePositionRequest {
        @http {
            "TrackerName" tracker_name: String,
        }
        "DeviceIds" device_ids: Vec<String>,
    }
}

model! {
    pub struct BatchGetDevicePositionResult {
        "Errors" errors: Vec<BatchGetDevicePositionError>,
        "DevicePositions" device_positions: Vec<DevicePosition>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchGetDevicePositionError {
        "DeviceId" device_id: String,
        "Error" error: BatchItemError,
    }
}

model! {
    /// Uploads up to 10 position updates to a tracker.
    ///
    /// Positions are also evaluated against every geofence collection linked
    /// to the tracker.
    pub struct BatchUpdateDevicePositionRequest {
        @http {
            "TrackerName" tracker_name: String,
        }
        "Updates" updates: Vec<DevicePositionUpdate>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchUpdateDevicePositionResult {
        "Errors" errors: Vec<BatchUpdateDevicePositionError>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchUpdateDevicePositionError {
        "DeviceId" device_id: String,
        "SampleTime" sample_time: Timestamp,
        "Error" error: BatchItemError,
    }
}

// ---------------------------------------------------------------------------
// Tracker lifecycle
// ---------------------------------------------------------------------------

model! {
    /// Creates a tracker resource.
    #[derive(Eq, Hash)]
    pub struct CreateTrackerRequest {
        /// 1 to 100 characters of `[-._\w]+`, unique in the account.
        "TrackerName" tracker_name: String,
        "PricingPlan" pricing_plan: PricingPlan,
        /// KMS key id, ARN or alias used to encrypt stored positions.
        "KmsKeyId" kms_key_id: String,
        "PricingPlanDataSource" pricing_plan_data_source: String,
        /// Up to 1000 characters.
        "Description" description: String,
        /// Up to 50 tags.
        "Tags" tags: StringMap,
        "PositionFiltering" position_filtering: PositionFiltering,
        /// Publish `ENTER`/`EXIT` events to EventBridge.
        "EventBridgeEnabled" event_bridge_enabled: bool,
        "KmsKeyEnableGeospatialQueries" kms_key_enable_geospatial_queries: bool,
    }
}

map_entries!(CreateTrackerRequest: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct CreateTrackerResult {
        "TrackerName" tracker_name: String,
        "TrackerArn" tracker_arn: String,
        "CreateTime" create_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteTrackerRequest {
        @http {
            "TrackerName" tracker_name: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteTrackerResult {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeTrackerRequest {
        @http {
            "TrackerName" tracker_name: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeTrackerResult {
        "TrackerName" tracker_name: String,
        "TrackerArn" tracker_arn: String,
        "Description" description: String,
        "PricingPlan" pricing_plan: PricingPlan,
        "PricingPlanDataSource" pricing_plan_data_source: String,
        "Tags" tags: StringMap,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
        "KmsKeyId" kms_key_id: String,
        "PositionFiltering" position_filtering: PositionFiltering,
        "EventBridgeEnabled" event_bridge_enabled: bool,
        "KmsKeyEnableGeospatialQueries" kms_key_enable_geospatial_queries: bool,
    }
}

map_entries!(DescribeTrackerResult: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateTrackerRequest {
        @http {
            "TrackerName" tracker_name: String,
        }
        "PricingPlan" pricing_plan: PricingPlan,
        "PricingPlanDataSource" pricing_plan_data_source: String,
        "Description" description: String,
        "PositionFiltering" position_filtering: PositionFiltering,
        "EventBridgeEnabled" event_bridge_enabled: bool,
        "KmsKeyEnableGeospatialQueries" kms_key_enable_geospatial_queries: bool,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateTrackerResult {
        "TrackerName" tracker_name: String,
        "TrackerArn" tracker_arn: String,
        "UpdateTime" update_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListTrackersRequest {
        "MaxResults" max_results: i32,
        "NextToken" next_token: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListTrackersResult {
        "Entries" entries: Vec<ListTrackersResponseEntry>,
        "NextToken" next_token: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListTrackersResponseEntry {
        "TrackerName" tracker_name: String,
        "Description" description: String,
        "PricingPlan" pricing_plan: PricingPlan,
        "PricingPlanDataSource" pricing_plan_data_source: String,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
    }
}

// ---------------------------------------------------------------------------
// Position queries
// ---------------------------------------------------------------------------

model! {
    /// Fetches the latest position of one device.
    #[derive(Eq, Hash)]
    pub struct GetDevicePositionRequest {
        @http {
            "TrackerName" tracker_name: String,
            "DeviceId" device_id: String,
        }
    }
}

model! {
    pub struct GetDevicePositionResult {
        "DeviceId" device_id: String,
        "SampleTime" sample_time: Timestamp,
        "ReceivedTime" received_time: Timestamp,
        "Position" position: Vec<f64>,
        "Accuracy" accuracy: PositionalAccuracy,
        "PositionProperties" position_properties: StringMap,
    }
}

map_entries!(GetDevicePositionResult: position_properties);

model! {
    /// Lists a device's positions within a time window (last 30 days kept).
    ///
    /// Without a window the service returns the last 24 hours.
    #[derive(Eq, Hash)]
    pub struct GetDevicePositionHistoryRequest {
        @http {
            "TrackerName" tracker_name: String,
            "DeviceId" device_id: String,
        }
        "NextToken" next_token: String,
        "StartTimeInclusive" start_time_inclusive: Timestamp,
        "EndTimeExclusive" end_time_exclusive: Timestamp,
        "MaxResults" max_results: i32,
    }
}

model! {
    pub struct GetDevicePositionHistoryResult {
        "DevicePositions" device_positions: Vec<DevicePosition>,
        "NextToken" next_token: String,
    }
}

model! {
    /// Polygon used to restrict `ListDevicePositions` to an area.
    pub struct TrackingFilterGeometry {
        /// Linear rings of `[longitude, latitude]`, first ring exterior.
        "Polygon" polygon: Vec<Vec<Vec<f64>>>,
    }
}

model! {
    pub struct ListDevicePositionsRequest {
        @http {
            "TrackerName" tracker_name: String,
        }
        "MaxResults" max_results: i32,
        "NextToken" next_token: String,
        "FilterGeometry" filter_geometry: TrackingFilterGeometry,
    }
}

model! {
    pub struct ListDevicePositionsResult {
        "Entries" entries: Vec<ListDevicePositionsResponseEntry>,
        "NextToken" next_token: String,
    }
}

model! {
    pub struct ListDevicePositionsResponseEntry {
        "DeviceId" device_id: String,
        "SampleTime" sample_time: Timestamp,
        "Position" position: Vec<f64>,
        "Accuracy" accuracy: PositionalAccuracy,
        "PositionProperties" position_properties: StringMap,
    }
}

map_entries!(ListDevicePositionsResponseEntry: position_properties);

// ---------------------------------------------------------------------------
// Position verification
// ---------------------------------------------------------------------------

model! {
    /// Checks a reported position against network signals for spoofing.
    pub struct VerifyDevicePositionRequest {
        @http {
            "TrackerName" tracker_name: String,
        }
        "DeviceState" device_state: DeviceState,
        "DistanceUnit" distance_unit: DistanceUnit,
    }
}

model! {
    pub struct VerifyDevicePositionResult {
        "InferredState" inferred_state: InferredState,
        "DeviceId" device_id: String,
        "SampleTime" sample_time: Timestamp,
        "ReceivedTime" received_time: Timestamp,
        "DistanceUnit" distance_unit: DistanceUnit,
    }
}

model! {
    /// Everything a device observed at one instant.
    pub struct DeviceState {
        "DeviceId" device_id: String,
        "SampleTime" sample_time: Timestamp,
        "Position" position: Vec<f64>,
        "Accuracy" accuracy: PositionalAccuracy,
        /// Public IPv4 address of the device.
        "Ipv4Address" ipv4_address: String,
        "WiFiAccessPoints" wi_fi_access_points: Vec<WiFiAccessPoint>,
        "CellSignals" cell_signals: CellSignals,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct WiFiAccessPoint {
        /// Colon separated MAC address, e.g. `00:11:22:33:44:55`.
        "MacAddress" mac_address: String,
        /// Received signal strength in dBm, -128 to 0.
        "Rss" rss: i32,
    }
}

model! {
    pub struct CellSignals {
        "LteCellDetails" lte_cell_details: Vec<LteCellDetails>,
    }
}

model! {
    /// Serving LTE cell as seen by the device.
    pub struct LteCellDetails {
        /// E-UTRAN cell identifier (ECI).
        "CellId" cell_id: i32,
        /// Mobile country code.
        "Mcc" mcc: i32,
        /// Mobile network code.
        "Mnc" mnc: i32,
        "LocalId" local_id: LteLocalId,
        "NetworkMeasurements" network_measurements: Vec<LteNetworkMeasurements>,
        "TimingAdvance" timing_advance: i32,
        /// Whether the cell supports 5G NR.
        "NrCapable" nr_capable: bool,
        "Rsrp" rsrp: i32,
        "Rsrq" rsrq: f32,
        /// Tracking area code.
        "Tac" tac: i32,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct LteLocalId {
        "Earfcn" earfcn: i32,
        "Pci" pci: i32,
    }
}

model! {
    /// Neighbouring cell measurement.
    pub struct LteNetworkMeasurements {
        "Earfcn" earfcn: i32,
        "CellId" cell_id: i32,
        "Pci" pci: i32,
        "Rsrp" rsrp: i32,
        "Rsrq" rsrq: f32,
    }
}

model! {
    /// Position the service inferred from the device's network signals.
    pub struct InferredState {
        "Position" position: Vec<f64>,
        "Accuracy" accuracy: PositionalAccuracy,
        /// Distance between the reported and inferred positions.
        "DeviationDistance" deviation_distance: f64,
        /// Whether the device appears to be behind a proxy.
        "ProxyDetected" proxy_detected: bool,
    }
}
