//! Geofence collections and the geofences stored in them.

use super::{
    BatchItemError, DevicePositionUpdate, DistanceUnit, PricingPlan, SpeedUnit, StringMap,
    Timestamp,
};

string_enum! {
    /// Kind of a forecasted geofence event.
    pub enum ForecastedGeofenceEventType {
        Enter => "ENTER",
        Exit => "EXIT",
        Idle => "IDLE",
    }
}

model! {
    /// Circle given by a center and a radius in meters.
    pub struct Circle {
        /// `[longitude, latitude]`.
        "Center" center: Vec<f64>,
        "Radius" radius: f64,
    }
}

model! {
    /// Geometry of a geofence. Exactly one member should be set.
    pub struct GeofenceGeometry {
        /// Linear rings; the first is the exterior (counter-clockwise), the
        /// rest are holes (clockwise). Each ring has at least 4 vertices and
        /// ends where it starts.
        "Polygon" polygon: Vec<Vec<Vec<f64>>>,
        "Circle" circle: Circle,
        /// Compressed polygon in Geobuf format.
        #[serde(with = "crate::model::blob")]
        "Geobuf" geobuf: Vec<u8>,
        "MultiPolygon" multi_polygon: Vec<Vec<Vec<Vec<f64>>>>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchDeleteGeofenceRequest {
        @http {
            "CollectionName" collection_name: String,
        }
        /// Up to 10 geofence ids.
        "GeofenceIds" geofence_ids: Vec<String>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchDeleteGeofenceResult {
        "Errors" errors: Vec<BatchDeleteGeofenceError>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchDeleteGeofenceError {
        "GeofenceId" geofence_id: String,
        "Error" error: BatchItemError,
    }
}

model! {
    /// Evaluates device positions against every geofence in a collection.
    ///
    /// `ENTER`/`EXIT` events are emitted when a device crosses a boundary
    /// relative to its previous evaluated position.
    pub struct BatchEvaluateGeofencesRequest {
        @http {
            "CollectionName" collection_name: String,
        }
        "DevicePositionUpdates" device_position_updates: Vec<DevicePositionUpdate>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchEvaluateGeofencesResult {
        "Errors" errors: Vec<BatchEvaluateGeofencesError>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchEvaluateGeofencesError {
        "DeviceId" device_id: String,
        "SampleTime" sample_time: Timestamp,
        "Error" error: BatchItemError,
    }
}

model! {
    pub struct BatchPutGeofenceRequest {
        @http {
            "CollectionName" collection_name: String,
        }
        "Entries" entries: Vec<BatchPutGeofenceRequestEntry>,
    }
}

model! {
    pub struct BatchPutGeofenceRequestEntry {
        "GeofenceId" geofence_id: String,
        "Geometry" geometry: GeofenceGeometry,
        /// Up to three free-form key/value pairs.
        "GeofenceProperties" geofence_properties: StringMap,
    }
}

map_entries!(BatchPutGeofenceRequestEntry: geofence_properties);

model! {
    #[derive(Eq, Hash)]
    pub struct BatchPutGeofenceResult {
        "Successes" successes: Vec<BatchPutGeofenceSuccess>,
        "Errors" errors: Vec<BatchPutGeofenceError>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchPutGeofenceSuccess {
        "GeofenceId" geofence_id: String,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct BatchPutGeofenceError {
        "GeofenceId" geofence_id: String,
        "Error" error: BatchItemError,
    }
}

// ---------------------------------------------------------------------------
// Collection lifecycle
// ---------------------------------------------------------------------------

model! {
    #[derive(Eq, Hash)]
    pub struct CreateGeofenceCollectionRequest {
        "CollectionName" collection_name: String,
        "PricingPlan" pricing_plan: PricingPlan,
        "PricingPlanDataSource" pricing_plan_data_source: String,
        "Description" description: String,
        "Tags" tags: StringMap,
        "KmsKeyId" kms_key_id: String,
    }
}

map_entries!(CreateGeofenceCollectionRequest: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct CreateGeofenceCollectionResult {
        "CollectionName" collection_name: String,
        "CollectionArn" collection_arn: String,
        "CreateTime" create_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteGeofenceCollectionRequest {
        @http {
            "CollectionName" collection_name: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteGeofenceCollectionResult {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeGeofenceCollectionRequest {
        @http {
            "CollectionName" collection_name: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeGeofenceCollectionResult {
        "CollectionName" collection_name: String,
        "CollectionArn" collection_arn: String,
        "Description" description: String,
        "PricingPlan" pricing_plan: PricingPlan,
        "PricingPlanDataSource" pricing_plan_data_source: String,
        "KmsKeyId" kms_key_id: String,
        "Tags" tags: StringMap,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
        "GeofenceCount" geofence_count: i32,
    }
}

map_entries!(DescribeGeofenceCollectionResult: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateGeofenceCollectionRequest {
        @http {
            "CollectionName" collection_name: String,
        }
        "PricingPlan" pricing_plan: PricingPlan,
        "PricingPlanDataSource" pricing_plan_data_source: String,
        "Description" description: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateGeofenceCollectionResult {
        "CollectionName" collection_name: String,
        "CollectionArn" collection_arn: String,
        "UpdateTime" update_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListGeofenceCollectionsRequest {
        "MaxResults" max_results: i32,
        "NextToken" next_token: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListGeofenceCollectionsResult {
        "Entries" entries: Vec<ListGeofenceCollectionsResponseEntry>,
        "NextToken" next_token: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListGeofenceCollectionsResponseEntry {
        "CollectionName" collection_name: String,
        "Description" description: String,
        "PricingPlan" pricing_plan: PricingPlan,
        "PricingPlanDataSource" pricing_plan_data_source: String,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
    }
}

// ---------------------------------------------------------------------------
// Individual geofences
// ---------------------------------------------------------------------------

model! {
    #[derive(Eq, Hash)]
    pub struct GetGeofenceRequest {
        @http {
            "CollectionName" collection_name: String,
            "GeofenceId" geofence_id: String,
        }
    }
}

model! {
    pub struct GetGeofenceResult {
        "GeofenceId" geofence_id: String,
        "Geometry" geometry: GeofenceGeometry,
        /// `ACTIVE`, `PENDING`, `FAILED`, `DELETED` or `DELETING`.
        "Status" status: String,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
        "GeofenceProperties" geofence_properties: StringMap,
    }
}

map_entries!(GetGeofenceResult: geofence_properties);

model! {
    #[derive(Eq, Hash)]
    pub struct ListGeofencesRequest {
        @http {
            "CollectionName" collection_name: String,
        }
        "NextToken" next_token: String,
        "MaxResults" max_results: i32,
    }
}

model! {
    pub struct ListGeofencesResult {
        "Entries" entries: Vec<ListGeofenceResponseEntry>,
        "NextToken" next_token: String,
    }
}

model! {
    pub struct ListGeofenceResponseEntry {
        "GeofenceId" geofence_id: String,
        "Geometry" geometry: GeofenceGeometry,
        "Status" status: String,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
        "GeofenceProperties" geofence_properties: StringMap,
    }
}

map_entries!(ListGeofenceResponseEntry: geofence_properties);

model! {
    /// Stores a geofence, replacing any geofence with the same id.
    pub struct PutGeofenceRequest {
        @http {
            "CollectionName" collection_name: String,
            "GeofenceId" geofence_id: String,
        }
        "Geometry" geometry: GeofenceGeometry,
        "GeofenceProperties" geofence_properties: StringMap,
    }
}

map_entries!(PutGeofenceRequest: geofence_properties);

model! {
    #[derive(Eq, Hash)]
    pub struct PutGeofenceResult {
        "GeofenceId" geofence_id: String,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
    }
}

// ---------------------------------------------------------------------------
// Forecasts
// ---------------------------------------------------------------------------

model! {
    /// Predicts geofence events for a moving device within a time horizon.
    pub struct ForecastGeofenceEventsRequest {
        @http {
            "CollectionName" collection_name: String,
        }
        "DeviceState" device_state: ForecastGeofenceEventsDeviceState,
        "TimeHorizonMinutes" time_horizon_minutes: f64,
        "DistanceUnit" distance_unit: DistanceUnit,
        "SpeedUnit" speed_unit: SpeedUnit,
        "NextToken" next_token: String,
        "MaxResults" max_results: i32,
    }
}

model! {
    pub struct ForecastGeofenceEventsDeviceState {
        "Position" position: Vec<f64>,
        "Speed" speed: f64,
    }
}

model! {
    pub struct ForecastGeofenceEventsResult {
        "ForecastedEvents" forecasted_events: Vec<ForecastedEvent>,
        "NextToken" next_token: String,
        "DistanceUnit" distance_unit: DistanceUnit,
        "SpeedUnit" speed_unit: SpeedUnit,
    }
}

model! {
    pub struct ForecastedEvent {
        "EventId" event_id: String,
        "GeofenceId" geofence_id: String,
        "IsDeviceInGeofence" is_device_in_geofence: bool,
        "NearestDistance" nearest_distance: f64,
        "EventType" event_type: ForecastedGeofenceEventType,
        "ForecastedBreachTime" forecasted_breach_time: Timestamp,
        "GeofenceProperties" geofence_properties: StringMap,
    }
}

map_entries!(ForecastedEvent: geofence_properties);
