//! Routing table: every request shape bound to its method, host prefix and
//! path, plus one named [`LocationClient`] method per operation.

use super::error::LocationError;
use super::http::{HttpClient, HttpMethod, HttpResponse};
use super::route::*;
use super::signer::RequestSigner;
use super::LocationClient;
use crate::model::*;

/// Declares operations.
///
/// `Name: Method PREFIX [segments] query(...) @key as blob;` where segments
/// are string literals or `{field}` URI members, `query(...)` maps query
/// parameter names to fields, `@key` marks operations that accept an API key
/// and `as blob` marks results read from the raw body and headers.
macro_rules! operations {
    (@flag) => { false };
    (@flag key) => { true };

    (@segment $route:ident $request:ident { $field:ident }) => {
        $route.member($request.$field.as_ref(), stringify!($field))?
    };
    (@segment $route:ident $request:ident $literal:literal) => {
        $route.segment($literal)
    };

    (@decode $response:ident) => {
        from_json_body(&$response.body)
    };
    (@decode $response:ident blob) => {{
        let content_type = $response.header("Content-Type").map(str::to_string);
        let cache_control = $response.header("Cache-Control").map(str::to_string);
        Ok(Self {
            blob: Some($response.body),
            content_type,
            cache_control,
        })
    }};

    (
        $(
            $op:ident : $method:ident $prefix:ident [ $($seg:tt),+ $(,)? ]
            $( query ( $($qname:literal = $qfield:ident),+ $(,)? ) )?
            $( @ $keyed:ident )?
            $( as $kind:ident )?
            ;
        )*
    ) => {
        ::paste::paste! {
            $(
                impl Operation for [<$op Request>] {
                    type Output = [<$op Result>];
                    const NAME: &'static str = stringify!($op);
                    const ACCEPTS_API_KEY: bool = operations!(@flag $($keyed)?);

                    fn route(&self) -> Result<Route, LocationError> {
                        let request = self;
                        let route = Route::new(HttpMethod::$method, $prefix);
                        $( let route = operations!(@segment route request $seg); )+
                        $($( let route = route.query($qname, request.$qfield.as_ref()); )+)?
                        Ok(route)
                    }
                }

                impl FromResponse for [<$op Result>] {
                    fn from_response(response: HttpResponse) -> Result<Self, LocationError> {
                        operations!(@decode response $($kind)?)
                    }
                }

                impl<C: HttpClient, S: RequestSigner> LocationClient<C, S> {
                    #[doc = concat!("Calls `", stringify!($op), "`.")]
                    pub fn [<$op:snake>](
                        &self,
                        request: &[<$op Request>],
                    ) -> Result<[<$op Result>], LocationError> {
                        self.execute(request)
                    }
                }
            )*
        }
    };
}

operations! {
    // Trackers
    AssociateTrackerConsumer: Post CP_TRACKING ["tracking", "v0", "trackers", {tracker_name}, "consumers"];
    DisassociateTrackerConsumer: Delete CP_TRACKING ["tracking", "v0", "trackers", {tracker_name}, "consumers", {consumer_arn}];
    ListTrackerConsumers: Post CP_TRACKING ["tracking", "v0", "trackers", {tracker_name}, "list-consumers"];
    CreateTracker: Post CP_TRACKING ["tracking", "v0", "trackers"];
    DeleteTracker: Delete CP_TRACKING ["tracking", "v0", "trackers", {tracker_name}];
    DescribeTracker: Get CP_TRACKING ["tracking", "v0", "trackers", {tracker_name}];
    UpdateTracker: Patch CP_TRACKING ["tracking", "v0", "trackers", {tracker_name}];
    ListTrackers: Post CP_TRACKING ["tracking", "v0", "list-trackers"];
    BatchDeleteDevicePositionHistory: Post TRACKING ["tracking", "v0", "trackers", {tracker_name}, "delete-positions"];
    BatchGetDevicePosition: Post TRACKING ["tracking", "v0", "trackers", {tracker_name}, "get-positions"];
    BatchUpdateDevicePosition: Post TRACKING ["tracking", "v0", "trackers", {tracker_name}, "positions"];
    GetDevicePosition: Get TRACKING ["tracking", "v0", "trackers", {tracker_name}, "devices", {device_id}, "positions", "latest"];
    GetDevicePositionHistory: Post TRACKING ["tracking", "v0", "trackers", {tracker_name}, "devices", {device_id}, "list-positions"];
    ListDevicePositions: Post TRACKING ["tracking", "v0", "trackers", {tracker_name}, "list-positions"];
    VerifyDevicePosition: Post TRACKING ["tracking", "v0", "trackers", {tracker_name}, "positions", "verify"];

    // Geofence collections
    CreateGeofenceCollection: Post CP_GEOFENCING ["geofencing", "v0", "collections"];
    DeleteGeofenceCollection: Delete CP_GEOFENCING ["geofencing", "v0", "collections", {collection_name}];
    DescribeGeofenceCollection: Get CP_GEOFENCING ["geofencing", "v0", "collections", {collection_name}];
    UpdateGeofenceCollection: Patch CP_GEOFENCING ["geofencing", "v0", "collections", {collection_name}];
    ListGeofenceCollections: Post CP_GEOFENCING ["geofencing", "v0", "list-collections"];
    BatchDeleteGeofence: Post GEOFENCING ["geofencing", "v0", "collections", {collection_name}, "delete-geofences"];
    BatchEvaluateGeofences: Post GEOFENCING ["geofencing", "v0", "collections", {collection_name}, "positions"];
    BatchPutGeofence: Post GEOFENCING ["geofencing", "v0", "collections", {collection_name}, "put-geofences"];
    GetGeofence: Get GEOFENCING ["geofencing", "v0", "collections", {collection_name}, "geofences", {geofence_id}];
    PutGeofence: Put GEOFENCING ["geofencing", "v0", "collections", {collection_name}, "geofences", {geofence_id}];
    ListGeofences: Post GEOFENCING ["geofencing", "v0", "collections", {collection_name}, "list-geofences"];
    ForecastGeofenceEvents: Post GEOFENCING ["geofencing", "v0", "collections", {collection_name}, "forecast-geofence-events"];

    // Maps
    CreateMap: Post CP_MAPS ["maps", "v0", "maps"];
    DeleteMap: Delete CP_MAPS ["maps", "v0", "maps", {map_name}];
    DescribeMap: Get CP_MAPS ["maps", "v0", "maps", {map_name}];
    UpdateMap: Patch CP_MAPS ["maps", "v0", "maps", {map_name}];
    ListMaps: Post CP_MAPS ["maps", "v0", "list-maps"];
    GetMapGlyphs: Get MAPS ["maps", "v0", "maps", {map_name}, "glyphs", {font_stack}, {font_unicode_range}]
        query("key" = key) @key as blob;
    GetMapSprites: Get MAPS ["maps", "v0", "maps", {map_name}, "sprites", {file_name}]
        query("key" = key) @key as blob;
    GetMapStyleDescriptor: Get MAPS ["maps", "v0", "maps", {map_name}, "style-descriptor"]
        query("key" = key) @key as blob;
    GetMapTile: Get MAPS ["maps", "v0", "maps", {map_name}, "tiles", {z}, {x}, {y}]
        query("key" = key) @key as blob;

    // Place indexes
    CreatePlaceIndex: Post CP_PLACES ["places", "v0", "indexes"];
    DeletePlaceIndex: Delete CP_PLACES ["places", "v0", "indexes", {index_name}];
    DescribePlaceIndex: Get CP_PLACES ["places", "v0", "indexes", {index_name}];
    UpdatePlaceIndex: Patch CP_PLACES ["places", "v0", "indexes", {index_name}];
    ListPlaceIndexes: Post CP_PLACES ["places", "v0", "list-indexes"];
    SearchPlaceIndexForPosition: Post PLACES ["places", "v0", "indexes", {index_name}, "search", "position"]
        query("key" = key) @key;
    SearchPlaceIndexForText: Post PLACES ["places", "v0", "indexes", {index_name}, "search", "text"]
        query("key" = key) @key;
    SearchPlaceIndexForSuggestions: Post PLACES ["places", "v0", "indexes", {index_name}, "search", "suggestions"]
        query("key" = key) @key;
    GetPlace: Get PLACES ["places", "v0", "indexes", {index_name}, "places", {place_id}]
        query("language" = language, "key" = key) @key;

    // Route calculators
    CreateRouteCalculator: Post CP_ROUTES ["routes", "v0", "calculators"];
    DeleteRouteCalculator: Delete CP_ROUTES ["routes", "v0", "calculators", {calculator_name}];
    DescribeRouteCalculator: Get CP_ROUTES ["routes", "v0", "calculators", {calculator_name}];
    UpdateRouteCalculator: Patch CP_ROUTES ["routes", "v0", "calculators", {calculator_name}];
    ListRouteCalculators: Post CP_ROUTES ["routes", "v0", "list-calculators"];
    CalculateRoute: Post ROUTES ["routes", "v0", "calculators", {calculator_name}, "calculate", "route"]
        query("key" = key) @key;
    CalculateRouteMatrix: Post ROUTES ["routes", "v0", "calculators", {calculator_name}, "calculate", "route-matrix"]
        query("key" = key) @key;

    // API keys
    CreateKey: Post CP_METADATA ["metadata", "v0", "keys"];
    DescribeKey: Get CP_METADATA ["metadata", "v0", "keys", {key_name}];
    UpdateKey: Patch CP_METADATA ["metadata", "v0", "keys", {key_name}];
    DeleteKey: Delete CP_METADATA ["metadata", "v0", "keys", {key_name}]
        query("forceDelete" = force_delete);
    ListKeys: Post CP_METADATA ["metadata", "v0", "list-keys"];

    // Tags
    ListTagsForResource: Get CP_METADATA ["tags", {resource_arn}];
    TagResource: Post CP_METADATA ["tags", {resource_arn}];
    UntagResource: Delete CP_METADATA ["tags", {resource_arn}]
        query("tagKeys" = tag_keys);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route_of<O: Operation>(request: &O) -> Route {
        request.route().unwrap()
    }

    #[test]
    fn test_tracker_routes() {
        let route = route_of(&CreateTrackerRequest::default().with_tracker_name("fleet"));
        assert_eq!(route.method, HttpMethod::Post);
        assert_eq!(route.host_prefix, "cp.tracking.");
        assert_eq!(route.path(), "/tracking/v0/trackers");

        let route = route_of(
            &GetDevicePositionRequest::default()
                .with_tracker_name("fleet")
                .with_device_id("truck-17"),
        );
        assert_eq!(route.method, HttpMethod::Get);
        assert_eq!(route.host_prefix, "tracking.");
        assert_eq!(
            route.path(),
            "/tracking/v0/trackers/fleet/devices/truck-17/positions/latest"
        );
    }

    #[test]
    fn test_missing_uri_member_is_reported_by_field() {
        let result = GetDevicePositionRequest::default()
            .with_tracker_name("fleet")
            .route();
        assert!(matches!(
            result,
            Err(LocationError::MissingParameter("device_id"))
        ));
    }

    #[test]
    fn test_geofence_put_uses_put() {
        let route = route_of(
            &PutGeofenceRequest::default()
                .with_collection_name("zones")
                .with_geofence_id("depot"),
        );
        assert_eq!(route.method, HttpMethod::Put);
        assert_eq!(route.host_prefix, "geofencing.");
        assert_eq!(route.path(), "/geofencing/v0/collections/zones/geofences/depot");
    }

    #[test]
    fn test_map_tile_route_and_key() {
        let request = GetMapTileRequest::default()
            .with_map_name("city")
            .with_z("16")
            .with_x("19295")
            .with_y("24640")
            .with_key("v1.public.abc");
        let route = route_of(&request);
        assert_eq!(route.host_prefix, "maps.");
        assert_eq!(route.path(), "/maps/v0/maps/city/tiles/16/19295/24640");
        assert_eq!(
            route.query,
            vec![("key".to_string(), "v1.public.abc".to_string())]
        );
        assert!(GetMapTileRequest::ACCEPTS_API_KEY);
        assert!(!CreateMapRequest::ACCEPTS_API_KEY);
    }

    #[test]
    fn test_get_place_query_order() {
        let route = route_of(
            &GetPlaceRequest::default()
                .with_index_name("explore")
                .with_place_id("AQAAAFUAw")
                .with_language("fr")
                .with_key("k"),
        );
        assert_eq!(route.method, HttpMethod::Get);
        assert_eq!(route.path(), "/places/v0/indexes/explore/places/AQAAAFUAw");
        assert_eq!(
            route.query,
            vec![
                ("language".to_string(), "fr".to_string()),
                ("key".to_string(), "k".to_string()),
            ]
        );
    }

    #[test]
    fn test_route_matrix_path() {
        let route = route_of(&CalculateRouteMatrixRequest::default().with_calculator_name("fleet"));
        assert_eq!(route.host_prefix, "routes.");
        assert_eq!(
            route.path(),
            "/routes/v0/calculators/fleet/calculate/route-matrix"
        );
    }

    #[test]
    fn test_key_and_tag_routes() {
        let route = route_of(
            &DeleteKeyRequest::default()
                .with_key_name("web")
                .with_force_delete(true),
        );
        assert_eq!(route.method, HttpMethod::Delete);
        assert_eq!(route.host_prefix, "cp.metadata.");
        assert_eq!(route.path(), "/metadata/v0/keys/web");
        assert_eq!(
            route.query,
            vec![("forceDelete".to_string(), "true".to_string())]
        );

        let arn = "arn:aws:geo:us-east-1:123456789012:tracker/fleet";
        let route = route_of(
            &UntagResourceRequest::default()
                .with_resource_arn(arn)
                .with_tag_keys(vec!["a".to_string(), "b".to_string()]),
        );
        assert_eq!(route.segments, vec!["tags".to_string(), arn.to_string()]);
        assert_eq!(route.query.len(), 2);
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(ListTrackersRequest::NAME, "ListTrackers");
        assert_eq!(
            SearchPlaceIndexForSuggestionsRequest::NAME,
            "SearchPlaceIndexForSuggestions"
        );
    }

    #[test]
    fn test_blob_result_from_raw_response() {
        let response = HttpResponse {
            status: 200,
            headers: vec![
                ("content-type".to_string(), "application/x-protobuf".to_string()),
                ("cache-control".to_string(), "max-age=86400".to_string()),
            ],
            body: vec![0x1a, 0x2b],
        };
        let result = GetMapTileResult::from_response(response).unwrap();
        assert_eq!(result.blob, Some(vec![0x1a, 0x2b]));
        assert_eq!(result.content_type.as_deref(), Some("application/x-protobuf"));
        assert_eq!(result.cache_control.as_deref(), Some("max-age=86400"));
    }

    #[test]
    fn test_empty_result_accepts_empty_body() {
        let result = DeleteTrackerResult::from_response(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: Vec::new(),
        })
        .unwrap();
        assert_eq!(result, DeleteTrackerResult::default());
    }
}
