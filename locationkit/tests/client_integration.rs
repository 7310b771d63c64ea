//! Integration tests for the location client.
//!
//! These tests drive the public client API against an in-memory transport:
//! - Request marshalling for each resource family
//! - Service error mapping and retry behaviour
//! - `NextToken` pagination
//! - Map tile requests built from coordinates
//!
//! Run with: `cargo test --test client_integration`

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use locationkit::client::{
    ClientConfig, HttpMethod, HttpResponse, LocationClient, LocationError, MockHttpClient,
    RetryPolicy, ERROR_TYPE_HEADER,
};
use locationkit::coord::{position, BoundingBox};
use locationkit::model::*;

// ============================================================================
// Helper Functions
// ============================================================================

type MockClient = LocationClient<Arc<MockHttpClient>>;

/// Client with instant retries against a fresh mock transport.
fn mock_client() -> (Arc<MockHttpClient>, MockClient) {
    let mock = Arc::new(MockHttpClient::new());
    let config = ClientConfig::default()
        .with_region("eu-west-1")
        .with_api_key("v1.public.test")
        .with_retry_policy(RetryPolicy::fixed(3, Duration::ZERO));
    let client = LocationClient::with_http_client(config, Arc::clone(&mock));
    (mock, client)
}

fn sent_body(mock: &MockHttpClient, index: usize) -> Value {
    let request = &mock.requests()[index];
    serde_json::from_slice(request.body.as_deref().unwrap_or(b"null")).unwrap()
}

fn error_response(status: u16, code: &str, message: &str) -> HttpResponse {
    HttpResponse::json(status, json!({ "message": message }).to_string())
        .with_header(ERROR_TYPE_HEADER, code)
}

// ============================================================================
// Trackers
// ============================================================================

#[test]
fn test_batch_update_device_position() {
    let (mock, client) = mock_client();
    mock.push_json(200, r#"{"Errors":[]}"#);

    let sample_time = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
    let update = DevicePositionUpdate::default()
        .with_device_id("truck-17")
        .with_position(position(-123.1187, 49.2819))
        .with_sample_time(sample_time)
        .with_accuracy(PositionalAccuracy::default().with_horizontal(12.5))
        .add_position_properties_entry("driver", "ana")
        .unwrap();

    let result = client
        .batch_update_device_position(
            &BatchUpdateDevicePositionRequest::default()
                .with_tracker_name("fleet")
                .with_updates(vec![update]),
        )
        .unwrap();
    assert_eq!(result.errors, Some(vec![]));

    let request = &mock.requests()[0];
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(
        request.url,
        "https://tracking.geo.eu-west-1.amazonaws.com/tracking/v0/trackers/fleet/positions"
    );
    assert_eq!(
        sent_body(&mock, 0),
        json!({
            "Updates": [{
                "DeviceId": "truck-17",
                "SampleTime": "2024-03-01T08:30:00Z",
                "Position": [-123.1187, 49.2819],
                "Accuracy": { "Horizontal": 12.5 },
                "PositionProperties": { "driver": "ana" }
            }]
        })
    );
}

#[test]
fn test_get_device_position_parses_result() {
    let (mock, client) = mock_client();
    mock.push_json(
        200,
        r#"{
            "DeviceId": "truck-17",
            "SampleTime": "2024-03-01T08:30:00Z",
            "ReceivedTime": "2024-03-01T08:30:01.250Z",
            "Position": [-123.1187, 49.2819],
            "PositionProperties": { "driver": "ana" }
        }"#,
    );

    let result = client
        .get_device_position(
            &GetDevicePositionRequest::default()
                .with_tracker_name("fleet")
                .with_device_id("truck-17"),
        )
        .unwrap();

    assert_eq!(result.device_id.as_deref(), Some("truck-17"));
    assert_eq!(result.position, Some(vec![-123.1187, 49.2819]));
    assert_eq!(
        result.sample_time,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap())
    );
    assert_eq!(
        result
            .position_properties
            .as_ref()
            .and_then(|p| p.get("driver"))
            .map(String::as_str),
        Some("ana")
    );

    let request = &mock.requests()[0];
    assert_eq!(request.method, HttpMethod::Get);
    assert!(request.body.is_none());
    assert!(
        !request.url.contains("key="),
        "tracker operations do not take an API key"
    );
}

#[test]
fn test_list_device_positions_with_filter_geometry() {
    let (mock, client) = mock_client();
    mock.push_json(200, r#"{"Entries":[]}"#);

    let square = vec![vec![
        position(0.0, 0.0),
        position(1.0, 0.0),
        position(1.0, 1.0),
        position(0.0, 1.0),
        position(0.0, 0.0),
    ]];
    client
        .list_device_positions(
            &ListDevicePositionsRequest::default()
                .with_tracker_name("fleet")
                .with_filter_geometry(TrackingFilterGeometry::default().with_polygon(square)),
        )
        .unwrap();

    let body = sent_body(&mock, 0);
    assert_eq!(body["FilterGeometry"]["Polygon"][0][2], json!([1.0, 1.0]));
}

// ============================================================================
// Geofences
// ============================================================================

#[test]
fn test_put_geofence_circle() {
    let (mock, client) = mock_client();
    mock.push_json(
        200,
        r#"{"GeofenceId":"depot","CreateTime":"2024-01-01T00:00:00Z","UpdateTime":"2024-01-01T00:00:00Z"}"#,
    );

    let geometry = GeofenceGeometry::default().with_circle(
        Circle::default()
            .with_center(position(-123.1, 49.2))
            .with_radius(250.0),
    );
    let result = client
        .put_geofence(
            &PutGeofenceRequest::default()
                .with_collection_name("zones")
                .with_geofence_id("depot")
                .with_geometry(geometry),
        )
        .unwrap();
    assert_eq!(result.geofence_id.as_deref(), Some("depot"));

    let request = &mock.requests()[0];
    assert_eq!(request.method, HttpMethod::Put);
    assert!(request
        .url
        .ends_with("/geofencing/v0/collections/zones/geofences/depot"));
    assert_eq!(
        sent_body(&mock, 0),
        json!({ "Geometry": { "Circle": { "Center": [-123.1, 49.2], "Radius": 250.0 } } })
    );
}

// ============================================================================
// Maps, places and routes
// ============================================================================

#[test]
fn test_map_tile_for_position() {
    let (mock, client) = mock_client();
    mock.push_response(HttpResponse {
        status: 200,
        headers: vec![
            ("Content-Type".to_string(), "application/vnd.mapbox-vector-tile".to_string()),
            ("Cache-Control".to_string(), "max-age=604800".to_string()),
        ],
        body: vec![0x1a, 0x02, 0x00, 0x01],
    });

    let request = GetMapTileRequest::for_position("city", 40.7128, -74.0060, 16).unwrap();
    let tile = client.get_map_tile(&request).unwrap();

    assert_eq!(tile.blob, Some(vec![0x1a, 0x02, 0x00, 0x01]));
    assert_eq!(
        tile.content_type.as_deref(),
        Some("application/vnd.mapbox-vector-tile")
    );
    assert_eq!(tile.cache_control.as_deref(), Some("max-age=604800"));
    assert_eq!(
        mock.requests()[0].url,
        "https://maps.geo.eu-west-1.amazonaws.com/maps/v0/maps/city/tiles/16/19295/24640?key=v1.public.test"
    );
}

#[test]
fn test_glyph_font_stack_is_encoded() {
    let (mock, client) = mock_client();
    mock.push_response(HttpResponse {
        status: 200,
        headers: vec![("Content-Type".to_string(), "application/x-protobuf".to_string())],
        body: vec![0x0a],
    });

    let glyphs = client
        .get_map_glyphs(
            &GetMapGlyphsRequest::default()
                .with_map_name("city")
                .with_font_stack("Noto Sans Regular")
                .with_font_unicode_range("0-255.pbf"),
        )
        .unwrap();

    assert_eq!(glyphs.blob, Some(vec![0x0a]));
    assert_eq!(glyphs.cache_control, None);
    assert!(mock.requests()[0]
        .url
        .contains("/glyphs/Noto%20Sans%20Regular/0-255.pbf"));
}

#[test]
fn test_search_place_index_for_text() {
    let (mock, client) = mock_client();
    mock.push_json(
        200,
        r#"{
            "Summary": {
                "Text": "coffee",
                "MaxResults": 2,
                "DataSource": "Esri",
                "FilterBBox": [-123.2, 49.1, -122.9, 49.4]
            },
            "Results": [{
                "Place": {
                    "Label": "Cafe, Vancouver, BC, CAN",
                    "Geometry": { "Point": [-123.11, 49.28] },
                    "Categories": ["CoffeeShop"]
                },
                "Relevance": 0.97,
                "PlaceId": "AQAAAFUA"
            }]
        }"#,
    );

    let bbox = BoundingBox::new(-123.2, 49.1, -122.9, 49.4);
    let result = client
        .search_place_index_for_text(
            &SearchPlaceIndexForTextRequest::default()
                .with_index_name("explore")
                .with_text("coffee")
                .with_filter_b_box(bbox.to_vec())
                .with_max_results(2),
        )
        .unwrap();

    let summary = result.summary.unwrap();
    assert_eq!(
        summary.filter_b_box.as_deref().and_then(BoundingBox::from_slice),
        Some(bbox)
    );
    let results = result.results.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].place_id.as_deref(), Some("AQAAAFUA"));
    assert_eq!(
        results[0].place.as_ref().and_then(|p| p.label.as_deref()),
        Some("Cafe, Vancouver, BC, CAN")
    );

    let body = sent_body(&mock, 0);
    assert_eq!(body["Text"], "coffee");
    assert!(body.get("IndexName").is_none());
    assert!(body.get("Key").is_none());
}

#[test]
fn test_calculate_route() {
    let (mock, client) = mock_client();
    mock.push_json(
        200,
        r#"{
            "Legs": [{
                "StartPosition": [-123.11, 49.28],
                "EndPosition": [-122.67, 45.52],
                "Distance": 505.2,
                "DurationSeconds": 18234.5,
                "Steps": []
            }],
            "Summary": {
                "RouteBBox": [-123.11, 45.52, -122.67, 49.28],
                "DataSource": "Here",
                "Distance": 505.2,
                "DurationSeconds": 18234.5,
                "DistanceUnit": "Kilometers"
            }
        }"#,
    );

    let result = client
        .calculate_route(
            &CalculateRouteRequest::default()
                .with_calculator_name("fleet")
                .with_departure_position(position(-123.11, 49.28))
                .with_destination_position(position(-122.67, 45.52))
                .with_travel_mode(TravelMode::Truck)
                .with_distance_unit(DistanceUnit::Kilometers),
        )
        .unwrap();

    let summary = result.summary.unwrap();
    assert_eq!(summary.distance, Some(505.2));
    assert_eq!(summary.distance_unit, Some(DistanceUnit::Kilometers));
    assert_eq!(result.legs.map(|legs| legs.len()), Some(1));

    let body = sent_body(&mock, 0);
    assert_eq!(body["TravelMode"], "Truck");
    assert_eq!(body["DeparturePosition"], json!([-123.11, 49.28]));
}

// ============================================================================
// Errors and retries
// ============================================================================

#[test]
fn test_validation_error_is_not_retried() {
    let (mock, client) = mock_client();
    mock.push_response(
        HttpResponse::json(
            400,
            r#"{"message":"Invalid","reason":"CannotParse","fieldList":[]}"#,
        )
        .with_header(ERROR_TYPE_HEADER, "ValidationException"),
    );

    let result = client.create_map(&CreateMapRequest::default().with_map_name("city"));
    match result {
        Err(LocationError::Validation { reason, .. }) => {
            assert_eq!(reason, Some(ValidationExceptionReason::CannotParse));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(mock.request_count(), 1);
}

#[test]
fn test_throttling_then_success() {
    let (mock, client) = mock_client();
    mock.push_response(error_response(429, "ThrottlingException", "Rate exceeded"));
    mock.push_json(200, r#"{"KeyName":"web","Key":"v1.public.new"}"#);

    let result = client
        .describe_key(&DescribeKeyRequest::default().with_key_name("web"))
        .unwrap();
    assert_eq!(result.key.as_deref(), Some("v1.public.new"));
    assert_eq!(mock.request_count(), 2);
}

#[test]
fn test_conflict_and_access_denied() {
    let (mock, client) = mock_client();
    mock.push_response(error_response(409, "ConflictException", "exists"));
    mock.push_response(error_response(403, "AccessDeniedException", "nope"));

    let create = CreateRouteCalculatorRequest::default()
        .with_calculator_name("fleet")
        .with_data_source("Here");
    assert!(matches!(
        client.create_route_calculator(&create),
        Err(LocationError::Conflict { .. })
    ));
    assert!(matches!(
        client.create_route_calculator(&create),
        Err(LocationError::AccessDenied { .. })
    ));
    assert_eq!(mock.request_count(), 2);
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_paginate_follows_next_token() {
    let (mock, client) = mock_client();
    mock.push_json(
        200,
        r#"{"Entries":[{"TrackerName":"a"},{"TrackerName":"b"}],"NextToken":"t1"}"#,
    );
    mock.push_json(200, r#"{"Entries":[{"TrackerName":"c"}],"NextToken":"t2"}"#);
    mock.push_json(200, r#"{"Entries":[],"NextToken":""}"#);

    let names: Vec<String> = client
        .paginate(ListTrackersRequest::default().with_max_results(2))
        .map(|page| page.unwrap())
        .flat_map(|page| page.entries.unwrap_or_default())
        .filter_map(|entry| entry.tracker_name)
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    assert_eq!(mock.request_count(), 3);
    assert!(sent_body(&mock, 0).get("NextToken").is_none());
    assert_eq!(sent_body(&mock, 1)["NextToken"], "t1");
    assert_eq!(sent_body(&mock, 2)["NextToken"], "t2");
    assert_eq!(sent_body(&mock, 2)["MaxResults"], 2);
}

#[test]
fn test_paginate_stops_after_error() {
    let (mock, client) = mock_client();
    mock.push_json(200, r#"{"Entries":[],"NextToken":"t1"}"#);
    mock.push_response(error_response(404, "ResourceNotFoundException", "gone"));

    let pages: Vec<_> = client
        .paginate(
            ListGeofencesRequest::default().with_collection_name("zones"),
        )
        .collect();

    assert_eq!(pages.len(), 2);
    assert!(pages[0].is_ok());
    assert!(matches!(
        pages[1],
        Err(LocationError::ResourceNotFound { .. })
    ));
    assert_eq!(mock.request_count(), 2);
}

#[test]
fn test_paginate_stops_when_token_repeats() {
    let (mock, client) = mock_client();
    for _ in 0..50 {
        mock.push_json(200, r#"{"Entries":[],"NextToken":"same"}"#);
    }

    let pages: Vec<_> = client.paginate(ListTrackersRequest::default()).collect();

    assert_eq!(pages.len(), 2);
    assert!(pages.iter().all(|page| page.is_ok()));
    assert_eq!(mock.request_count(), 2);
    assert_eq!(sent_body(&mock, 1)["NextToken"], "same");
}

#[test]
fn test_paginate_history_is_single_page_without_token() {
    let (mock, client) = mock_client();
    mock.push_json(200, r#"{"DevicePositions":[]}"#);

    let pages = client
        .paginate(
            GetDevicePositionHistoryRequest::default()
                .with_tracker_name("fleet")
                .with_device_id("truck-17"),
        )
        .count();
    assert_eq!(pages, 1);
}

// ============================================================================
// Keys and tags
// ============================================================================

#[test]
fn test_untag_and_delete_key_query_members() {
    let (mock, client) = mock_client();
    mock.push_json(200, "");
    mock.push_json(200, "{}");

    client
        .untag_resource(
            &UntagResourceRequest::default()
                .with_resource_arn("arn:aws:geo:eu-west-1:123456789012:map/city")
                .with_tag_keys(vec!["team".to_string(), "cost center".to_string()]),
        )
        .unwrap();
    client
        .delete_key(
            &DeleteKeyRequest::default()
                .with_key_name("web")
                .with_force_delete(true),
        )
        .unwrap();

    let requests = mock.requests();
    assert_eq!(
        requests[0].url,
        "https://cp.metadata.geo.eu-west-1.amazonaws.com/tags/arn:aws:geo:eu-west-1:123456789012:map%2Fcity?tagKeys=team&tagKeys=cost+center"
    );
    assert_eq!(requests[0].method, HttpMethod::Delete);
    assert_eq!(
        requests[1].url,
        "https://cp.metadata.geo.eu-west-1.amazonaws.com/metadata/v0/keys/web?forceDelete=true"
    );
}

#[test]
fn test_list_keys_filter_and_timestamps() {
    let (mock, client) = mock_client();
    mock.push_json(
        200,
        r#"{"Entries":[{
            "KeyName": "web",
            "ExpireTime": "2030-01-01T00:00:00Z",
            "CreateTime": "2024-01-01T00:00:00Z",
            "UpdateTime": "2024-02-01T00:00:00Z",
            "Restrictions": { "AllowActions": ["geo:GetMap*"], "AllowResources": ["*"] }
        }]}"#,
    );

    let result = client
        .list_keys(
            &ListKeysRequest::default()
                .with_filter(ApiKeyFilter::default().with_key_status(Status::Active)),
        )
        .unwrap();

    let entry = &result.entries.unwrap()[0];
    assert_eq!(
        entry.expire_time,
        Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(sent_body(&mock, 0), json!({ "Filter": { "KeyStatus": "Active" } }));
}
