//! Route calculator resources, routes and route matrices.

use super::{DistanceUnit, PricingPlan, StringMap, Timestamp};

string_enum! {
    /// Mode of transport for route calculation.
    pub enum TravelMode {
        Car => "Car",
        Truck => "Truck",
        Walking => "Walking",
        Bicycle => "Bicycle",
        Motorcycle => "Motorcycle",
    }
}

string_enum! {
    pub enum DimensionUnit {
        Meters => "Meters",
        Feet => "Feet",
    }
}

string_enum! {
    pub enum VehicleWeightUnit {
        Kilograms => "Kilograms",
        Pounds => "Pounds",
    }
}

string_enum! {
    /// Why one cell of a route matrix has no route.
    pub enum RouteMatrixErrorCode {
        RouteNotFound => "RouteNotFound",
        RouteTooLong => "RouteTooLong",
        PositionsNotFound => "PositionsNotFound",
        DestinationPositionNotFound => "DestinationPositionNotFound",
        DeparturePositionNotFound => "DeparturePositionNotFound",
        OtherValidationError => "OtherValidationError",
    }
}

// ---------------------------------------------------------------------------
// Calculator lifecycle
// ---------------------------------------------------------------------------

model! {
    #[derive(Eq, Hash)]
    pub struct CreateRouteCalculatorRequest {
        "CalculatorName" calculator_name: String,
        /// Data provider, e.g. `Esri`, `Grab` or `Here`.
        "DataSource" data_source: String,
        "PricingPlan" pricing_plan: PricingPlan,
        "Description" description: String,
        "Tags" tags: StringMap,
    }
}

map_entries!(CreateRouteCalculatorRequest: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct CreateRouteCalculatorResult {
        "CalculatorName" calculator_name: String,
        "CalculatorArn" calculator_arn: String,
        "CreateTime" create_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteRouteCalculatorRequest {
        @http {
            "CalculatorName" calculator_name: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteRouteCalculatorResult {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeRouteCalculatorRequest {
        @http {
            "CalculatorName" calculator_name: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeRouteCalculatorResult {
        "CalculatorName" calculator_name: String,
        "CalculatorArn" calculator_arn: String,
        "PricingPlan" pricing_plan: PricingPlan,
        "Description" description: String,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
        "DataSource" data_source: String,
        "Tags" tags: StringMap,
    }
}

map_entries!(DescribeRouteCalculatorResult: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateRouteCalculatorRequest {
        @http {
            "CalculatorName" calculator_name: String,
        }
        "PricingPlan" pricing_plan: PricingPlan,
        "Description" description: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateRouteCalculatorResult {
        "CalculatorName" calculator_name: String,
        "CalculatorArn" calculator_arn: String,
        "UpdateTime" update_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListRouteCalculatorsRequest {
        "MaxResults" max_results: i32,
        "NextToken" next_token: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListRouteCalculatorsResult {
        "Entries" entries: Vec<ListRouteCalculatorsResponseEntry>,
        "NextToken" next_token: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListRouteCalculatorsResponseEntry {
        "CalculatorName" calculator_name: String,
        "Description" description: String,
        "DataSource" data_source: String,
        "PricingPlan" pricing_plan: PricingPlan,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
    }
}

// ---------------------------------------------------------------------------
// Travel options
// ---------------------------------------------------------------------------

model! {
    #[derive(Eq, Hash)]
    pub struct CalculateRouteCarModeOptions {
        "AvoidFerries" avoid_ferries: bool,
        "AvoidTolls" avoid_tolls: bool,
    }
}

model! {
    pub struct CalculateRouteTruckModeOptions {
        "AvoidFerries" avoid_ferries: bool,
        "AvoidTolls" avoid_tolls: bool,
        "Dimensions" dimensions: TruckDimensions,
        "Weight" weight: TruckWeight,
    }
}

model! {
    pub struct TruckDimensions {
        "Length" length: f64,
        "Height" height: f64,
        "Width" width: f64,
        "Unit" unit: DimensionUnit,
    }
}

model! {
    pub struct TruckWeight {
        "Total" total: f64,
        "Unit" unit: VehicleWeightUnit,
    }
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

model! {
    /// Calculates a route between a departure and a destination position,
    /// optionally through up to 23 waypoints.
    pub struct CalculateRouteRequest {
        @http {
            "CalculatorName" calculator_name: String,
            "Key" key: String,
        }
        /// `[longitude, latitude]`; snapped to the nearest road when off-road.
        "DeparturePosition" departure_position: Vec<f64>,
        "DestinationPosition" destination_position: Vec<f64>,
        "WaypointPositions" waypoint_positions: Vec<Vec<f64>>,
        /// Service default `Car`.
        "TravelMode" travel_mode: TravelMode,
        /// Exclusive with `DepartNow`.
        "DepartureTime" departure_time: Timestamp,
        "DepartNow" depart_now: bool,
        /// Service default `Kilometers`.
        "DistanceUnit" distance_unit: DistanceUnit,
        "IncludeLegGeometry" include_leg_geometry: bool,
        "CarModeOptions" car_mode_options: CalculateRouteCarModeOptions,
        "TruckModeOptions" truck_mode_options: CalculateRouteTruckModeOptions,
    }
}

model! {
    pub struct CalculateRouteResult {
        /// One leg per consecutive pair of departure, waypoints and destination.
        "Legs" legs: Vec<Leg>,
        "Summary" summary: CalculateRouteSummary,
    }
}

model! {
    pub struct Leg {
        "StartPosition" start_position: Vec<f64>,
        "EndPosition" end_position: Vec<f64>,
        "Distance" distance: f64,
        "DurationSeconds" duration_seconds: f64,
        "Geometry" geometry: LegGeometry,
        "Steps" steps: Vec<Step>,
    }
}

model! {
    pub struct LegGeometry {
        "LineString" line_string: Vec<Vec<f64>>,
    }
}

model! {
    pub struct Step {
        "StartPosition" start_position: Vec<f64>,
        "EndPosition" end_position: Vec<f64>,
        "Distance" distance: f64,
        "DurationSeconds" duration_seconds: f64,
        /// Index of the step's first point in the leg's `LineString`.
        "GeometryOffset" geometry_offset: i32,
    }
}

model! {
    pub struct CalculateRouteSummary {
        /// `[min_lon, min_lat, max_lon, max_lat]` of the whole route.
        "RouteBBox" route_b_box: Vec<f64>,
        "DataSource" data_source: String,
        "Distance" distance: f64,
        "DurationSeconds" duration_seconds: f64,
        "DistanceUnit" distance_unit: DistanceUnit,
    }
}

model! {
    /// Calculates every route from each departure to each destination.
    ///
    /// The result has `departures × destinations` cells in row-major order.
    pub struct CalculateRouteMatrixRequest {
        @http {
            "CalculatorName" calculator_name: String,
            "Key" key: String,
        }
        "DeparturePositions" departure_positions: Vec<Vec<f64>>,
        "DestinationPositions" destination_positions: Vec<Vec<f64>>,
        "TravelMode" travel_mode: TravelMode,
        "DepartureTime" departure_time: Timestamp,
        "DepartNow" depart_now: bool,
        "DistanceUnit" distance_unit: DistanceUnit,
        "CarModeOptions" car_mode_options: CalculateRouteCarModeOptions,
        "TruckModeOptions" truck_mode_options: CalculateRouteTruckModeOptions,
    }
}

model! {
    pub struct CalculateRouteMatrixResult {
        /// Row `i`, column `j` is the route from departure `i` to destination `j`.
        "RouteMatrix" route_matrix: Vec<Vec<RouteMatrixEntry>>,
        "SnappedDeparturePositions" snapped_departure_positions: Vec<Vec<f64>>,
        "SnappedDestinationPositions" snapped_destination_positions: Vec<Vec<f64>>,
        "Summary" summary: CalculateRouteMatrixSummary,
    }
}

model! {
    pub struct RouteMatrixEntry {
        "Distance" distance: f64,
        "DurationSeconds" duration_seconds: f64,
        "Error" error: RouteMatrixEntryError,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct RouteMatrixEntryError {
        "Code" code: RouteMatrixErrorCode,
        "Message" message: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct CalculateRouteMatrixSummary {
        "DataSource" data_source: String,
        "RouteCount" route_count: i32,
        "ErrorCount" error_count: i32,
        "DistanceUnit" distance_unit: DistanceUnit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_calculate_route_request_body() {
        let request = CalculateRouteRequest::default()
            .with_calculator_name("trucks")
            .with_departure_position(vec![-123.115, 49.285])
            .with_destination_position(vec![-122.906, 49.206])
            .with_waypoint_positions(vec![vec![-123.0, 49.25]])
            .with_travel_mode(TravelMode::Truck)
            .with_departure_time(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
            .with_truck_mode_options(
                CalculateRouteTruckModeOptions::default()
                    .with_avoid_tolls(true)
                    .with_weight(
                        TruckWeight::default()
                            .with_total(12000.0)
                            .with_unit(VehicleWeightUnit::Kilograms),
                    ),
            );

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("CalculatorName").is_none());
        assert_eq!(json["TravelMode"], "Truck");
        assert_eq!(json["DepartureTime"], "2024-01-02T03:04:05Z");
        assert_eq!(json["TruckModeOptions"]["Weight"]["Unit"], "Kilograms");
        assert_eq!(json["WaypointPositions"][0][1], 49.25);
    }

    #[test]
    fn test_calculate_route_result_parses() {
        let json = r#"{
            "Legs": [{
                "StartPosition": [-123.115, 49.285],
                "EndPosition": [-122.906, 49.206],
                "Distance": 18.2,
                "DurationSeconds": 1340.5,
                "Steps": [
                    { "StartPosition": [-123.115, 49.285], "EndPosition": [-123.0, 49.25],
                      "Distance": 9.1, "DurationSeconds": 600.0, "GeometryOffset": 0 },
                    { "StartPosition": [-123.0, 49.25], "EndPosition": [-122.906, 49.206],
                      "Distance": 9.1, "DurationSeconds": 740.5, "GeometryOffset": 12 }
                ]
            }],
            "Summary": {
                "RouteBBox": [-123.115, 49.206, -122.906, 49.285],
                "DataSource": "Esri",
                "Distance": 18.2,
                "DurationSeconds": 1340.5,
                "DistanceUnit": "Kilometers"
            }
        }"#;
        let result: CalculateRouteResult = serde_json::from_str(json).unwrap();
        let steps = result.legs.as_ref().unwrap()[0].steps.as_ref().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].geometry_offset, Some(12));
        assert_eq!(
            result.summary.unwrap().distance_unit,
            Some(DistanceUnit::Kilometers)
        );
    }

    #[test]
    fn test_route_matrix_cell_errors() {
        let json = r#"{
            "RouteMatrix": [[
                { "Distance": 4.2, "DurationSeconds": 300.0 },
                { "Error": { "Code": "RouteTooLong", "Message": "too far" } }
            ]],
            "Summary": { "DataSource": "Here", "RouteCount": 2, "ErrorCount": 1, "DistanceUnit": "Miles" }
        }"#;
        let result: CalculateRouteMatrixResult = serde_json::from_str(json).unwrap();
        let row = &result.route_matrix.as_ref().unwrap()[0];
        assert_eq!(row[0].distance, Some(4.2));
        assert_eq!(
            row[1].error.as_ref().unwrap().code,
            Some(RouteMatrixErrorCode::RouteTooLong)
        );
        assert_eq!(result.summary.unwrap().error_count, Some(1));
    }
}
