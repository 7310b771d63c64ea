//! Place index resources and place search.

use super::{PricingPlan, StringMap, Timestamp};

string_enum! {
    /// Whether search results may be stored by the caller.
    pub enum IntendedUse {
        SingleUse => "SingleUse",
        Storage => "Storage",
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DataSourceConfiguration {
        "IntendedUse" intended_use: IntendedUse,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct CreatePlaceIndexRequest {
        "IndexName" index_name: String,
        /// Data provider, e.g. `Esri`, `Grab` or `Here`.
        "DataSource" data_source: String,
        "PricingPlan" pricing_plan: PricingPlan,
        "Description" description: String,
        "DataSourceConfiguration" data_source_configuration: DataSourceConfiguration,
        "Tags" tags: StringMap,
    }
}

map_entries!(CreatePlaceIndexRequest: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct CreatePlaceIndexResult {
        "IndexName" index_name: String,
        "IndexArn" index_arn: String,
        "CreateTime" create_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeletePlaceIndexRequest {
        @http {
            "IndexName" index_name: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeletePlaceIndexResult {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribePlaceIndexRequest {
        @http {
            "IndexName" index_name: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribePlaceIndexResult {
        "IndexName" index_name: String,
        "IndexArn" index_arn: String,
        "PricingPlan" pricing_plan: PricingPlan,
        "Description" description: String,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
        "DataSource" data_source: String,
        "DataSourceConfiguration" data_source_configuration: DataSourceConfiguration,
        "Tags" tags: StringMap,
    }
}

map_entries!(DescribePlaceIndexResult: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct UpdatePlaceIndexRequest {
        @http {
            "IndexName" index_name: String,
        }
        "PricingPlan" pricing_plan: PricingPlan,
        "Description" description: String,
        "DataSourceConfiguration" data_source_configuration: DataSourceConfiguration,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct UpdatePlaceIndexResult {
        "IndexName" index_name: String,
        "IndexArn" index_arn: String,
        "UpdateTime" update_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListPlaceIndexesRequest {
        "MaxResults" max_results: i32,
        "NextToken" next_token: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListPlaceIndexesResult {
        "Entries" entries: Vec<ListPlaceIndexesResponseEntry>,
        "NextToken" next_token: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListPlaceIndexesResponseEntry {
        "IndexName" index_name: String,
        "Description" description: String,
        "DataSource" data_source: String,
        "PricingPlan" pricing_plan: PricingPlan,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
    }
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

model! {
    #[derive(Eq, Hash)]
    pub struct TimeZone {
        /// IANA name, e.g. `America/Los_Angeles`.
        "Name" name: String,
        /// Offset from UTC in seconds.
        "Offset" offset: i32,
    }
}

model! {
    pub struct PlaceGeometry {
        /// `[longitude, latitude]`.
        "Point" point: Vec<f64>,
    }
}

model! {
    /// A geocoded place: an address, point of interest or area.
    pub struct Place {
        /// Full human readable label, e.g. `123 Any Street, Any Town, USA`.
        "Label" label: String,
        "Geometry" geometry: PlaceGeometry,
        "AddressNumber" address_number: String,
        "Street" street: String,
        "Neighborhood" neighborhood: String,
        "Municipality" municipality: String,
        "SubRegion" sub_region: String,
        "Region" region: String,
        /// ISO 3166 alpha-3 country code.
        "Country" country: String,
        "PostalCode" postal_code: String,
        /// `true` when the point was interpolated from an address range.
        "Interpolated" interpolated: bool,
        "TimeZone" time_zone: TimeZone,
        "UnitType" unit_type: String,
        "UnitNumber" unit_number: String,
        "Categories" categories: Vec<String>,
        "SupplementalCategories" supplemental_categories: Vec<String>,
        "SubMunicipality" sub_municipality: String,
    }
}

model! {
    /// Reverse geocoding: the places nearest to a position.
    pub struct SearchPlaceIndexForPositionRequest {
        @http {
            "IndexName" index_name: String,
            "Key" key: String,
        }
        /// `[longitude, latitude]`.
        "Position" position: Vec<f64>,
        /// 1 to 50, service default 50.
        "MaxResults" max_results: i32,
        /// BCP 47 language tag, e.g. `en` or `fr-CA`.
        "Language" language: String,
    }
}

model! {
    pub struct SearchPlaceIndexForPositionResult {
        "Summary" summary: SearchPlaceIndexForPositionSummary,
        "Results" results: Vec<SearchForPositionResult>,
    }
}

model! {
    pub struct SearchPlaceIndexForPositionSummary {
        "Position" position: Vec<f64>,
        "MaxResults" max_results: i32,
        "DataSource" data_source: String,
        "Language" language: String,
    }
}

model! {
    pub struct SearchForPositionResult {
        "Place" place: Place,
        /// Distance in meters from the searched position.
        "Distance" distance: f64,
        "PlaceId" place_id: String,
    }
}

model! {
    /// Geocoding: places matching free text.
    pub struct SearchPlaceIndexForTextRequest {
        @http {
            "IndexName" index_name: String,
            "Key" key: String,
        }
        "Text" text: String,
        /// Prefer results near this `[longitude, latitude]`. Exclusive with `FilterBBox`.
        "BiasPosition" bias_position: Vec<f64>,
        /// `[min_lon, min_lat, max_lon, max_lat]`.
        "FilterBBox" filter_b_box: Vec<f64>,
        /// ISO 3166 alpha-3 country codes.
        "FilterCountries" filter_countries: Vec<String>,
        "MaxResults" max_results: i32,
        "Language" language: String,
        "FilterCategories" filter_categories: Vec<String>,
    }
}

model! {
    pub struct SearchPlaceIndexForTextResult {
        "Summary" summary: SearchPlaceIndexForTextSummary,
        "Results" results: Vec<SearchForTextResult>,
    }
}

model! {
    pub struct SearchPlaceIndexForTextSummary {
        "Text" text: String,
        "BiasPosition" bias_position: Vec<f64>,
        "FilterBBox" filter_b_box: Vec<f64>,
        "FilterCountries" filter_countries: Vec<String>,
        "MaxResults" max_results: i32,
        /// Bounding box enclosing every result.
        "ResultBBox" result_b_box: Vec<f64>,
        "DataSource" data_source: String,
        "Language" language: String,
        "FilterCategories" filter_categories: Vec<String>,
    }
}

model! {
    pub struct SearchForTextResult {
        "Place" place: Place,
        /// Distance in meters from `BiasPosition`, when one was given.
        "Distance" distance: f64,
        /// Match confidence, 0 to 1.
        "Relevance" relevance: f64,
        "PlaceId" place_id: String,
    }
}

model! {
    /// Autocomplete suggestions for partial text.
    pub struct SearchPlaceIndexForSuggestionsRequest {
        @http {
            "IndexName" index_name: String,
            "Key" key: String,
        }
        "Text" text: String,
        "BiasPosition" bias_position: Vec<f64>,
        "FilterBBox" filter_b_box: Vec<f64>,
        "FilterCountries" filter_countries: Vec<String>,
        /// 1 to 15, service default 5.
        "MaxResults" max_results: i32,
        "Language" language: String,
        "FilterCategories" filter_categories: Vec<String>,
    }
}

model! {
    pub struct SearchPlaceIndexForSuggestionsResult {
        "Summary" summary: SearchPlaceIndexForSuggestionsSummary,
        "Results" results: Vec<SearchForSuggestionsResult>,
    }
}

model! {
    pub struct SearchPlaceIndexForSuggestionsSummary {
        "Text" text: String,
        "BiasPosition" bias_position: Vec<f64>,
        "FilterBBox" filter_b_box: Vec<f64>,
        "FilterCountries" filter_countries: Vec<String>,
        "MaxResults" max_results: i32,
        "DataSource" data_source: String,
        "Language" language: String,
        "FilterCategories" filter_categories: Vec<String>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct SearchForSuggestionsResult {
        "Text" text: String,
        /// Pass to `GetPlace` to resolve the suggestion.
        "PlaceId" place_id: String,
        "Categories" categories: Vec<String>,
        "SupplementalCategories" supplemental_categories: Vec<String>,
    }
}

model! {
    /// Resolves a place id returned by a search.
    #[derive(Eq, Hash)]
    pub struct GetPlaceRequest {
        @http {
            "IndexName" index_name: String,
            "PlaceId" place_id: String,
            /// `language` query parameter.
            "Language" language: String,
            "Key" key: String,
        }
    }
}

model! {
    pub struct GetPlaceResult {
        "Place" place: Place,
    }
}
