//! Map resources and the rendering assets (tiles, glyphs, sprites, styles)
//! served for them.

use super::{PricingPlan, StringMap, Timestamp};
use crate::coord::{to_tile_coords, CoordError};

model! {
    /// Style and data options of a map resource.
    #[derive(Eq, Hash)]
    pub struct MapConfiguration {
        /// Map style name, e.g. `VectorEsriStreets` or `VectorHereExplore`.
        "Style" style: String,
        /// ISO 3166 alpha-3 country code for disputed borders.
        "PoliticalView" political_view: String,
        /// Extra layers such as `POI`.
        "CustomLayers" custom_layers: Vec<String>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct MapConfigurationUpdate {
        "PoliticalView" political_view: String,
        "CustomLayers" custom_layers: Vec<String>,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct CreateMapRequest {
        "MapName" map_name: String,
        "Configuration" configuration: MapConfiguration,
        "PricingPlan" pricing_plan: PricingPlan,
        "Description" description: String,
        "Tags" tags: StringMap,
    }
}

map_entries!(CreateMapRequest: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct CreateMapResult {
        "MapName" map_name: String,
        "MapArn" map_arn: String,
        "CreateTime" create_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteMapRequest {
        @http {
            "MapName" map_name: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DeleteMapResult {}
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeMapRequest {
        @http {
            "MapName" map_name: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct DescribeMapResult {
        "MapName" map_name: String,
        "MapArn" map_arn: String,
        "PricingPlan" pricing_plan: PricingPlan,
        /// Data provider behind the style, e.g. `Esri` or `Here`.
        "DataSource" data_source: String,
        "Configuration" configuration: MapConfiguration,
        "Description" description: String,
        "Tags" tags: StringMap,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
    }
}

map_entries!(DescribeMapResult: tags);

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateMapRequest {
        @http {
            "MapName" map_name: String,
        }
        "PricingPlan" pricing_plan: PricingPlan,
        "Description" description: String,
        "ConfigurationUpdate" configuration_update: MapConfigurationUpdate,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct UpdateMapResult {
        "MapName" map_name: String,
        "MapArn" map_arn: String,
        "UpdateTime" update_time: Timestamp,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListMapsRequest {
        "MaxResults" max_results: i32,
        "NextToken" next_token: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListMapsResult {
        "Entries" entries: Vec<ListMapsResponseEntry>,
        "NextToken" next_token: String,
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct ListMapsResponseEntry {
        "MapName" map_name: String,
        "Description" description: String,
        "DataSource" data_source: String,
        "PricingPlan" pricing_plan: PricingPlan,
        "CreateTime" create_time: Timestamp,
        "UpdateTime" update_time: Timestamp,
    }
}

// ---------------------------------------------------------------------------
// Rendering assets
// ---------------------------------------------------------------------------

model! {
    /// Fetches a glyph PBF file for a font stack and Unicode range.
    #[derive(Eq, Hash)]
    pub struct GetMapGlyphsRequest {
        @http {
            "MapName" map_name: String,
            /// Comma separated font names, e.g. `Noto Sans Regular,Arial Unicode MS Regular`.
            "FontStack" font_stack: String,
            /// 256-codepoint range, e.g. `0-255.pbf`.
            "FontUnicodeRange" font_unicode_range: String,
            /// API key (`key` query parameter).
            "Key" key: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct GetMapGlyphsResult {
        @http {
            "Blob" blob: Vec<u8>,
            "ContentType" content_type: String,
            "CacheControl" cache_control: String,
        }
    }
}

model! {
    /// Fetches the sprite sheet (`sprites.png`, `sprites@2x.json`, ...) of a map.
    #[derive(Eq, Hash)]
    pub struct GetMapSpritesRequest {
        @http {
            "MapName" map_name: String,
            "FileName" file_name: String,
            "Key" key: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct GetMapSpritesResult {
        @http {
            "Blob" blob: Vec<u8>,
            "ContentType" content_type: String,
            "CacheControl" cache_control: String,
        }
    }
}

model! {
    /// Fetches the Mapbox GL style descriptor of a map.
    #[derive(Eq, Hash)]
    pub struct GetMapStyleDescriptorRequest {
        @http {
            "MapName" map_name: String,
            "Key" key: String,
        }
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct GetMapStyleDescriptorResult {
        @http {
            "Blob" blob: Vec<u8>,
            "ContentType" content_type: String,
            "CacheControl" cache_control: String,
        }
    }
}

model! {
    /// Fetches one vector or raster tile in XYZ Web Mercator addressing.
    #[derive(Eq, Hash)]
    pub struct GetMapTileRequest {
        @http {
            "MapName" map_name: String,
            /// Zoom level.
            "Z" z: String,
            /// Tile column.
            "X" x: String,
            /// Tile row.
            "Y" y: String,
            "Key" key: String,
        }
    }
}

impl GetMapTileRequest {
    /// Builds a tile request for the tile containing a geographic position.
    ///
    /// # Example
    ///
    /// ```
    /// use locationkit::model::GetMapTileRequest;
    ///
    /// let request = GetMapTileRequest::for_position("city", 40.7128, -74.0060, 16).unwrap();
    /// assert_eq!(request.z.as_deref(), Some("16"));
    /// assert_eq!(request.x.as_deref(), Some("19295"));
    /// assert_eq!(request.y.as_deref(), Some("24640"));
    /// ```
    pub fn for_position(
        map_name: impl Into<String>,
        lat: f64,
        lon: f64,
        zoom: u8,
    ) -> Result<Self, CoordError> {
        let tile = to_tile_coords(lat, lon, zoom)?;
        Ok(Self::default()
            .with_map_name(map_name)
            .with_z(tile.z.to_string())
            .with_x(tile.x.to_string())
            .with_y(tile.y.to_string()))
    }
}

model! {
    #[derive(Eq, Hash)]
    pub struct GetMapTileResult {
        @http {
            "Blob" blob: Vec<u8>,
            "ContentType" content_type: String,
            "CacheControl" cache_control: String,
        }
    }
}
