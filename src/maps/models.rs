use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Formats the coordinate the way the nearby-search `location` parameter expects it.
    pub fn as_query_param(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

/// Categories of venues a search can be narrowed down to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    #[default]
    Restaurant,
    Cafe,
    Bar,
    Museum,
    Park,
}

impl PlaceType {
    pub const ALL: [PlaceType; 5] = [
        PlaceType::Restaurant,
        PlaceType::Cafe,
        PlaceType::Bar,
        PlaceType::Museum,
        PlaceType::Park,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Restaurant => "restaurant",
            PlaceType::Cafe => "cafe",
            PlaceType::Bar => "bar",
            PlaceType::Museum => "museum",
            PlaceType::Park => "park",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaceType::Restaurant => "Restaurant",
            PlaceType::Cafe => "Cafe",
            PlaceType::Bar => "Bar",
            PlaceType::Museum => "Museum",
            PlaceType::Park => "Park",
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_VICINITY: &str = "Unknown";

/// A single nearby-search hit with every optional provider field already resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    pub name: String,
    pub rating: Option<f64>,
    /// `false` when the provider didn't report opening hours at all.
    pub open_now: bool,
    pub types: Vec<String>,
    pub vicinity: String,
    pub location: Coordinate,
}

/// Envelope shared by the geocoding and nearby-search responses.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// Absent on some proxies and mocks. Only a present, unsuccessful status is an error.
    pub status: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawGeometry {
    pub location: Coordinate,
}

#[derive(Debug, Deserialize)]
pub struct RawGeocodingResult {
    pub geometry: RawGeometry,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawOpeningHours {
    pub open_now: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct RawPlace {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub opening_hours: Option<RawOpeningHours>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
    pub vicinity: Option<String>,
    pub geometry: Option<RawGeometry>,
}

impl RawPlace {
    /// Resolves the provider defaults. Returns `None` for results that can't be put on a map.
    pub fn into_place(self) -> Option<Place> {
        let location = self.geometry?.location;
        Some(Place {
            place_id: self.place_id,
            name: self.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            rating: self.rating,
            open_now: self
                .opening_hours
                .and_then(|hours| hours.open_now)
                .unwrap_or(false),
            types: self.types.unwrap_or_default(),
            vicinity: self.vicinity.unwrap_or_else(|| UNKNOWN_VICINITY.to_string()),
            location,
        })
    }
}
