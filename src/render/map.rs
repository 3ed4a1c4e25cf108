use crate::maps::models::{Coordinate, Place};
use crate::render::table::rating_label;
use handlebars::html_escape;
use serde::Serialize;

pub const DEFAULT_ZOOM: u8 = 15;
pub const CENTER_POPUP: &str = "Search Center";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub center_marker: Marker,
    pub clustered_markers: Vec<Marker>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub location: Coordinate,
    /// Trusted HTML: any provider text in it is already escaped.
    pub popup: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<MarkerIcon>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerIcon {
    pub icon: &'static str,
    pub color: &'static str,
}

pub fn build(center: Coordinate, places: &[Place]) -> MapView {
    MapView {
        center,
        zoom: DEFAULT_ZOOM,
        center_marker: Marker {
            location: center,
            popup: CENTER_POPUP.to_string(),
            icon: Some(MarkerIcon {
                icon: "star",
                color: "red",
            }),
        },
        clustered_markers: places
            .iter()
            .map(|place| Marker {
                location: place.location,
                popup: format!(
                    "<b>{}</b><br>Rating: {}",
                    html_escape(&place.name),
                    rating_label(place.rating),
                ),
                icon: None,
            })
            .collect(),
    }
}

impl MapView {
    /// Serializes the view so it can be dropped into an inline `<script>` as a JS literal.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self).map(|json| json.replace('<', "\\u003c"))
    }
}
