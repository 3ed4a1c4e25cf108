use crate::maps::models::Place;
use serde::Serialize;

pub const COLUMNS: [&str; 5] = ["Name", "Rating", "Open Now?", "Types", "Vicinity"];
pub const MISSING_RATING: &str = "N/A";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub rating: String,
    pub open_now: &'static str,
    pub types: String,
    pub vicinity: String,
}

/// Keeps the trailing `.0` of whole ratings, so `4.0` doesn't read as `4`.
pub fn rating_label(rating: Option<f64>) -> String {
    rating.map_or_else(|| MISSING_RATING.to_string(), |rating| format!("{rating:?}"))
}

pub fn open_now_label(open_now: bool) -> &'static str {
    if open_now {
        "Yes"
    } else {
        "No"
    }
}

/// One row per place, in the order the places were sampled.
pub fn present(places: &[Place]) -> TableView {
    TableView {
        columns: COLUMNS.to_vec(),
        rows: places
            .iter()
            .map(|place| TableRow {
                name: place.name.clone(),
                link: place.place_id.as_ref().map(|place_id| {
                    format!("https://www.google.com/maps/place/?q=place_id:{place_id}")
                }),
                rating: rating_label(place.rating),
                open_now: open_now_label(place.open_now),
                types: place.types.join(", "),
                vicinity: place.vicinity.clone(),
            })
            .collect(),
    }
}
