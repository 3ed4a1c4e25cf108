use crate::maps::models::PlaceType;
use crate::search::consts::{
    DEFAULT_COUNT, DEFAULT_LOCATION, DEFAULT_RADIUS, MAX_COUNT, MAX_LOCATION_LENGTH, MAX_RADIUS,
    MIN_COUNT, MIN_RADIUS,
};
use crate::search::models::SearchQuery;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Fields of the search form. Also accepted as query parameters by the JSON API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub location: String,
    pub place_type: PlaceType,
    pub radius: u32,
    pub count: usize,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            place_type: PlaceType::default(),
            radius: DEFAULT_RADIUS,
            count: DEFAULT_COUNT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InvalidSearch {
    #[error("Please tell us where you are.")]
    EmptyLocation,
    #[error("That place name is too long.")]
    LocationTooLong,
}

impl SearchForm {
    /// Validates the location and pulls the numeric inputs into their slider ranges.
    pub fn to_query(&self) -> Result<SearchQuery, InvalidSearch> {
        let location = self.location.trim();
        if location.is_empty() {
            return Err(InvalidSearch::EmptyLocation);
        }
        if location.graphemes(true).count() > MAX_LOCATION_LENGTH {
            tracing::info!(
                "Rejecting a search because the location is too long: \
                {} symbols when at most {} is allowed.",
                location.graphemes(true).count(),
                MAX_LOCATION_LENGTH,
            );
            return Err(InvalidSearch::LocationTooLong);
        }
        Ok(SearchQuery {
            location: location.to_string(),
            place_type: self.place_type,
            radius: self.radius.clamp(MIN_RADIUS, MAX_RADIUS),
            count: self.count.clamp(MIN_COUNT, MAX_COUNT),
        })
    }
}
