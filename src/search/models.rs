use crate::maps::models::{Coordinate, Place, PlaceType};

#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    pub location: String,
    pub place_type: PlaceType,
    /// Meters, already clamped to the allowed range.
    pub radius: u32,
    /// Upper bound on how many places are kept.
    pub count: usize,
}

/// The sampled places of one successful search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub center: Coordinate,
    pub places: Vec<Place>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    Found(SearchResult),
    LocationNotFound,
    NoPlacesNearby { center: Coordinate },
}

impl SearchOutcome {
    #[cfg(test)]
    pub fn result(&self) -> Option<&SearchResult> {
        match self {
            SearchOutcome::Found(result) => Some(result),
            _ => None,
        }
    }
}
