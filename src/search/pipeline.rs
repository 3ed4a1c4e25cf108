use crate::maps::errors::MapsError;
use crate::maps::geocoding::Geocoder;
use crate::maps::places::NearbyPlaces;
use crate::maps::sampling::PlaceSampler;
use crate::search::models::{SearchOutcome, SearchQuery, SearchResult};

/// Geocode, nearby-search, then sample. The two provider calls run one after another.
pub struct SearchPipeline<'a> {
    geocoder: &'a dyn Geocoder,
    places: &'a dyn NearbyPlaces,
    sampler: &'a PlaceSampler,
}

impl<'a> SearchPipeline<'a> {
    pub fn new(
        geocoder: &'a dyn Geocoder,
        places: &'a dyn NearbyPlaces,
        sampler: &'a PlaceSampler,
    ) -> Self {
        Self {
            geocoder,
            places,
            sampler,
        }
    }

    pub async fn run(&self, query: &SearchQuery) -> Result<SearchOutcome, MapsError> {
        let Some(center) = self.geocoder.geocode(&query.location).await? else {
            tracing::info!(
                task = "search",
                location = %query.location,
                outcome = "location_not_found",
            );
            return Ok(SearchOutcome::LocationNotFound);
        };

        let found = self
            .places
            .nearby(center, query.radius, query.place_type)
            .await?;
        let found_count = found.len();
        if found.is_empty() {
            tracing::info!(
                task = "search",
                location = %query.location,
                place_type = %query.place_type,
                radius = query.radius,
                outcome = "no_places_nearby",
            );
            return Ok(SearchOutcome::NoPlacesNearby { center });
        }

        let places = self.sampler.sample(found, query.count);
        tracing::info!(
            task = "search",
            location = %query.location,
            place_type = %query.place_type,
            radius = query.radius,
            requested = query.count,
            found = found_count,
            shown = places.len(),
            outcome = "found",
        );
        Ok(SearchOutcome::Found(SearchResult { center, places }))
    }
}
