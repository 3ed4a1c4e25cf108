use crate::maps::client::GoogleMapsClient;
use crate::maps::errors::MapsError;
use crate::maps::models::{Coordinate, Place, PlaceType, RawPlace};
use async_trait::async_trait;

#[async_trait]
pub trait NearbyPlaces: Send + Sync {
    /// Lists venues of `place_type` within `radius` meters of `center`, in provider order.
    async fn nearby(
        &self,
        center: Coordinate,
        radius: u32,
        place_type: PlaceType,
    ) -> Result<Vec<Place>, MapsError>;
}

#[async_trait]
impl NearbyPlaces for GoogleMapsClient {
    async fn nearby(
        &self,
        center: Coordinate,
        radius: u32,
        place_type: PlaceType,
    ) -> Result<Vec<Place>, MapsError> {
        let results: Vec<RawPlace> = self
            .get(
                &self.places_url,
                &[
                    ("location", center.as_query_param()),
                    ("radius", radius.to_string()),
                    ("type", place_type.to_string()),
                ],
            )
            .await?;
        let total = results.len();
        let places: Vec<Place> = results.into_iter().filter_map(RawPlace::into_place).collect();
        if places.len() < total {
            tracing::warn!(
                task = "nearby_search",
                dropped = total - places.len(),
                "Dropped nearby-search results without a location."
            );
        }
        Ok(places)
    }
}
