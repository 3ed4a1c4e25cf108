use crate::maps::client::GoogleMapsClient;
use crate::maps::errors::MapsError;
use crate::maps::models::{Coordinate, RawGeocodingResult};
use async_trait::async_trait;

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves free text to a coordinate, `None` when the provider knows no such place.
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, MapsError>;
}

#[async_trait]
impl Geocoder for GoogleMapsClient {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, MapsError> {
        let results: Vec<RawGeocodingResult> = self
            .get(&self.geocoding_url, &[("address", address.to_string())])
            .await?;
        Ok(results
            .into_iter()
            .next()
            .map(|result| result.geometry.location))
    }
}
