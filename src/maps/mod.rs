use crate::cli::Args;

pub mod client;
pub mod errors;
pub mod geocoding;
pub mod models;
pub mod places;
pub mod sampling;
#[cfg(test)]
pub mod tests;

use client::GoogleMapsClient;
use errors::MapsError;

pub fn init(args: &Args) -> Result<GoogleMapsClient, MapsError> {
    if args.google_maps_api_key.is_none() {
        tracing::warn!(
            "The `GOOGLE_MAPS_API_KEY` environment variable isn't set. \
            Searches will be rejected by the maps provider."
        );
    }
    let client = GoogleMapsClient::new(args)?;
    tracing::info!(
        geocoding_url = %args.geocoding_url,
        places_url = %args.places_url,
        "Initialized maps provider client."
    );
    Ok(client)
}
