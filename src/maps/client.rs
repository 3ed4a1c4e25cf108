use crate::cli::Args;
use crate::maps::errors::MapsError;
use crate::maps::models::ApiResponse;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Thin wrapper around the Google Maps web service endpoints.
#[derive(Clone)]
pub struct GoogleMapsClient {
    pub(crate) http: Client,
    pub(crate) api_key: String,
    pub(crate) geocoding_url: Url,
    pub(crate) places_url: Url,
}

impl GoogleMapsClient {
    pub fn new(args: &Args) -> Result<Self, MapsError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(args.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: args.google_maps_api_key.clone().unwrap_or_default(),
            geocoding_url: args.geocoding_url.clone(),
            places_url: args.places_url.clone(),
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &Url,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, MapsError> {
        let response: ApiResponse<T> = self
            .http
            .get(url.clone())
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        MapsError::check_status(response.status.as_deref(), response.error_message)?;
        Ok(response.results)
    }
}
