use clap::Parser;
use std::net::SocketAddr;
use url::Url;

pub const DEFAULT_GEOCODING_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const DEFAULT_PLACES_URL: &str =
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json";

#[derive(Debug, Parser)]
#[command(name = "near-me")]
#[command(about = "Finds a few random places near a location and puts them on a map")]
pub struct Args {
    #[arg(long, env)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub google_maps_api_key: Option<String>,
    #[arg(long, env)]
    #[arg(default_value = DEFAULT_GEOCODING_URL)]
    pub geocoding_url: Url,
    #[arg(long, env)]
    #[arg(default_value = DEFAULT_PLACES_URL)]
    pub places_url: Url,
    #[arg(long, env)]
    #[arg(default_value_t = 10)]
    pub request_timeout_secs: u64,
    /// Makes place sampling reproducible.
    #[arg(long, env)]
    pub sampling_seed: Option<u64>,
    #[arg(long, env)]
    #[arg(default_value_t = 3600)]
    pub session_ttl_secs: u64,
    /// Comma-separated list of origins allowed to call the JSON API.
    #[arg(long, env)]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: String,
}
