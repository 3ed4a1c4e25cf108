use crate::cli::Args;
use crate::maps::client::GoogleMapsClient;
use crate::maps::geocoding::Geocoder;
use crate::maps::places::NearbyPlaces;
use crate::maps::sampling::PlaceSampler;
use crate::render::page::PageRenderer;
use crate::storage::interface::ISessionStorage;
use crate::storage::sessions::HashMapSessionsStorage;
use handlebars::TemplateError;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
    pub geocoder: Arc<dyn Geocoder>,
    pub places: Arc<dyn NearbyPlaces>,
    pub sampler: PlaceSampler,
    pub pages: PageRenderer,
    pub maps_api_key_configured: bool,
}

pub fn init(
    args: &Args,
    maps_client: GoogleMapsClient,
) -> Result<AppContext<HashMapSessionsStorage>, TemplateError> {
    let maps_client = Arc::new(maps_client);
    with_providers(args, maps_client.clone(), maps_client)
}

pub fn with_providers(
    args: &Args,
    geocoder: Arc<dyn Geocoder>,
    places: Arc<dyn NearbyPlaces>,
) -> Result<AppContext<HashMapSessionsStorage>, TemplateError> {
    Ok(AppContext {
        sessions: HashMapSessionsStorage::new(Duration::from_secs(args.session_ttl_secs)),
        geocoder,
        places,
        sampler: PlaceSampler::new(args.sampling_seed),
        pages: PageRenderer::new()?,
        maps_api_key_configured: args.google_maps_api_key.is_some(),
    })
}
