pub mod errors;
pub mod middleware;
pub mod router;

use crate::cli::Args;
use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tower_http::cors::CorsLayer;

/// CORS policy for the JSON API. The HTML page is same-origin and doesn't need one.
pub fn cors(args: &Args) -> CorsLayer {
    let origins: Vec<HeaderValue> = args
        .allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring malformed CORS origin `{}`.", origin);
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::OPTIONS])
}
