use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::sessions::HashMapSessionsStorage;
use crate::{health, http, search};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapSessionsStorage>) -> Router {
    let cors_policy = http::cors(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let api_routes = Router::new()
        .route("/places", get(search::handlers::places))
        .layer(cors_policy);

    Router::new()
        .route("/", get(search::handlers::index))
        .route("/search", post(search::handlers::submit))
        .nest("/health", health_routes)
        .nest("/api", api_routes)
        .with_state(app_context)
        .layer(axum::middleware::from_fn(http::middleware::tracing))
}
