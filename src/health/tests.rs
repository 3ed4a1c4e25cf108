use crate::cli::tests::fake_args;
use crate::health::responses::HealthCheckResponse;
use crate::http::tests::{test_server, test_server_with, StubMaps};
use crate::maps::models::{Coordinate, PlaceType};
use crate::render::tests::fake_place;

#[tokio::test]
async fn test_health_check() {
    let server = test_server();

    let response = server.get("/health/check").await;

    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse {
        error: false,
        maps_api_key_configured: true,
        active_sessions: 0,
    });
}

#[tokio::test]
async fn test_health_check_without_api_key() {
    let mut args = fake_args();
    args.google_maps_api_key = None;
    let server = test_server_with(&args, StubMaps::default());

    let response = server.get("/health/check").await;

    response.assert_status_ok();
    response.assert_json(&HealthCheckResponse {
        error: false,
        maps_api_key_configured: false,
        active_sessions: 0,
    });
}

#[tokio::test]
async fn test_health_check_counts_sessions() {
    let stub = StubMaps::default()
        .with_location("Toronto", Coordinate { lat: 43.65, lng: -79.38 })
        .with_places(PlaceType::Cafe, vec![fake_place("Coffee", Some(4.0), true)]);
    let server = test_server_with(&fake_args(), stub);
    server
        .post("/search")
        .form(&[("location", "Toronto"), ("place_type", "cafe")])
        .await
        .assert_status_ok();

    let response = server.get("/health/check").await;

    response.assert_json(&HealthCheckResponse {
        error: false,
        maps_api_key_configured: true,
        active_sessions: 1,
    });
}
