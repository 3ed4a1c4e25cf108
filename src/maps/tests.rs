use crate::cli::tests::fake_args;
use crate::maps::client::GoogleMapsClient;
use crate::maps::errors::MapsError;
use crate::maps::geocoding::Geocoder;
use crate::maps::models::{Coordinate, PlaceType, RawPlace};
use crate::maps::places::NearbyPlaces;
use crate::maps::sampling::{self, PlaceSampler};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use url::Url;

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn spawn_provider(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake provider.");
    let address = listener.local_addr().expect("Failed to read local address.");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Fake provider crashed.");
    });
    Url::parse(&format!("http://{address}/")).expect("Failed to build fake provider URL.")
}

async fn fake_client(router: Router) -> GoogleMapsClient {
    let base = spawn_provider(router).await;
    let mut args = fake_args();
    args.geocoding_url = base.join("geocode/json").expect("Bad geocoding URL.");
    args.places_url = base.join("place/nearbysearch/json").expect("Bad places URL.");
    GoogleMapsClient::new(&args).expect("Failed to build maps client.")
}

#[tokio::test]
async fn test_geocode_takes_first_result() {
    let router = Router::new().route(
        "/geocode/json",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("address").map(String::as_str), Some("Seneca Polytechnic"));
            assert_eq!(params.get("key").map(String::as_str), Some("testKey"));
            Json(json!({
                "status": "OK",
                "results": [
                    {"geometry": {"location": {"lat": 43.78, "lng": -79.35}}},
                    {"geometry": {"location": {"lat": 1.0, "lng": 2.0}}},
                ],
            }))
        }),
    );
    let client = fake_client(router).await;

    let coordinate = client
        .geocode("Seneca Polytechnic")
        .await
        .expect("Geocoding failed.");

    assert_eq!(
        coordinate,
        Some(Coordinate {
            lat: 43.78,
            lng: -79.35
        })
    );
}

#[tokio::test]
async fn test_geocode_zero_results() {
    let router = Router::new().route(
        "/geocode/json",
        get(|| async { Json(json!({"status": "ZERO_RESULTS", "results": []})) }),
    );
    let client = fake_client(router).await;

    let coordinate = client.geocode("Atlantis").await.expect("Geocoding failed.");

    assert_eq!(coordinate, None);
}

#[tokio::test]
async fn test_geocode_without_status_reads_results() {
    let router = Router::new().route(
        "/geocode/json",
        get(|| async {
            Json(json!({"results": [{"geometry": {"location": {"lat": 1.0, "lng": 2.0}}}]}))
        }),
    );
    let client = fake_client(router).await;

    let coordinate = client.geocode("x").await.expect("Geocoding failed.");

    assert_eq!(coordinate, Some(Coordinate { lat: 1.0, lng: 2.0 }));
}

#[tokio::test]
async fn test_geocode_rejected_status() {
    let router = Router::new().route(
        "/geocode/json",
        get(|| async {
            Json(json!({
                "status": "REQUEST_DENIED",
                "error_message": "The provided API key is invalid.",
                "results": [],
            }))
        }),
    );
    let client = fake_client(router).await;

    let result = client.geocode("Toronto").await;

    match result {
        Err(MapsError::Rejected { status, message }) => {
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message, "The provided API key is invalid.");
        }
        other => panic!("Expected a rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_geocode_http_failure() {
    let router = Router::new().route(
        "/geocode/json",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = fake_client(router).await;

    let result = client.geocode("Toronto").await;

    assert!(matches!(result, Err(MapsError::Transport(_))));
}

#[tokio::test]
async fn test_nearby_sends_search_parameters() {
    let router = Router::new().route(
        "/place/nearbysearch/json",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("location").map(String::as_str), Some("43.78,-79.35"));
            assert_eq!(params.get("radius").map(String::as_str), Some("500"));
            assert_eq!(params.get("type").map(String::as_str), Some("cafe"));
            Json(json!({
                "status": "OK",
                "results": [{
                    "place_id": "abc",
                    "name": "Coffee Spot",
                    "rating": 4.5,
                    "opening_hours": {"open_now": true},
                    "types": ["cafe", "food"],
                    "vicinity": "1750 Finch Ave E",
                    "geometry": {"location": {"lat": 43.79, "lng": -79.34}},
                }],
            }))
        }),
    );
    let client = fake_client(router).await;

    let places = client
        .nearby(
            Coordinate {
                lat: 43.78,
                lng: -79.35,
            },
            500,
            PlaceType::Cafe,
        )
        .await
        .expect("Nearby search failed.");

    assert_eq!(places.len(), 1);
    assert_eq!(places[0].place_id.as_deref(), Some("abc"));
    assert_eq!(places[0].name, "Coffee Spot");
    assert_eq!(places[0].rating, Some(4.5));
    assert!(places[0].open_now);
    assert_eq!(places[0].types, vec!["cafe", "food"]);
    assert_eq!(places[0].vicinity, "1750 Finch Ave E");
}

#[tokio::test]
async fn test_nearby_drops_results_without_location() {
    let router = Router::new().route(
        "/place/nearbysearch/json",
        get(|| async {
            Json(json!({
                "status": "OK",
                "results": [
                    {"name": "Nowhere"},
                    {"name": "Somewhere", "geometry": {"location": {"lat": 1.0, "lng": 1.0}}},
                ],
            }))
        }),
    );
    let client = fake_client(router).await;

    let places = client
        .nearby(Coordinate { lat: 0.0, lng: 0.0 }, 100, PlaceType::Park)
        .await
        .expect("Nearby search failed.");

    assert_eq!(places.len(), 1);
    assert_eq!(places[0].name, "Somewhere");
}

fn raw_place(value: Value) -> RawPlace {
    serde_json::from_value(value).expect("Failed to deserialize a raw place.")
}

#[test]
fn test_missing_fields_resolve_to_defaults() {
    let place = raw_place(json!({"geometry": {"location": {"lat": 1.0, "lng": 2.0}}}))
        .into_place()
        .expect("Place without optional fields was dropped.");

    assert_eq!(place.name, "Unknown");
    assert_eq!(place.rating, None);
    assert!(!place.open_now);
    assert!(place.types.is_empty());
    assert_eq!(place.vicinity, "Unknown");
}

#[test]
fn test_open_now_resolution() {
    let location = json!({"location": {"lat": 1.0, "lng": 2.0}});
    let open = raw_place(json!({"opening_hours": {"open_now": true}, "geometry": location}));
    let closed = raw_place(json!({"opening_hours": {"open_now": false}, "geometry": location}));
    let null = raw_place(json!({"opening_hours": {"open_now": null}, "geometry": location}));
    let absent = raw_place(json!({"opening_hours": {}, "geometry": location}));

    assert!(open.into_place().map(|place| place.open_now).unwrap_or(false));
    assert!(!closed.into_place().map(|place| place.open_now).unwrap_or(true));
    assert!(!null.into_place().map(|place| place.open_now).unwrap_or(true));
    assert!(!absent.into_place().map(|place| place.open_now).unwrap_or(true));
}

#[test]
fn test_sample_keeps_small_sets_untouched() {
    let mut rng = StdRng::seed_from_u64(1);

    assert_eq!(sampling::sample(vec![1, 2, 3], 3, &mut rng), vec![1, 2, 3]);
    assert_eq!(sampling::sample(vec![1, 2], 5, &mut rng), vec![1, 2]);
    assert!(sampling::sample(Vec::<u8>::new(), 3, &mut rng).is_empty());
}

#[test]
fn test_sample_draws_exact_count_without_duplicates() {
    let original: Vec<u32> = (0..20).collect();

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = sampling::sample(original.clone(), 5, &mut rng);

        assert_eq!(picked.len(), 5);
        let unique: HashSet<u32> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 5);
        assert!(picked.iter().all(|item| original.contains(item)));
    }
}

#[test]
fn test_seeded_sampler_is_reproducible() {
    let items: Vec<u32> = (0..10).collect();

    let first = PlaceSampler::new(Some(42)).sample(items.clone(), 3);
    let second = PlaceSampler::new(Some(42)).sample(items, 3);

    assert_eq!(first, second);
}
