use httpmock::prelude::*;
use nearby_bikermeets::{GeoLocation, MeetFinder, MeetQuery, ServiceConfig, Venue, VenueSource};
use std::time::Duration;

const VENUES_PATH: &str = "/Svc/Venues/-json";

fn service_config(server: &MockServer) -> ServiceConfig {
    ServiceConfig {
        endpoint: server.url(VENUES_PATH),
        venue_base_url: "http://bikermeets.cc".to_string(),
        timeout_seconds: 1,
    }
}

fn london_query(radius: f64, limit: u32) -> MeetQuery {
    MeetQuery::new(
        GeoLocation {
            latitude: 51.5416,
            longitude: -0.2803,
        },
        radius,
        limit,
    )
}

#[tokio::test]
async fn test_find_nearby_venues_sends_query_and_decodes() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path(VENUES_PATH)
            .query_param("lat", "51.5416")
            .query_param("lon", "-0.2803")
            .query_param("rad", "35")
            .query_param("lim", "5")
            .header("accept", "application/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "venues": [{"Id": "12", "Name": "The Ace Cafe"}]
            }));
    });

    let finder = MeetFinder::new(&service_config(&server)).unwrap();
    let venues = finder
        .find_nearby_venues(&london_query(35.0, 5))
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(
        venues,
        vec![Venue::new(
            "12",
            "The Ace Cafe",
            "http://bikermeets.cc/Home/Venue/12"
        )]
    );
}

#[tokio::test]
async fn test_find_nearby_venues_preserves_order_and_count() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(VENUES_PATH);
        then.status(200).json_body(serde_json::json!({
            "venues": [
                {"Id": 40, "Name": "Box Hill"},
                {"Id": 7, "Name": "Squires Cafe Bar"},
                {"Id": 123, "Name": "Matlock Bath"},
                {"Id": "9", "Name": "Devil's Bridge"}
            ]
        }));
    });

    let finder = MeetFinder::new(&service_config(&server)).unwrap();
    let venues = finder
        .find_nearby_venues(&london_query(100.0, 4))
        .await
        .unwrap();

    api_mock.assert();
    let names: Vec<&str> = venues.iter().map(|v| v.name()).collect();
    assert_eq!(
        names,
        vec!["Box Hill", "Squires Cafe Bar", "Matlock Bath", "Devil's Bridge"]
    );
    assert_eq!(venues[2].id(), "123");
    assert_eq!(venues[2].url(), "http://bikermeets.cc/Home/Venue/123");
}

#[tokio::test]
async fn test_find_nearby_venues_empty_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(VENUES_PATH);
        then.status(200).json_body(serde_json::json!({"venues": []}));
    });

    let finder = MeetFinder::new(&service_config(&server)).unwrap();
    let venues = finder
        .find_nearby_venues(&london_query(35.0, 5))
        .await
        .unwrap();

    assert!(venues.is_empty());
}

#[tokio::test]
async fn test_server_error_is_fetch_error() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(VENUES_PATH);
        then.status(503).body("Service Unavailable");
    });

    let finder = MeetFinder::new(&service_config(&server)).unwrap();
    let err = finder
        .find_nearby_venues(&london_query(35.0, 5))
        .await
        .unwrap_err();

    api_mock.assert();
    assert!(err.is_fetch(), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_connection_failure_is_fetch_error() {
    let config = ServiceConfig {
        endpoint: "http://127.0.0.1:1/Svc/Venues/-json".to_string(),
        ..ServiceConfig::default()
    };

    let finder = MeetFinder::new(&config).unwrap();
    let err = finder
        .find_nearby_venues(&london_query(35.0, 5))
        .await
        .unwrap_err();

    assert!(err.is_fetch(), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_timeout_is_fetch_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(VENUES_PATH);
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!({"venues": []}));
    });

    let finder = MeetFinder::new(&service_config(&server)).unwrap();
    let err = finder
        .find_nearby_venues(&london_query(35.0, 5))
        .await
        .unwrap_err();

    assert!(err.is_fetch(), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(VENUES_PATH);
        then.status(200).body("<html><body>Maintenance</body></html>");
    });

    let finder = MeetFinder::new(&service_config(&server)).unwrap();
    let err = finder
        .find_nearby_venues(&london_query(35.0, 5))
        .await
        .unwrap_err();

    assert!(err.is_decode(), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_missing_venues_field_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(VENUES_PATH);
        then.status(200)
            .json_body(serde_json::json!({"error": "no venues near here"}));
    });

    let finder = MeetFinder::new(&service_config(&server)).unwrap();
    let err = finder
        .find_nearby_venues(&london_query(35.0, 5))
        .await
        .unwrap_err();

    assert!(err.is_decode(), "unexpected error: {}", err);
}

#[tokio::test]
async fn test_repeated_lookups_are_independent() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(VENUES_PATH);
        then.status(200).json_body(serde_json::json!({
            "venues": [{"Id": "12", "Name": "The Ace Cafe"}]
        }));
    });

    let finder = MeetFinder::new(&service_config(&server)).unwrap();
    let first = finder
        .find_nearby_venues(&london_query(35.0, 5))
        .await
        .unwrap();
    let second = finder
        .find_nearby_venues(&london_query(35.0, 5))
        .await
        .unwrap();

    api_mock.assert_hits(2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_zero_timeout_rejected_before_any_request() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path(VENUES_PATH);
        then.status(200).json_body(serde_json::json!({"venues": []}));
    });

    let config = ServiceConfig {
        timeout_seconds: 0,
        ..service_config(&server)
    };

    assert!(MeetFinder::new(&config).is_err());
    api_mock.assert_hits(0);
}
