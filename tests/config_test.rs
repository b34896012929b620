//! Integration tests for configuration loading

use timeline2gpx::infra::config::{
    Config, API_KEY_VAR, DEFAULT_ELEVATION_URL, DEFAULT_PLACES_URL,
};

#[test]
fn test_key_from_environment_lookup() {
    let config = Config::from_lookup(|name| {
        (name == API_KEY_VAR).then(|| "  AIza-test-key \n".to_string())
    });

    assert!(config.has_api_key());
    assert_eq!(config.api_key(), "AIza-test-key");
    assert_eq!(config.elevation_url(), DEFAULT_ELEVATION_URL);
    assert_eq!(config.places_url(), DEFAULT_PLACES_URL);
}

#[test]
fn test_missing_key_is_not_fatal() {
    let config = Config::from_lookup(|_| None);
    assert!(!config.has_api_key());
    assert_eq!(config.api_key(), "");
}

#[test]
fn test_endpoint_overrides() {
    let config = Config::default()
        .with_api_key("k")
        .with_elevation_url("http://127.0.0.1:8080/elevation")
        .with_places_url("http://127.0.0.1:8080/places");

    assert_eq!(config.elevation_url(), "http://127.0.0.1:8080/elevation");
    assert_eq!(config.places_url(), "http://127.0.0.1:8080/places");
    assert_eq!(config.api_key(), "k");
}
