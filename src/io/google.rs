//! Google Maps elevation and places client
//!
//! Endpoints:
//! - Elevation: `GET <elevation_url>?locations=<lat>,<lng>&key=<key>`
//! - Places: `GET <places_url>/<place_id>?fields=id,displayName,types,editorialSummary&key=<key>`
//!
//! One request per call, no retries.

use crate::domain::types::format_decimal;
use crate::domain::LatLng;
use crate::infra::Config;
use crate::io::lookup::{ElevationLookup, LookupError, Place, PlaceLookup};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

const PLACE_FIELDS: &str = "id,displayName,types,editorialSummary";

/// Log lookup failure (cold path)
#[cold]
fn log_lookup_failed(service: &'static str, subject: &str, e: &LookupError) {
    error!(service, subject = %subject, error = %e, "lookup_failed");
}

#[derive(Debug, Deserialize)]
struct ElevationResponse {
    #[serde(default)]
    results: Vec<ElevationResult>,
}

#[derive(Debug, Deserialize)]
struct ElevationResult {
    elevation: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    display_name: Option<LocalizedText>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    editorial_summary: Option<LocalizedText>,
}

#[derive(Debug, Deserialize)]
struct LocalizedText {
    text: String,
}

/// Decode an elevation response body; an empty `results` list means no elevation.
pub fn parse_elevation(body: &[u8]) -> Result<Option<f64>, LookupError> {
    let response: ElevationResponse = serde_json::from_slice(body)?;
    Ok(response.results.first().map(|r| r.elevation))
}

/// Decode a place details response body
pub fn parse_place(body: &[u8]) -> Result<Place, LookupError> {
    let response: PlaceResponse = serde_json::from_slice(body)?;
    Ok(Place {
        id: response.id,
        display_name: response.display_name.map(|t| t.text),
        types: response.types,
        summary: response.editorial_summary.map(|t| t.text),
    })
}

pub struct GoogleMapsClient {
    config: Config,
    http: reqwest::Client,
}

impl GoogleMapsClient {
    pub fn new(config: Config) -> Result<Self, LookupError> {
        // Single client for the whole run so connections are pooled
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { config, http })
    }

    fn place_url(&self, place_id: &str) -> String {
        format!("{}/{}", self.config.places_url().trim_end_matches('/'), place_id)
    }

    async fn fetch(&self, request: reqwest::RequestBuilder) -> Result<Vec<u8>, LookupError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn fetch_elevation(&self, at: LatLng) -> Result<Option<f64>, LookupError> {
        let locations = format!("{},{}", format_decimal(at.lat), format_decimal(at.lng));
        let request = self
            .http
            .get(self.config.elevation_url())
            .query(&[("locations", locations.as_str()), ("key", self.config.api_key())]);
        let body = self.fetch(request).await?;
        parse_elevation(&body)
    }

    async fn fetch_place(&self, place_id: &str) -> Result<Place, LookupError> {
        let request = self
            .http
            .get(self.place_url(place_id))
            .query(&[("fields", PLACE_FIELDS), ("key", self.config.api_key())]);
        let body = self.fetch(request).await?;
        parse_place(&body)
    }
}

#[async_trait]
impl ElevationLookup for GoogleMapsClient {
    async fn elevation(&self, at: LatLng) -> Result<Option<f64>, LookupError> {
        let result = self.fetch_elevation(at).await;
        match &result {
            Ok(elevation) => debug!(lat = at.lat, lng = at.lng, elevation = ?elevation, "elevation_fetched"),
            Err(e) => log_lookup_failed("elevation", &format!("{},{}", at.lat, at.lng), e),
        }
        result
    }
}

#[async_trait]
impl PlaceLookup for GoogleMapsClient {
    async fn place(&self, place_id: &str) -> Result<Place, LookupError> {
        let result = self.fetch_place(place_id).await;
        match &result {
            Ok(place) => debug!(place_id = %place_id, name = ?place.display_name, "place_fetched"),
            Err(e) => log_lookup_failed("places", place_id, e),
        }
        result
    }
}
