//! Shared types for the timeline converter

use chrono::{DateTime, FixedOffset, Timelike};
use std::str::FromStr;
use thiserror::Error;

/// Instant with the UTC offset it was recorded in
pub type Timestamp = DateTime<FixedOffset>;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum CoordError {
    #[error("expected \"<lat>,<lng>\", got {0:?}")]
    Shape(String),
    #[error("invalid coordinate component {0:?}")]
    Component(String),
}

impl FromStr for LatLng {
    type Err = CoordError;

    /// Parse `"<lat>°,<lng>°"`. Degree signs and surrounding spaces are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (Some(lat), Some(lng), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CoordError::Shape(s.to_string()));
        };
        Ok(Self { lat: parse_component(lat)?, lng: parse_component(lng)? })
    }
}

fn parse_component(raw: &str) -> Result<f64, CoordError> {
    raw.replace('°', "").trim().parse().map_err(|_| CoordError::Component(raw.to_string()))
}

/// A named point of interest
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
    pub elevation: Option<f64>,
    pub time: Timestamp,
    pub name: String,
    pub kind: String,
}

/// A bare sample of a travelled path
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
    pub elevation: Option<f64>,
    pub time: Timestamp,
}

/// Summary of one travel activity
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub start: LatLng,
    pub end: LatLng,
    pub distance_m: f64,
}

/// Bounding box and earliest timestamp declared in the GPX header
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
    pub time: Option<Timestamp>,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min_lat: 0.0, min_lng: 0.0, max_lat: 0.0, max_lng: 0.0, time: None }
    }
}

/// Parse an RFC 3339 timestamp, keeping its offset.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw.trim())
}

/// ISO 8601 rendering: microseconds only when non-zero, offset as `+HH:MM`.
pub fn format_timestamp(ts: &Timestamp) -> String {
    if ts.nanosecond() / 1_000 == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
    }
}

/// Shortest round-trip decimal, keeping `.0` on integral values.
///
/// Never uses exponent notation, which `xsd:decimal` does not allow.
pub fn format_decimal(value: f64) -> String {
    let shortest = format!("{value:?}");
    if shortest.contains('e') {
        format!("{value}")
    } else {
        shortest
    }
}
