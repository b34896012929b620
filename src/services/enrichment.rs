//! Coordinate and place enrichment
//!
//! Combines text parsing with the remote lookups. Every call goes straight to
//! the lookup; identical coordinates are fetched again.

use crate::domain::LatLng;
use crate::io::{ElevationLookup, Place, PlaceLookup};
use crate::services::error::SegmentError;
use tracing::warn;

/// A parsed coordinate plus its elevation, if the service knows one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrichedPoint {
    pub at: LatLng,
    pub elevation: Option<f64>,
}

pub struct Enricher<'a> {
    elevation: &'a dyn ElevationLookup,
    places: &'a dyn PlaceLookup,
}

impl<'a> Enricher<'a> {
    pub fn new(elevation: &'a dyn ElevationLookup, places: &'a dyn PlaceLookup) -> Self {
        Self { elevation, places }
    }

    /// Parse `"<lat>°,<lng>°"` and fetch its elevation.
    pub async fn point(&self, lat_lng: &str) -> Result<EnrichedPoint, SegmentError> {
        let at: LatLng = lat_lng.parse()?;
        let elevation = self.elevation.elevation(at).await?;
        Ok(EnrichedPoint { at, elevation })
    }

    /// Parse a coordinate whose elevation is not kept.
    ///
    /// The lookup still runs; a failure is logged and does not reject the point.
    pub async fn endpoint(&self, lat_lng: &str) -> Result<LatLng, SegmentError> {
        let at: LatLng = lat_lng.parse()?;
        if let Err(e) = self.elevation.elevation(at).await {
            warn!(lat = at.lat, lng = at.lng, reason = %e, "endpoint_elevation_failed");
        }
        Ok(at)
    }

    /// Fetch a place and check it carries a name and at least one type.
    pub async fn place(&self, place_id: &str) -> Result<Place, SegmentError> {
        let place = self.places.place(place_id).await?;
        if place.display_name.is_none() {
            return Err(SegmentError::UnnamedPlace(place_id.to_string()));
        }
        if place.types.is_empty() {
            return Err(SegmentError::UntypedPlace(place_id.to_string()));
        }
        Ok(place)
    }
}
