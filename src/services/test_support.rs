//! In-memory lookup double shared by service tests

use crate::domain::LatLng;
use crate::io::{ElevationLookup, LookupError, Place, PlaceLookup};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct FakeMaps {
    elevations: Vec<(LatLng, f64)>,
    places: HashMap<String, Place>,
    failing: Vec<LatLng>,
    pub elevation_calls: AtomicUsize,
    pub place_calls: AtomicUsize,
}

impl FakeMaps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elevation(mut self, lat: f64, lng: f64, elevation: f64) -> Self {
        self.elevations.push((LatLng { lat, lng }, elevation));
        self
    }

    /// Make the elevation lookup for this point fail outright
    pub fn with_failing_point(mut self, lat: f64, lng: f64) -> Self {
        self.failing.push(LatLng { lat, lng });
        self
    }

    pub fn with_place(mut self, id: &str, name: &str, types: &[&str]) -> Self {
        let place = Place {
            id: Some(id.to_string()),
            display_name: Some(name.to_string()),
            types: types.iter().map(|t| t.to_string()).collect(),
            summary: None,
        };
        self.places.insert(id.to_string(), place);
        self
    }

    pub fn with_raw_place(mut self, id: &str, place: Place) -> Self {
        self.places.insert(id.to_string(), place);
        self
    }
}

#[async_trait]
impl ElevationLookup for FakeMaps {
    async fn elevation(&self, at: LatLng) -> Result<Option<f64>, LookupError> {
        self.elevation_calls.fetch_add(1, Ordering::Relaxed);
        if self.failing.contains(&at) {
            return Err(LookupError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(self.elevations.iter().find(|(p, _)| *p == at).map(|&(_, e)| e))
    }
}

#[async_trait]
impl PlaceLookup for FakeMaps {
    async fn place(&self, place_id: &str) -> Result<Place, LookupError> {
        self.place_calls.fetch_add(1, Ordering::Relaxed);
        self.places
            .get(place_id)
            .cloned()
            .ok_or(LookupError::Status(reqwest::StatusCode::NOT_FOUND))
    }
}
