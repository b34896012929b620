//! Lookup seams for elevation and place data
//!
//! The converter only sees these traits, so tests can swap the Google client for
//! an in-memory double.

use crate::domain::LatLng;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    /// URL stripped, it carries the API key
    #[error("request failed: {0}")]
    Transport(reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Transport(e.without_url())
    }
}

/// Place details returned by the places service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Place {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub types: Vec<String>,
    pub summary: Option<String>,
}

#[async_trait]
pub trait ElevationLookup: Send + Sync {
    /// Elevation in meters, `None` when the service has no result for the point
    async fn elevation(&self, at: LatLng) -> Result<Option<f64>, LookupError>;
}

#[async_trait]
pub trait PlaceLookup: Send + Sync {
    async fn place(&self, place_id: &str) -> Result<Place, LookupError>;
}
