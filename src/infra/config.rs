//! Runtime configuration
//!
//! The only external setting is the Google Maps API key, read once from the
//! `GOOGLE_MAPS_API_KEY` environment variable. Service endpoints default to the
//! public Google APIs and can be overridden when constructing a `Config` by hand.

use std::env;
use std::fmt;

/// Environment variable holding the API key for both lookups
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

pub const DEFAULT_ELEVATION_URL: &str = "https://maps.googleapis.com/maps/api/elevation/json";
pub const DEFAULT_PLACES_URL: &str = "https://places.googleapis.com/v1/places";

#[derive(Clone)]
pub struct Config {
    api_key: String,
    elevation_url: String,
    places_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            elevation_url: DEFAULT_ELEVATION_URL.to_string(),
            places_url: DEFAULT_PLACES_URL.to_string(),
        }
    }
}

// Keeps the key out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("elevation_url", &self.elevation_url)
            .field("places_url", &self.places_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A missing key is not an error here; lookups will fail later instead.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).map(|key| key.trim().to_string()).unwrap_or_default();
        Self { api_key, ..Default::default() }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_elevation_url(mut self, url: impl Into<String>) -> Self {
        self.elevation_url = url.into();
        self
    }

    pub fn with_places_url(mut self, url: impl Into<String>) -> Self {
        self.places_url = url.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn elevation_url(&self) -> &str {
        &self.elevation_url
    }

    pub fn places_url(&self) -> &str {
        &self.places_url
    }
}
