//! IO modules - external system interfaces
//!
//! This module contains all external IO operations:
//! - `lookup` - traits and errors for elevation/place lookups
//! - `google` - HTTP client for the Google elevation and places APIs
//! - `gpx` - GPX 1.0 document writer
//! - `entities` - HTML named-entity substitution for text content

pub mod entities;
pub mod google;
pub mod gpx;
pub mod lookup;

// Re-export commonly used types
pub use google::GoogleMapsClient;
pub use gpx::GpxWriter;
pub use lookup::{ElevationLookup, LookupError, Place, PlaceLookup};
