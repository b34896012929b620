//! Domain models - timeline input and GPX output records
//!
//! This module contains the canonical data types used throughout the converter:
//! - `segment` - the raw export document and segment classification
//! - `types` - coordinates, waypoints, route points, trips and bounds

pub mod segment;
pub mod types;

pub use segment::{RawSegment, Segment, Timeline};
pub use types::{Bounds, LatLng, RoutePoint, Timestamp, Trip, Waypoint};
