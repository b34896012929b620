//! Services - conversion logic
//!
//! - `enrichment` - coordinate parsing plus elevation/place lookups
//! - `extract` - builds waypoints, trips and route points from segments
//! - `bounds` - header bounding box and earliest time
//! - `converter` - end-to-end driver from export file to GPX
//! - `error` - per-segment failure reasons

pub mod bounds;
pub mod converter;
pub mod enrichment;
pub mod error;
pub mod extract;

#[cfg(test)]
mod test_support;

pub use converter::{convert, convert_file, document_name};
pub use enrichment::{EnrichedPoint, Enricher};
pub use error::SegmentError;
pub use extract::{Collections, ConversionSummary, Extractor};
