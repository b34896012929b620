//! Per-segment failure reasons

use crate::domain::types::CoordError;
use crate::io::LookupError;
use thiserror::Error;

/// Why a segment (or a single path entry) was left out of the output
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("segment has unexpected shape: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("bad coordinate: {0}")]
    Coordinate(#[from] CoordError),
    #[error("bad timestamp {raw:?}: {source}")]
    Timestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("bad distance {0}")]
    Distance(String),
    #[error("place {0} has no display name")]
    UnnamedPlace(String),
    #[error("place {0} has no types")]
    UntypedPlace(String),
    #[error("lookup failed: {0}")]
    Lookup(#[from] LookupError),
}
