//! Timeline export structure and segment classification
//!
//! Segments are kept as loose JSON maps until classified so that one malformed
//! entry never rejects the whole export.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level export document
#[derive(Debug, Deserialize)]
pub struct Timeline {
    #[serde(rename = "semanticSegments")]
    pub semantic_segments: Vec<RawSegment>,
}

/// One untyped entry of `semanticSegments`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RawSegment(pub Map<String, Value>);

impl RawSegment {
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    fn decode<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.0.clone()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitSegment {
    #[serde(default)]
    pub start_time: Option<String>,
    pub visit: Visit,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    #[serde(default)]
    pub top_candidate: Option<TopCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCandidate {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub place_location: Option<PlaceLocation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceLocation {
    #[serde(default)]
    pub lat_lng: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySegment {
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    pub activity: Activity,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub start: Option<PlaceLocation>,
    #[serde(default)]
    pub end: Option<PlaceLocation>,
    /// Number in most exports, occasionally a numeric string
    #[serde(default)]
    pub distance_meters: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSegment {
    pub timeline_path: Vec<PathEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathEntry {
    #[serde(default)]
    pub point: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

/// Closed set of segment shapes the converter understands
#[derive(Debug, Clone)]
pub enum Segment {
    Visit(VisitSegment),
    Activity(ActivitySegment),
    Path(PathSegment),
    Unrecognized,
}

impl Segment {
    /// Classify by marker field. Precedence: `visit`, `activity`, `timelinePath`.
    ///
    /// Fails only when the winning marker field has the wrong JSON shape.
    pub fn classify(raw: &RawSegment) -> Result<Self, serde_json::Error> {
        if raw.has("visit") {
            raw.decode().map(Segment::Visit)
        } else if raw.has("activity") {
            raw.decode().map(Segment::Activity)
        } else if raw.has("timelinePath") {
            raw.decode().map(Segment::Path)
        } else {
            Ok(Segment::Unrecognized)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Segment::Visit(_) => "visit",
            Segment::Activity(_) => "activity",
            Segment::Path(_) => "path",
            Segment::Unrecognized => "unrecognized",
        }
    }
}
