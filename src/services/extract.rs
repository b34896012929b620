//! Segment extraction - visits, trips and path traces
//!
//! Each classified segment produces records appended to `Collections` in input
//! order. A visit or activity that cannot be built is skipped as a whole; a path
//! entry that cannot be built is skipped on its own.

use crate::domain::segment::{ActivitySegment, PathEntry, PathSegment, VisitSegment};
use crate::domain::types::parse_timestamp;
use crate::domain::{RawSegment, RoutePoint, Segment, Timestamp, Trip, Waypoint};
use crate::services::enrichment::Enricher;
use crate::services::error::SegmentError;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Output records gathered from the whole timeline
#[derive(Debug, Default)]
pub struct Collections {
    pub waypoints: Vec<Waypoint>,
    pub trips: Vec<Trip>,
    pub route_points: Vec<RoutePoint>,
}

/// Counts reported once the conversion finishes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub segments: usize,
    pub waypoints: usize,
    pub trips: usize,
    pub route_points: usize,
    pub skipped_segments: usize,
    pub skipped_points: usize,
}

impl ConversionSummary {
    pub fn log(&self) {
        info!(
            segments = self.segments,
            waypoints = self.waypoints,
            trips = self.trips,
            route_points = self.route_points,
            skipped_segments = self.skipped_segments,
            skipped_points = self.skipped_points,
            "conversion_complete"
        );
    }
}

pub struct Extractor<'a> {
    enricher: Enricher<'a>,
    collections: Collections,
    summary: ConversionSummary,
}

fn required<'v>(value: &'v Option<String>, field: &'static str) -> Result<&'v str, SegmentError> {
    value.as_deref().ok_or(SegmentError::MissingField(field))
}

fn timestamp(raw: &str) -> Result<Timestamp, SegmentError> {
    parse_timestamp(raw).map_err(|source| SegmentError::Timestamp { raw: raw.to_string(), source })
}

fn distance(value: &Option<Value>) -> Result<f64, SegmentError> {
    match value {
        None | Some(Value::Null) => Err(SegmentError::MissingField("activity.distanceMeters")),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| SegmentError::Distance(n.to_string())),
        Some(Value::String(s)) => {
            s.trim().parse().map_err(|_| SegmentError::Distance(s.clone()))
        }
        Some(other) => Err(SegmentError::Distance(other.to_string())),
    }
}

impl<'a> Extractor<'a> {
    pub fn new(enricher: Enricher<'a>) -> Self {
        Self { enricher, collections: Collections::default(), summary: ConversionSummary::default() }
    }

    /// Classify one raw segment and append whatever it yields.
    pub async fn process(&mut self, index: usize, raw: &RawSegment) {
        self.summary.segments += 1;

        let segment = match Segment::classify(raw) {
            Ok(segment) => segment,
            Err(e) => {
                self.skip_segment(index, "malformed", &SegmentError::from(e));
                return;
            }
        };

        let kind = segment.kind();
        match segment {
            Segment::Visit(visit) => match self.extract_visit(&visit).await {
                Ok(wpt) => {
                    debug!(index, name = %wpt.name, "waypoint_extracted");
                    self.collections.waypoints.push(wpt);
                }
                Err(e) => self.skip_segment(index, kind, &e),
            },
            Segment::Activity(activity) => match self.extract_trip(&activity).await {
                Ok(trip) => {
                    debug!(index, distance_m = trip.distance_m, "trip_extracted");
                    self.collections.trips.push(trip);
                }
                Err(e) => self.skip_segment(index, kind, &e),
            },
            Segment::Path(path) => self.extract_path(index, &path).await,
            Segment::Unrecognized => debug!(index, kind, "segment_ignored"),
        }
    }

    pub fn finish(self) -> (Collections, ConversionSummary) {
        let mut summary = self.summary;
        summary.waypoints = self.collections.waypoints.len();
        summary.trips = self.collections.trips.len();
        summary.route_points = self.collections.route_points.len();
        (self.collections, summary)
    }

    fn skip_segment(&mut self, index: usize, kind: &'static str, e: &SegmentError) {
        self.summary.skipped_segments += 1;
        warn!(index, kind, reason = %e, "segment_skipped");
    }

    async fn extract_visit(&self, segment: &VisitSegment) -> Result<Waypoint, SegmentError> {
        let candidate = segment
            .visit
            .top_candidate
            .as_ref()
            .ok_or(SegmentError::MissingField("visit.topCandidate"))?;
        let lat_lng = candidate
            .place_location
            .as_ref()
            .and_then(|loc| loc.lat_lng.as_deref())
            .ok_or(SegmentError::MissingField("visit.topCandidate.placeLocation.latLng"))?;
        let place_id = required(&candidate.place_id, "visit.topCandidate.placeId")?;
        let time = timestamp(required(&segment.start_time, "startTime")?)?;

        let point = self.enricher.point(lat_lng).await?;
        let place = self.enricher.place(place_id).await?;

        // Both present, checked by the enricher
        let name = place.display_name.unwrap_or_default();
        let kind = place.types.into_iter().next().unwrap_or_default();

        Ok(Waypoint {
            lat: point.at.lat,
            lng: point.at.lng,
            elevation: point.elevation,
            time,
            name,
            kind,
        })
    }

    async fn extract_trip(&self, segment: &ActivitySegment) -> Result<Trip, SegmentError> {
        let start_time = timestamp(required(&segment.start_time, "startTime")?)?;
        let end_time = timestamp(required(&segment.end_time, "endTime")?)?;
        let start = segment
            .activity
            .start
            .as_ref()
            .and_then(|loc| loc.lat_lng.as_deref())
            .ok_or(SegmentError::MissingField("activity.start.latLng"))?;
        let end = segment
            .activity
            .end
            .as_ref()
            .and_then(|loc| loc.lat_lng.as_deref())
            .ok_or(SegmentError::MissingField("activity.end.latLng"))?;
        let distance_m = distance(&segment.activity.distance_meters)?;

        // Endpoint elevations are fetched but not kept on the trip
        let start = self.enricher.endpoint(start).await?;
        let end = self.enricher.endpoint(end).await?;

        Ok(Trip { start_time, end_time, start, end, distance_m })
    }

    async fn extract_path(&mut self, index: usize, segment: &PathSegment) {
        for (offset, entry) in segment.timeline_path.iter().enumerate() {
            match self.extract_route_point(entry).await {
                Ok(pt) => self.collections.route_points.push(pt),
                Err(e) => {
                    self.summary.skipped_points += 1;
                    warn!(index, offset, reason = %e, "path_point_skipped");
                }
            }
        }
    }

    async fn extract_route_point(&self, entry: &PathEntry) -> Result<RoutePoint, SegmentError> {
        let point = required(&entry.point, "timelinePath.point")?;
        let time = timestamp(required(&entry.time, "timelinePath.time")?)?;
        let point = self.enricher.point(point).await?;
        Ok(RoutePoint { lat: point.at.lat, lng: point.at.lng, elevation: point.elevation, time })
    }
}
