//! Timeline-to-GPX driver
//!
//! Reads the export, runs every segment through the extractor in order, then
//! writes the GPX document. The XML declaration goes out before the first
//! lookup; the remaining sections follow once all segments are processed.

use crate::domain::Timeline;
use crate::io::{ElevationLookup, GpxWriter, PlaceLookup};
use crate::services::bounds::header_bounds;
use crate::services::enrichment::Enricher;
use crate::services::extract::{ConversionSummary, Extractor};
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Document name: the file name up to its first `.`
pub fn document_name(path: &Path) -> String {
    let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    match file_name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file_name.into_owned(),
    }
}

/// Convert the export at `path`, writing GPX to `sink`.
pub async fn convert_file<W: Write>(
    path: &Path,
    elevation: &dyn ElevationLookup,
    places: &dyn PlaceLookup,
    sink: W,
) -> anyhow::Result<ConversionSummary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read timeline file {}", path.display()))?;
    let timeline: Timeline = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse timeline file {}", path.display()))?;

    info!(
        file = %path.display(),
        segments = timeline.semantic_segments.len(),
        "timeline_loaded"
    );

    convert(&document_name(path), &timeline, elevation, places, sink).await
}

/// Convert an already parsed timeline.
pub async fn convert<W: Write>(
    name: &str,
    timeline: &Timeline,
    elevation: &dyn ElevationLookup,
    places: &dyn PlaceLookup,
    sink: W,
) -> anyhow::Result<ConversionSummary> {
    let mut writer = GpxWriter::new(sink);
    writer.write_declaration().context("Failed to write GPX output")?;

    let mut extractor = Extractor::new(Enricher::new(elevation, places));
    for (index, segment) in timeline.semantic_segments.iter().enumerate() {
        extractor.process(index, segment).await;
    }
    let (collections, summary) = extractor.finish();

    let bounds = header_bounds(&collections.trips, &collections.waypoints, &collections.route_points);
    writer.write_header(name, &bounds).context("Failed to write GPX output")?;
    writer.write_waypoints(&collections.waypoints).context("Failed to write GPX output")?;
    writer.write_track(name, &collections.route_points).context("Failed to write GPX output")?;
    writer.write_footer().context("Failed to write GPX output")?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::FakeMaps;
    use std::path::PathBuf;

    #[test]
    fn test_document_name() {
        assert_eq!(document_name(Path::new("Timeline.json")), "Timeline");
        assert_eq!(document_name(Path::new("exports/Timeline.2024.json")), "Timeline");
        assert_eq!(document_name(Path::new("./data/trip")), "trip");
        assert_eq!(document_name(&PathBuf::from("/tmp/a.b.c")), "a");
    }

    #[tokio::test]
    async fn test_round_trip_visit_and_activity() {
        let maps = FakeMaps::new()
            .with_elevation(12.9716, 77.5946, 920.0)
            .with_place("X", "Vidhana Soudha", &["government_office", "point_of_interest"]);
        let timeline: Timeline = serde_json::from_str(
            r#"{"semanticSegments": [
                {
                    "startTime": "2024-01-01T10:00:00+05:30",
                    "endTime": "2024-01-01T11:00:00+05:30",
                    "visit": {"topCandidate": {"placeId": "X", "placeLocation": {"latLng": "12.9716°,77.5946°"}}}
                },
                {
                    "startTime": "2024-01-01T11:00:00+05:30",
                    "endTime": "2024-01-01T11:30:00+05:30",
                    "activity": {
                        "start": {"latLng": "12.0,77.0"},
                        "end": {"latLng": "13.0,78.0"},
                        "distanceMeters": 1500
                    }
                }
            ]}"#,
        )
        .unwrap();

        let mut out = Vec::new();
        let summary = convert("Timeline", &timeline, &maps, &maps, &mut out).await.unwrap();
        let gpx = String::from_utf8(out).unwrap();

        assert_eq!(summary.waypoints, 1);
        assert_eq!(summary.trips, 1);
        assert_eq!(summary.route_points, 0);
        assert!(gpx.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<gpx version=\"1.0\""));
        assert_eq!(gpx.matches(r#"<wpt lat="12.9716" lon="77.5946">"#).count(), 1);
        assert!(gpx.contains(r#"<bounds minlat="12.0" minlon="77.0" maxlat="13.0" maxlon="78.0"/>"#));
        assert!(gpx.contains("<time>2024-01-01T11:00:00+05:30</time>\n<bounds"));
        assert!(gpx.contains("<sym>government_office</sym>"));
        assert!(gpx.contains("<trk>\n<name>Timeline</name>\n<trkseg>\n</trkseg>\n</trk>\n"));
        assert!(!gpx.contains("<trkpt"));
        assert!(gpx.ends_with("</gpx>\n"));

        let wpt = gpx.find("<wpt").unwrap();
        let trk = gpx.find("<trk>").unwrap();
        let bounds = gpx.find("<bounds").unwrap();
        assert!(bounds < wpt && wpt < trk);
    }

    #[tokio::test]
    async fn test_empty_timeline_renders_default_bounds() {
        let maps = FakeMaps::new();
        let timeline: Timeline = serde_json::from_str(r#"{"semanticSegments": []}"#).unwrap();

        let mut out = Vec::new();
        convert("empty", &timeline, &maps, &maps, &mut out).await.unwrap();
        let gpx = String::from_utf8(out).unwrap();

        assert!(gpx.contains(r#"<bounds minlat="0.0" minlon="0.0" maxlat="0.0" maxlon="0.0"/>"#));
        assert!(!gpx.contains("<time>"));
        assert!(gpx.ends_with("</trkseg>\n</trk>\n\n</gpx>\n"));
    }

    #[tokio::test]
    async fn test_convert_file_missing() {
        let maps = FakeMaps::new();
        let err = convert_file(Path::new("/nonexistent/Timeline.json"), &maps, &maps, Vec::new())
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read timeline file"));
    }
}
