//! End-to-end conversion tests against an in-memory lookup

use async_trait::async_trait;
use std::io::Write;
use tempfile::Builder;
use timeline2gpx::domain::LatLng;
use timeline2gpx::io::{ElevationLookup, LookupError, Place, PlaceLookup};
use timeline2gpx::services::convert_file;

/// Fixed elevation north of the equator, none south of it; every place is a cafe.
struct StubMaps;

#[async_trait]
impl ElevationLookup for StubMaps {
    async fn elevation(&self, at: LatLng) -> Result<Option<f64>, LookupError> {
        Ok((at.lat > 0.0).then_some(920.5))
    }
}

#[async_trait]
impl PlaceLookup for StubMaps {
    async fn place(&self, place_id: &str) -> Result<Place, LookupError> {
        Ok(Place {
            id: Some(place_id.to_string()),
            display_name: Some(format!("Café {place_id} – Annex")),
            types: vec!["cafe".to_string(), "food".to_string()],
            summary: None,
        })
    }
}

const TIMELINE: &str = r#"{
  "semanticSegments": [
    {
      "startTime": "2024-02-10T08:00:00.000+05:30",
      "endTime": "2024-02-10T09:00:00.000+05:30",
      "timelinePath": [
        {"point": "12.5°, 77.5°", "time": "2024-02-10T08:01:00.000+05:30"},
        {"point": "-1.5°, 36.8°", "time": "2024-02-10T08:02:00.000+05:30"}
      ]
    },
    {
      "startTime": "2024-02-10T09:00:00.000+05:30",
      "endTime": "2024-02-10T10:00:00.000+05:30",
      "visit": {
        "hierarchyLevel": 0,
        "probability": 0.95,
        "topCandidate": {
          "placeId": "ChIJ42",
          "semanticType": "UNKNOWN",
          "probability": 0.8,
          "placeLocation": {"latLng": "12.9716°, 77.5946°"}
        }
      }
    },
    {
      "startTime": "2024-02-10T07:30:00.000+05:30",
      "endTime": "2024-02-10T08:00:00.000+05:30",
      "activity": {
        "start": {"latLng": "10.0°, 20.0°"},
        "end": {"latLng": "12.0°, 22.0°"},
        "distanceMeters": 3120.5,
        "topCandidate": {"type": "IN_BUS", "probability": 0.7}
      }
    },
    {
      "startTime": "2024-02-10T10:00:00.000+05:30",
      "endTime": "2024-02-10T11:00:00.000+05:30",
      "activity": {
        "start": {"latLng": "5.0°, 30.0°"},
        "end": {"latLng": "8.0°, 28.0°"},
        "distanceMeters": 4000
      }
    },
    {
      "startTime": "2024-02-10T11:00:00.000+05:30",
      "endTime": "2024-02-10T12:00:00.000+05:30",
      "timelineMemory": {"destinations": []}
    }
  ]
}"#;

fn write_input(content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().prefix("Timeline").suffix(".json").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_convert_full_timeline() {
    let input = write_input(TIMELINE);
    let mut out = Vec::new();

    let summary = convert_file(input.path(), &StubMaps, &StubMaps, &mut out).await.unwrap();
    let gpx = String::from_utf8(out).unwrap();

    assert_eq!(summary.segments, 5);
    assert_eq!(summary.waypoints, 1);
    assert_eq!(summary.trips, 2);
    assert_eq!(summary.route_points, 2);
    assert_eq!(summary.skipped_segments, 0);

    // Bounds come from trips only
    assert!(gpx.contains(r#"<bounds minlat="5.0" minlon="20.0" maxlat="12.0" maxlon="30.0"/>"#));
    assert!(gpx.contains("<time>2024-02-10T07:30:00+05:30</time>\n<bounds"));

    assert!(gpx.contains(
        "<wpt lat=\"12.9716\" lon=\"77.5946\">\n<ele>920.5</ele>\n<time>2024-02-10T09:00:00+05:30</time>\n\
         <name>Caf&eacute; ChIJ42 &ndash; Annex</name>\n<sym>cafe</sym>\n<type><![CDATA[cafe]]></type>\n</wpt>\n"
    ));
    assert!(gpx.contains(
        "<trkpt lat=\"12.5\" lon=\"77.5\">\n<ele>920.5</ele>\n<time>2024-02-10T08:01:00+05:30</time>\n</trkpt>\n"
    ));
    assert!(gpx.contains(
        "<trkpt lat=\"-1.5\" lon=\"36.8\">\n<time>2024-02-10T08:02:00+05:30</time>\n</trkpt>\n"
    ));
    assert!(!gpx.contains("<ele></ele>"));
    assert!(!gpx.contains("None"));

    let first = gpx.find("lat=\"12.5\"").unwrap();
    let second = gpx.find("lat=\"-1.5\"").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_metadata_name_from_file_name() {
    let input = write_input(TIMELINE);
    let stem = input.path().file_name().unwrap().to_str().unwrap().split('.').next().unwrap().to_string();
    let mut out = Vec::new();

    convert_file(input.path(), &StubMaps, &StubMaps, &mut out).await.unwrap();
    let gpx = String::from_utf8(out).unwrap();

    assert!(stem.starts_with("Timeline"));
    assert!(gpx.contains(&format!("<metadata>\n<name>{stem}</name>")));
    assert!(gpx.contains(&format!("<trk>\n<name>{stem}</name>\n<trkseg>")));
}

#[tokio::test]
async fn test_invalid_json_writes_nothing() {
    let input = write_input("{ not json");
    let mut out = Vec::new();

    let err = convert_file(input.path(), &StubMaps, &StubMaps, &mut out).await.unwrap_err();

    assert!(format!("{err:#}").contains("Failed to parse timeline file"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_missing_segments_array_is_fatal() {
    let input = write_input(r#"{"rawSignals": []}"#);
    let mut out = Vec::new();

    assert!(convert_file(input.path(), &StubMaps, &StubMaps, &mut out).await.is_err());
    assert!(out.is_empty());
}
