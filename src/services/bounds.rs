//! Header bounds calculation
//!
//! The GPX header declares the bounding box and earliest start of all trips.
//! With no trips, the waypoints and route points are used instead, and an
//! entirely empty timeline gets a zero box with no time.

use crate::domain::{Bounds, RoutePoint, Timestamp, Trip, Waypoint};

/// Running min/max accumulator
struct Extent {
    min_lat: f64,
    min_lng: f64,
    max_lat: f64,
    max_lng: f64,
    earliest: Option<Timestamp>,
    seen: bool,
}

impl Extent {
    fn new() -> Self {
        Self {
            min_lat: f64::INFINITY,
            min_lng: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            max_lng: f64::NEG_INFINITY,
            earliest: None,
            seen: false,
        }
    }

    fn include(&mut self, lat: f64, lng: f64) {
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
        self.min_lng = self.min_lng.min(lng);
        self.max_lng = self.max_lng.max(lng);
        self.seen = true;
    }

    fn include_time(&mut self, time: &Timestamp) {
        match &self.earliest {
            Some(current) if current <= time => {}
            _ => self.earliest = Some(*time),
        }
    }

    fn finish(self) -> Option<Bounds> {
        self.seen.then_some(Bounds {
            min_lat: self.min_lat,
            min_lng: self.min_lng,
            max_lat: self.max_lat,
            max_lng: self.max_lng,
            time: self.earliest,
        })
    }
}

/// Bounds over every trip's start and end, time = earliest trip start.
///
/// `None` when there are no trips.
pub fn trip_bounds(trips: &[Trip]) -> Option<Bounds> {
    let mut extent = Extent::new();
    for trip in trips {
        extent.include(trip.start.lat, trip.start.lng);
        extent.include(trip.end.lat, trip.end.lng);
        extent.include_time(&trip.start_time);
    }
    extent.finish()
}

/// Bounds over waypoints and route points, time = earliest point time.
pub fn point_bounds(waypoints: &[Waypoint], route_points: &[RoutePoint]) -> Option<Bounds> {
    let mut extent = Extent::new();
    for wpt in waypoints {
        extent.include(wpt.lat, wpt.lng);
        extent.include_time(&wpt.time);
    }
    for pt in route_points {
        extent.include(pt.lat, pt.lng);
        extent.include_time(&pt.time);
    }
    extent.finish()
}

/// Bounds for the header: trips first, then points, then a zero box.
pub fn header_bounds(trips: &[Trip], waypoints: &[Waypoint], route_points: &[RoutePoint]) -> Bounds {
    trip_bounds(trips)
        .or_else(|| point_bounds(waypoints, route_points))
        .unwrap_or_default()
}
