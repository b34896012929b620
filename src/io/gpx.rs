//! GPX 1.0 text output
//!
//! Sections are written in document order and flushed as each one completes:
//! declaration, header (time, bounds, metadata), waypoints, track, closing tag.

use crate::domain::types::{format_decimal, format_timestamp};
use crate::domain::{Bounds, RoutePoint, Waypoint};
use crate::io::entities::escape;
use std::io::{self, Write};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const GPX_OPEN: &str = r#"<gpx version="1.0" creator="AvasthiConverter - https://www.indiabytheroad.com" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns="http://www.topografix.com/GPX/1/0" xsi:schemaLocation="http://www.topografix.com/GPX/1/0 http://www.topografix.com/GPX/1/0/gpx.xsd">"#;
const AUTHOR_NAME: &str = "indiabytheroadconverter";
const AUTHOR_LINK: &str = "https://www.indiabytheroad.com";

pub struct GpxWriter<W: Write> {
    sink: W,
}

impl<W: Write> GpxWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    pub fn write_declaration(&mut self) -> io::Result<()> {
        writeln!(self.sink, "{XML_DECLARATION}")?;
        self.sink.flush()
    }

    /// Opening `<gpx>` tag, header time, bounds and metadata block.
    ///
    /// `<time>` is left out when the bounds carry no timestamp.
    pub fn write_header(&mut self, name: &str, bounds: &Bounds) -> io::Result<()> {
        writeln!(self.sink, "{GPX_OPEN}")?;
        if let Some(time) = &bounds.time {
            writeln!(self.sink, "<time>{}</time>", format_timestamp(time))?;
        }
        writeln!(
            self.sink,
            r#"<bounds minlat="{}" minlon="{}" maxlat="{}" maxlon="{}"/>"#,
            format_decimal(bounds.min_lat),
            format_decimal(bounds.min_lng),
            format_decimal(bounds.max_lat),
            format_decimal(bounds.max_lng),
        )?;
        writeln!(self.sink, "<metadata>")?;
        writeln!(self.sink, "<name>{}</name>", escape(name))?;
        writeln!(self.sink, "<author>")?;
        writeln!(self.sink, "<name>{AUTHOR_NAME}</name>")?;
        writeln!(self.sink, r#"<link href="{AUTHOR_LINK}"/>"#)?;
        writeln!(self.sink, "</author>")?;
        writeln!(self.sink, "</metadata>")?;
        self.sink.flush()
    }

    pub fn write_waypoints(&mut self, waypoints: &[Waypoint]) -> io::Result<()> {
        for wpt in waypoints {
            writeln!(
                self.sink,
                r#"<wpt lat="{}" lon="{}">"#,
                format_decimal(wpt.lat),
                format_decimal(wpt.lng)
            )?;
            if let Some(elevation) = wpt.elevation {
                writeln!(self.sink, "<ele>{}</ele>", format_decimal(elevation))?;
            }
            writeln!(self.sink, "<time>{}</time>", format_timestamp(&wpt.time))?;
            writeln!(self.sink, "<name>{}</name>", escape(&wpt.name))?;
            writeln!(self.sink, "<sym>{}</sym>", wpt.kind)?;
            writeln!(self.sink, "<type><![CDATA[{}]]></type>", wpt.kind)?;
            writeln!(self.sink, "</wpt>")?;
            writeln!(self.sink)?;
        }
        self.sink.flush()
    }

    /// One `<trk>` with a single `<trkseg>`, empty when there are no points.
    pub fn write_track(&mut self, name: &str, points: &[RoutePoint]) -> io::Result<()> {
        writeln!(self.sink, "<trk>")?;
        writeln!(self.sink, "<name>{}</name>", escape(name))?;
        writeln!(self.sink, "<trkseg>")?;
        for pt in points {
            writeln!(
                self.sink,
                r#"<trkpt lat="{}" lon="{}">"#,
                format_decimal(pt.lat),
                format_decimal(pt.lng)
            )?;
            if let Some(elevation) = pt.elevation {
                writeln!(self.sink, "<ele>{}</ele>", format_decimal(elevation))?;
            }
            writeln!(self.sink, "<time>{}</time>", format_timestamp(&pt.time))?;
            writeln!(self.sink, "</trkpt>")?;
            writeln!(self.sink)?;
        }
        writeln!(self.sink, "</trkseg>")?;
        writeln!(self.sink, "</trk>")?;
        writeln!(self.sink)?;
        self.sink.flush()
    }

    pub fn write_footer(&mut self) -> io::Result<()> {
        writeln!(self.sink, "</gpx>")?;
        self.sink.flush()
    }
}
