use std::fs::File;
use std::io::Read;
use std::path::Path;

use error_stack::{Report, Result, ResultExt};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry};
use geojson::Value::LineString;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::douglas_peucker::rdp;
use crate::errors::TrackError;
use crate::haversine::{haversine, GeoCoordinate};

/// A named, ordered sequence of geographic coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub name: String,
    pub coordinates: Vec<GeoCoordinate>,
}

/// Before/after statistics of one simplification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSummary {
    pub name: String,
    pub points_before: usize,
    pub points_after: usize,
    pub length_before_m: f64,
    pub length_after_m: f64,
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, TrackError> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| Report::new(TrackError::MissingColumn(name)))
        .attach_printable_lazy(|| format!("headers: {:?}", headers))
}

fn parse_coordinate(record: &csv::StringRecord, index: usize, row: usize) -> Result<f64, TrackError> {
    let field = record.get(index).unwrap_or("").trim();
    match field.parse::<f64>() {
        // `nan` and `inf` parse, but are not coordinates
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Report::new(TrackError::InvalidValue)
            .attach_printable(format!("row {}: {:?}", row, field))),
    }
}

impl Track {
    pub fn new(name: impl Into<String>, coordinates: Vec<GeoCoordinate>) -> Self {
        Track { name: name.into(), coordinates }
    }

    /// Reads a track from csv. The header row must name a `lat` and a `lon`
    /// column; any other columns are ignored.
    pub fn from_csv_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Track, TrackError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let headers = rdr.headers().change_context(TrackError::Csv)?.clone();
        let lat_idx = column_index(&headers, "lat")?;
        let lon_idx = column_index(&headers, "lon")?;

        let mut coordinates = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            // data rows start on line 2
            let row = i + 2;
            let record = record
                .change_context(TrackError::Csv)
                .attach_printable_lazy(|| format!("row {}", row))?;
            let lat = parse_coordinate(&record, lat_idx, row)?;
            let lon = parse_coordinate(&record, lon_idx, row)?;
            coordinates.push(GeoCoordinate::new(lat, lon));
        }

        let track = Track::new(name, coordinates);
        debug!("read track {} with {} points", track.name, track.coordinates.len());
        Ok(track)
    }

    /// Reads a track from a csv file, naming it after the file stem.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Track, TrackError> {
        let path = path.as_ref();
        let file = File::open(path)
            .change_context(TrackError::Io)
            .attach_printable_lazy(|| format!("path: {}", path.display()))?;
        let name = path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Track::from_csv_reader(name, file)
            .attach_printable_lazy(|| format!("path: {}", path.display()))
    }

    /// Length along the track in meters.
    pub fn length_m(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|w| haversine(w[0], w[1]))
            .sum()
    }

    /// Simplifies the track in the (lon, lat) plane. `epsilon_deg` is in
    /// degrees.
    pub fn simplify(&self, epsilon_deg: f64) -> Track {
        if epsilon_deg < 0.0 {
            warn!("negative epsilon {} for track {}, every point is kept", epsilon_deg, self.name);
        }
        Track::new(self.name.clone(), rdp(&self.coordinates, epsilon_deg))
    }

    pub fn summarize(&self, simplified: &Track) -> TrackSummary {
        TrackSummary {
            name: self.name.clone(),
            points_before: self.coordinates.len(),
            points_after: simplified.coordinates.len(),
            length_before_m: self.length_m(),
            length_after_m: simplified.length_m(),
        }
    }

    pub fn to_geojson_feature(&self) -> Feature {
        let positions: Vec<Vec<f64>> = self
            .coordinates
            .iter()
            .map(|c| vec![c.lon, c.lat])
            .collect();

        let mut properties = serde_json::Map::new();
        properties.insert(String::from("name"), serde_json::Value::String(self.name.clone()));
        properties.insert(String::from("points"),
            serde_json::Value::Number(serde_json::Number::from(self.coordinates.len() as u64)));

        if let Some(number) = serde_json::Number::from_f64(self.length_m()) {
            properties.insert(String::from("length_m"), serde_json::Value::Number(number));
        }

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(LineString(positions))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

pub fn to_geojson(tracks: &[Track]) -> String {
    let collection = FeatureCollection {
        bbox: None,
        features: tracks.iter().map(Track::to_geojson_feature).collect(),
        foreign_members: None,
    };
    GeoJson::from(collection).to_string()
}

/// Writes the tracks as a GeoJSON FeatureCollection of LineStrings.
pub fn write_geojson<P: AsRef<Path>>(tracks: &[Track], path: P) -> Result<(), TrackError> {
    let path = path.as_ref();
    std::fs::write(path, to_geojson(tracks))
        .change_context(TrackError::Io)
        .attach_printable_lazy(|| format!("path: {}", path.display()))?;

    info!("wrote {} track(s) to {}", tracks.len(), path.display());
    Ok(())
}

/// Reads tracks back from a GeoJSON FeatureCollection written by
/// [`write_geojson`]. Features without a LineString geometry are skipped.
pub fn read_geojson<P: AsRef<Path>>(path: P) -> Result<Vec<Track>, TrackError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .change_context(TrackError::Io)
        .attach_printable_lazy(|| format!("path: {}", path.display()))?;
    let geojson = text.parse::<GeoJson>()
        .change_context(TrackError::Json)
        .attach_printable_lazy(|| format!("path: {}", path.display()))?;

    let features = match geojson {
        GeoJson::FeatureCollection(fc) => fc.features,
        GeoJson::Feature(f) => vec![f],
        GeoJson::Geometry(_) => {
            return Err(Report::new(TrackError::Json)
                .attach_printable("expected a Feature or FeatureCollection"));
        }
    };

    let tracks = features
        .into_iter()
        .filter_map(|feature| {
            let name = feature
                .property("name")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            match feature.geometry.map(|g| g.value) {
                Some(LineString(positions)) => Some(Track::new(
                    name,
                    positions
                        .iter()
                        .filter(|p| p.len() >= 2)
                        .map(|p| GeoCoordinate::new(p[1], p[0]))
                        .collect(),
                )),
                _ => {
                    debug!("skipping non-linestring feature {}", name);
                    None
                }
            }
        })
        .collect();

    Ok(tracks)
}

/// Simplifies independent tracks in parallel. Output order follows input
/// order.
pub fn simplify_tracks(tracks: &[Track], epsilon_deg: f64) -> Vec<Track> {
    let simplified: Vec<Track> = tracks
        .par_iter()
        .map(|track| track.simplify(epsilon_deg))
        .collect();

    for (before, after) in tracks.iter().zip(&simplified) {
        debug!("{}: {} -> {} points", before.name, before.coordinates.len(), after.coordinates.len());
    }
    info!("simplified {} track(s) with epsilon {}", tracks.len(), epsilon_deg);

    simplified
}
