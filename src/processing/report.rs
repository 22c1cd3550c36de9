//! Per-sample comparison records

use crate::algorithms::{bearing, interpolate, Alignment, BearingMode};
use crate::core::{Track, ORIGIN_EPSILON};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputCoordinate {
    pub lat: f64,
    pub lon: f64,
    pub timestamp: f64,
}

/// Reference bracket and the position interpolated inside it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BracketCoordinates {
    pub prev_lat: f64,
    pub prev_lon: f64,
    pub prev_timestamp: f64,
    pub next_lat: f64,
    pub next_lon: f64,
    pub next_timestamp: f64,
    pub int_lat: f64,
    pub int_lon: f64,
}

/// Comparison of one primary sample against the reference track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub input_gnss_coordinate: InputCoordinate,
    pub distance_from_gnss_coordinates: BracketCoordinates,
    /// meters
    pub distance: f64,
    /// north offset, meters
    pub dst_lat: f64,
    /// east offset, meters
    pub dst_lon: f64,
    pub timestamp: f64,
    /// 1-based position among emitted records
    pub counter: u64,
    /// degrees
    pub angle: f64,
}

/// Records in primary-track order plus bookkeeping about dropped entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub records: Vec<ResultRecord>,
    /// Aligned entries dropped by the origin filter
    pub filtered: usize,
}

impl Report {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Turns an alignment into result records
#[derive(Debug, Clone, Copy)]
pub struct ReportBuilder {
    filter_origin: bool,
    bearing: BearingMode,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self {
            filter_origin: true,
            bearing: BearingMode::Legacy,
        }
    }
}

impl ReportBuilder {
    pub fn new(filter_origin: bool) -> Self {
        Self { filter_origin, ..Self::default() }
    }

    pub fn with_bearing(mut self, bearing: BearingMode) -> Self {
        self.bearing = bearing;
        self
    }

    pub fn build(&self, primary: &Track, reference: &Track, alignment: &Alignment) -> Report {
        let mut report = Report {
            records: Vec::with_capacity(alignment.len()),
            filtered: 0,
        };

        for entry in alignment.iter() {
            let (Some(input), Some(prev), Some(next)) = (
                primary.get(entry.primary_index),
                reference.get(entry.prev_index),
                reference.get(entry.next_index),
            ) else {
                log::warn!("Alignment entry {:?} does not match the tracks, ignored", entry);
                continue;
            };

            let input_point = input.point();
            if self.filter_origin && input_point.is_near_origin(ORIGIN_EPSILON) {
                log::debug!("Sample {} is at the origin, filtered", entry.primary_index);
                report.filtered += 1;
                continue;
            }

            let interpolated = interpolate(input.timestamp, prev, next);
            let displacement = bearing::compute(&input_point, &interpolated, self.bearing);

            report.records.push(ResultRecord {
                input_gnss_coordinate: InputCoordinate {
                    lat: input.latitude,
                    lon: input.longitude,
                    timestamp: input.timestamp,
                },
                distance_from_gnss_coordinates: BracketCoordinates {
                    prev_lat: prev.latitude,
                    prev_lon: prev.longitude,
                    prev_timestamp: prev.timestamp,
                    next_lat: next.latitude,
                    next_lon: next.longitude,
                    next_timestamp: next.timestamp,
                    int_lat: interpolated.lat,
                    int_lon: interpolated.lon,
                },
                distance: displacement.distance,
                dst_lat: displacement.dy,
                dst_lon: displacement.dx,
                timestamp: input.timestamp,
                counter: report.records.len() as u64 + 1,
                angle: displacement.angle,
            });
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{AlignStrategy, Aligner};
    use crate::core::Sample;

    fn reference() -> Track {
        Track::new(vec![
            Sample::new(0.0, 0.0, 0.0),
            Sample::new(20.0, 40.0, 10.0),
        ])
    }

    fn build(primary: &Track, reference: &Track, filter_origin: bool) -> Report {
        let alignment = Aligner::default().align(primary, reference);
        ReportBuilder::new(filter_origin).build(primary, reference, &alignment)
    }

    #[test]
    fn test_input_on_reference_path_has_zero_distance() {
        let primary = Track::new(vec![Sample::new(10.0, 20.0, 5.0)]);
        let report = build(&primary, &reference(), true);

        assert_eq!(report.len(), 1);
        let record = &report.records[0];
        assert!((record.distance_from_gnss_coordinates.int_lat - 10.0).abs() < 1e-12);
        assert!((record.distance_from_gnss_coordinates.int_lon - 20.0).abs() < 1e-12);
        assert!(record.distance < 1e-6);
        assert_eq!(record.counter, 1);
        assert_eq!(record.timestamp, 5.0);
        assert_eq!(record.distance_from_gnss_coordinates.prev_timestamp, 0.0);
        assert_eq!(record.distance_from_gnss_coordinates.next_timestamp, 10.0);
    }

    #[test]
    fn test_sample_outside_reference_emits_nothing() {
        let primary = Track::new(vec![Sample::new(10.0, 20.0, 100.0)]);
        assert!(build(&primary, &reference(), true).is_empty());
    }

    #[test]
    fn test_degenerate_bracket_uses_prev_coordinates() {
        let reference = Track::new(vec![
            Sample::new(0.0, 0.0, 0.0),
            Sample::new(1.0, 1.0, 5.0),
            Sample::new(3.0, 7.0, 5.0),
            Sample::new(9.0, 9.0, 10.0),
        ]);
        let primary = Track::new(vec![Sample::new(1.0, 1.0, 5.0)]);
        let report = build(&primary, &reference, true);

        let bracket = report.records[0].distance_from_gnss_coordinates;
        assert_eq!(bracket.prev_lat, 3.0);
        assert_eq!(bracket.next_lat, 1.0);
        assert_eq!((bracket.int_lat, bracket.int_lon), (bracket.prev_lat, bracket.prev_lon));
    }

    #[test]
    fn test_origin_filter_and_counter() {
        let primary = Track::new(vec![
            Sample::new(1.0, 2.0, 1.0),
            Sample::new(0.0, 0.0, 2.0),
            Sample::new(3.0, 6.0, 3.0),
            Sample::new(-4e-6, 2e-6, 4.0),
        ]);

        let filtered = build(&primary, &reference(), true);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.filtered, 2);
        let counters: Vec<u64> = filtered.records.iter().map(|r| r.counter).collect();
        assert_eq!(counters, vec![1, 2]);
        assert_eq!(filtered.records[1].input_gnss_coordinate.lat, 3.0);

        let all = build(&primary, &reference(), false);
        assert_eq!(all.len(), 4);
        assert_eq!(all.filtered, 0);
        assert_eq!(all.records[3].counter, 4);
    }

    #[test]
    fn test_negative_coordinates_are_not_origin() {
        let primary = Track::new(vec![Sample::new(-1.0, -1.0, 5.0)]);
        assert_eq!(build(&primary, &reference(), true).len(), 1);
    }

    #[test]
    fn test_offsets_match_projection() {
        let primary = Track::new(vec![Sample::new(10.001, 20.0, 5.0)]);
        let report = build(&primary, &reference(), true);
        let record = &report.records[0];

        assert!((record.dst_lat - 111.0704).abs() < 1e-6);
        let expected = (record.dst_lat.powi(2) + record.dst_lon.powi(2)).sqrt();
        assert!((record.distance - expected).abs() < 1e-9);
    }

    #[test]
    fn test_mismatched_alignment_is_ignored() {
        let primary = Track::new(vec![Sample::new(10.0, 20.0, 5.0)]);
        let alignment = Aligner::new(AlignStrategy::LinearScan).align(&primary, &reference());
        let short_reference = Track::new(vec![Sample::new(0.0, 0.0, 0.0)]);

        let report = ReportBuilder::default().build(&primary, &short_reference, &alignment);
        assert!(report.is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let primary = Track::new(vec![Sample::new(10.0, 20.0, 5.0)]);
        let report = build(&primary, &reference(), true);
        let value = serde_json::to_value(&report.records[0]).unwrap();

        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        for key in [
            "input_gnss_coordinate",
            "distance_from_gnss_coordinates",
            "distance",
            "dst_lat",
            "dst_lon",
            "timestamp",
            "counter",
            "angle",
        ] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert_eq!(keys.len(), 8);
        assert_eq!(value["distance_from_gnss_coordinates"].as_object().unwrap().len(), 8);
        assert_eq!(value["input_gnss_coordinate"]["timestamp"], 5.0);
    }
}
