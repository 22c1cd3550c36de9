//! Core data types for track comparison

use serde::{Deserialize, Serialize};

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// True when both coordinates are within `epsilon` of zero
    pub fn is_near_origin(&self, epsilon: f64) -> bool {
        self.lat.abs() < epsilon && self.lon.abs() < epsilon
    }
}

/// A single time-stamped GPS fix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: f64, // seconds, arbitrary epoch
}

impl Sample {
    pub fn new(latitude: f64, longitude: f64, timestamp: f64) -> Self {
        Self { latitude, longitude, timestamp }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Ordered sequence of samples, kept in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    samples: Vec<Sample>,
}

impl Track {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Whether timestamps never decrease along the track
    pub fn is_time_sorted(&self) -> bool {
        self.samples.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
    }

    /// Earliest and latest timestamp, or None for an empty track
    pub fn time_span(&self) -> Option<(f64, f64)> {
        let mut iter = self.samples.iter().map(|s| s.timestamp);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}

impl FromIterator<Sample> for Track {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self { samples: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Reference-track indices bracketing one primary sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentEntry {
    pub primary_index: usize,
    pub prev_index: usize,
    pub next_index: usize,
}
