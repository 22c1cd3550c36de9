//! Distance and bearing between a measured point and its interpolated reference

use super::projection::project_point;
use crate::core::{GeoPoint, DEG_TO_RAD, RAD_TO_DEG};
use serde::{Deserialize, Serialize};

/// Angle convention for the reported bearing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BearingMode {
    /// Historical formula in raw degree space: counter-clockwise from east,
    /// mirrored to `360 - a` when the reference lies south of the input
    #[default]
    Legacy,
    /// Compass azimuth, clockwise from north, in `[0, 360)`
    Azimuth,
}

/// Offset of a measured point from the reference position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    /// Euclidean distance in the projected plane (meters)
    pub distance: f64,
    /// East offset `x_input - x_reference` (meters)
    pub dx: f64,
    /// North offset `y_input - y_reference` (meters)
    pub dy: f64,
    /// Bearing from the input towards the reference (degrees)
    pub angle: f64,
}

pub fn compute(input: &GeoPoint, interpolated: &GeoPoint, mode: BearingMode) -> Displacement {
    let offset = project_point(input) - project_point(interpolated);
    let angle = match mode {
        BearingMode::Legacy => legacy_bearing(input, interpolated),
        BearingMode::Azimuth => azimuth_bearing(input, interpolated),
    };
    Displacement {
        distance: offset.norm(),
        dx: offset.x,
        dy: offset.y,
        angle,
    }
}

/// `acos(dlon * |dlon| / (norm * |dlon|))`, then `360 - a` for a southward offset.
///
/// The expression is undefined for `dlon == 0`; that case yields exactly `0.0`.
pub fn legacy_bearing(input: &GeoPoint, interpolated: &GeoPoint) -> f64 {
    let delta_lat = interpolated.lat - input.lat;
    let delta_lon = interpolated.lon - input.lon;
    if delta_lon == 0.0 {
        return 0.0;
    }

    let norm = (delta_lat * delta_lat + delta_lon * delta_lon).sqrt();
    let cosine = (delta_lon * delta_lon.abs() / (norm * delta_lon.abs())).clamp(-1.0, 1.0);
    let angle = RAD_TO_DEG * cosine.acos();
    if delta_lat < 0.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Azimuth from `input` to `interpolated`, longitude scaled at the mid latitude
pub fn azimuth_bearing(input: &GeoPoint, interpolated: &GeoPoint) -> f64 {
    let mid_lat = 0.5 * (input.lat + interpolated.lat) * DEG_TO_RAD;
    let east = (interpolated.lon - input.lon) * mid_lat.cos();
    let north = interpolated.lat - input.lat;
    azimuth_deg(east, north)
}

/// Compass azimuth of an (east, north) offset
pub fn azimuth_deg(east: f64, north: f64) -> f64 {
    (east.atan2(north) * RAD_TO_DEG + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: GeoPoint = GeoPoint { lat: 44.5, lon: 11.3 };

    fn offset(dlat: f64, dlon: f64) -> GeoPoint {
        GeoPoint::new(BASE.lat + dlat, BASE.lon + dlon)
    }

    #[test]
    fn test_zero_distance_for_identical_points() {
        let d = compute(&BASE, &BASE, BearingMode::Legacy);
        assert_eq!(d.distance, 0.0);
        assert_eq!(d.dx, 0.0);
        assert_eq!(d.dy, 0.0);
        assert_eq!(d.angle, 0.0);
    }

    #[test]
    fn test_north_offset_on_prime_meridian() {
        let input = GeoPoint::new(44.5, 0.0);
        let d = compute(&input, &GeoPoint::new(44.501, 0.0), BearingMode::Legacy);
        assert!((d.distance - 111.0704).abs() < 1e-6);
        assert!((d.dy + 111.0704).abs() < 1e-6);
        assert_eq!(d.dx, 0.0);
    }

    #[test]
    fn test_north_offset_away_from_meridian_has_east_component() {
        // longitude is scaled by each point's own latitude
        let d = compute(&BASE, &offset(0.001, 0.0), BearingMode::Legacy);
        assert!(d.dx > 0.0);
        assert!(d.distance > 111.0704);
    }

    #[test]
    fn test_east_offset_uses_both_latitudes() {
        let reference = offset(0.0, 0.001);
        let d = compute(&BASE, &reference, BearingMode::Legacy);
        let expected = 111_070.4 * (44.5_f64.to_radians()).cos() * 0.001;
        assert!((d.distance - expected).abs() < 1e-6);
        assert!(d.dx < 0.0);
    }

    #[test]
    fn test_legacy_bearing_quadrants() {
        assert!((legacy_bearing(&BASE, &offset(0.0, 1.0)) - 0.0).abs() < 1e-9);
        assert!((legacy_bearing(&BASE, &offset(0.0, -1.0)) - 180.0).abs() < 1e-9);
        assert!((legacy_bearing(&BASE, &offset(1.0, 1.0)) - 45.0).abs() < 1e-9);
        assert!((legacy_bearing(&BASE, &offset(1.0, -1.0)) - 135.0).abs() < 1e-9);
        assert!((legacy_bearing(&BASE, &offset(-1.0, -1.0)) - 225.0).abs() < 1e-9);
        assert!((legacy_bearing(&BASE, &offset(-1.0, 1.0)) - 315.0).abs() < 1e-9);
    }

    #[test]
    fn test_legacy_bearing_zero_longitude_delta() {
        assert_eq!(legacy_bearing(&BASE, &offset(1.0, 0.0)), 0.0);
        assert_eq!(legacy_bearing(&BASE, &offset(-1.0, 0.0)), 0.0);
        assert!(!legacy_bearing(&BASE, &offset(-1.0, 0.0)).is_nan());
    }

    #[test]
    fn test_azimuth_cardinal_directions() {
        assert!((azimuth_deg(0.0, 1.0) - 0.0).abs() < 1e-9);
        assert!((azimuth_deg(1.0, 0.0) - 90.0).abs() < 1e-9);
        assert!((azimuth_deg(0.0, -1.0) - 180.0).abs() < 1e-9);
        assert!((azimuth_deg(-1.0, 0.0) - 270.0).abs() < 1e-9);
        assert_eq!(azimuth_deg(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_azimuth_mode_points_towards_reference() {
        let east = compute(&BASE, &offset(0.0, 0.001), BearingMode::Azimuth);
        assert!((east.angle - 90.0).abs() < 1e-6);

        let south = compute(&BASE, &offset(-0.001, 0.0), BearingMode::Azimuth);
        assert!((south.angle - 180.0).abs() < 1e-3);
    }
}
