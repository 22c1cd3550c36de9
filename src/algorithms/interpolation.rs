//! Linear interpolation of a position inside a reference bracket

use crate::core::{GeoPoint, Sample, INTERPOLATION_EPSILON};

/// Map `x` from `[old_min, old_max]` onto `[new_min, new_max]`, without clamping
pub fn remap(x: f64, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> f64 {
    (x - old_min) / (old_max - old_min) * (new_max - new_min) + new_min
}

/// Estimate the position at `target_ts` between `prev` and `next`.
///
/// A bracket narrower than [`INTERPOLATION_EPSILON`] (including a reversed one)
/// returns `prev` unchanged. Targets outside the bracket extrapolate linearly.
pub fn interpolate(target_ts: f64, prev: &Sample, next: &Sample) -> GeoPoint {
    if next.timestamp - prev.timestamp < INTERPOLATION_EPSILON {
        return prev.point();
    }
    GeoPoint {
        lat: remap(target_ts, prev.timestamp, next.timestamp, prev.latitude, next.latitude),
        lon: remap(target_ts, prev.timestamp, next.timestamp, prev.longitude, next.longitude),
    }
}
