//! Numeric constants for the flat-earth distance model

/// Meters per degree of latitude (constant approximation)
pub const GEODESIC_DEG_TO_M: f64 = 111_070.4;

/// Degrees to radians (pi/180)
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees (180/pi)
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Minimum bracket width (seconds) below which interpolation falls back to the previous sample
pub const INTERPOLATION_EPSILON: f64 = 1e-5;

/// Coordinates closer than this (degrees) to zero on both axes count as an origin point
pub const ORIGIN_EPSILON: f64 = 1e-5;

/// Value used for a missing latitude or longitude
pub const MISSING_COORDINATE_DEG: f64 = 90.0;

/// Value used for a missing timestamp
pub const MISSING_TIMESTAMP_S: f64 = 0.0;
