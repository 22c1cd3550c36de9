//! Equirectangular projection of geographic coordinates to local meters
//!
//! Valid only for tracks spanning a small area. Latitude is scaled by a
//! constant meters-per-degree factor; longitude additionally by the cosine
//! of the point's own latitude.

use crate::core::{GeoPoint, DEG_TO_RAD, GEODESIC_DEG_TO_M};
use nalgebra::Vector2;

/// Project `(lat, lon)` to `(x_east, y_north)` in meters
pub fn project(lat: f64, lon: f64) -> Vector2<f64> {
    let y = GEODESIC_DEG_TO_M * lat;
    let x = GEODESIC_DEG_TO_M * (lat * DEG_TO_RAD).cos() * lon;
    Vector2::new(x, y)
}

pub fn project_point(point: &GeoPoint) -> Vector2<f64> {
    project(point.lat, point.lon)
}
