//! GNSS track distance calculator
//!
//! Aligns a measured GNSS track against a reference track by timestamp,
//! interpolates the reference position at every measured sample and reports
//! the planar distance and bearing between the two.

pub mod core;
pub mod algorithms;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{AlignmentEntry, GeoPoint, Sample, Track, GEODESIC_DEG_TO_M};
pub use algorithms::{Aligner, AlignStrategy, BearingMode};
pub use processing::{
    process_files, Pipeline, Report, ReportBuilder, ResultRecord, RunSummary, SampleDefaults, TrackLoader,
};
pub use validation::{Error, Result};
pub use utils::{Cli, PipelineOptions};
