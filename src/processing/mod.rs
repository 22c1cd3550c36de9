//! Track loading, report building and the end-to-end pipeline

pub mod loader;
pub mod report;
pub mod pipeline;

pub use loader::{SampleDefaults, SampleSource, TrackLoader};
pub use report::{Report, ReportBuilder, ResultRecord};
pub use pipeline::{process_files, Pipeline, RunSummary};
