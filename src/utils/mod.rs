//! Command-line and pipeline configuration

pub mod config;

pub use config::{Cli, PipelineOptions};
