use crate::algorithms::{AlignStrategy, BearingMode};
use crate::processing::loader::SampleDefaults;
use crate::validation::ConfigError;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Compare a measured GNSS track against a reference track.
///
/// Every sample of the input track is matched to the reference position
/// interpolated at the same timestamp; distance and bearing between the two
/// are written to the output file as a JSON array.
#[derive(Parser, Debug, Clone)]
#[command(name = "gnss-distance", author, version)]
pub struct Cli {
    /// Track whose samples are measured (.json)
    #[arg(short = 'i', long = "input", value_name = "INPUT.json")]
    pub input: PathBuf,

    /// Reference track the distance is measured from (.json)
    #[arg(short = 'd', long = "distance-from", value_name = "REFERENCE.json")]
    pub reference: PathBuf,

    /// Report destination (.json)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT.json")]
    pub output: PathBuf,

    /// Keep input samples at (0,0) instead of filtering them out
    #[arg(short = 'a', long = "all", default_value_t = false)]
    pub all: bool,

    /// Bracket search strategy
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub align: Option<AlignStrategy>,

    /// Bearing convention for the `angle` field
    #[arg(long, value_enum, value_name = "MODE")]
    pub bearing: Option<BearingMode>,

    /// Latitude/longitude used when a sample lacks one (degrees)
    #[arg(long, value_name = "DEG")]
    pub missing_coordinate: Option<f64>,

    /// Timestamp used when a sample lacks one (seconds)
    #[arg(long, value_name = "SECONDS")]
    pub missing_timestamp: Option<f64>,

    /// JSON file with pipeline options; command-line flags take precedence
    #[arg(short = 'c', long = "config", value_name = "OPTIONS.json")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

/// Everything the comparison pipeline needs besides the tracks themselves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineOptions {
    /// Drop input samples lying at (0,0)
    pub filter_origin: bool,
    pub align: AlignStrategy,
    pub bearing: BearingMode,
    /// Substitutes for absent sample fields, shared by both tracks
    pub defaults: SampleDefaults,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            filter_origin: true,
            align: AlignStrategy::default(),
            bearing: BearingMode::default(),
            defaults: SampleDefaults::default(),
        }
    }
}

impl PipelineOptions {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let options_error = |reason: String| ConfigError::OptionsFile {
            path: path.to_path_buf(),
            reason,
        };
        let text = fs::read_to_string(path).map_err(|e| options_error(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| options_error(e.to_string()))
    }
}

impl Cli {
    /// Built-in defaults, overlaid by the options file, overlaid by explicit flags
    pub fn pipeline_options(&self) -> Result<PipelineOptions, ConfigError> {
        let mut options = match &self.config {
            Some(path) => {
                log::info!("Loading options from {}", path.display());
                PipelineOptions::from_file(path)?
            }
            None => PipelineOptions::default(),
        };

        if self.all {
            options.filter_origin = false;
        }
        if let Some(align) = self.align {
            options.align = align;
        }
        if let Some(bearing) = self.bearing {
            options.bearing = bearing;
        }
        if let Some(coordinate) = self.missing_coordinate {
            options.defaults.latitude = coordinate;
            options.defaults.longitude = coordinate;
        }
        if let Some(timestamp) = self.missing_timestamp {
            options.defaults.timestamp = timestamp;
        }
        Ok(options)
    }
}
