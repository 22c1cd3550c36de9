//! End-to-end comparison run
//!
//! [`Pipeline::run`] works on tracks already in memory; [`process_files`]
//! wraps it with path validation, loading and report output. The report is
//! fully serialized before the output file is touched, so a failed run never
//! leaves a partial file behind.

use super::loader::TrackLoader;
use super::report::{Report, ReportBuilder};
use crate::algorithms::{AlignStrategy, Aligner};
use crate::api::formatting::{JsonFormatter, SummaryFormatter};
use crate::core::Track;
use crate::utils::PipelineOptions;
use crate::validation::{validate_paths, Error, FileRole, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Counts describing one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub primary_len: usize,
    pub reference_len: usize,
    /// Primary samples that found a reference bracket
    pub connected: usize,
    /// Records written to the report
    pub emitted: usize,
    /// Connected samples dropped by the origin filter
    pub filtered: usize,
    /// Bracket search that actually ran
    pub strategy: AlignStrategy,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Loader configured with this pipeline's sample defaults
    pub fn loader(&self) -> TrackLoader {
        TrackLoader::new(self.options.defaults)
    }

    pub fn run(&self, primary: &Track, reference: &Track) -> (Report, RunSummary) {
        let aligner = Aligner::new(self.options.align);
        let strategy = aligner.resolve_strategy(reference);
        let alignment = aligner.align(primary, reference);

        let report = ReportBuilder::new(self.options.filter_origin)
            .with_bearing(self.options.bearing)
            .build(primary, reference, &alignment);

        let summary = RunSummary {
            primary_len: primary.len(),
            reference_len: reference.len(),
            connected: alignment.len(),
            emitted: report.len(),
            filtered: report.filtered,
            strategy,
        };
        (report, summary)
    }
}

/// Compare the track in `input` against the one in `reference` and write
/// the report to `output`
pub fn process_files<P, Q, R>(
    input: P,
    reference: Q,
    output: R,
    options: &PipelineOptions,
) -> Result<RunSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let (input, reference, output) = (input.as_ref(), reference.as_ref(), output.as_ref());
    validate_paths(input, reference, output)?;

    let pipeline = Pipeline::new(*options);
    let loader = pipeline.loader();
    let load = |path: &Path, role: FileRole| {
        loader.load(path).map_err(|source| Error::Load {
            role,
            path: path.to_path_buf(),
            source,
        })
    };
    let primary = load(input, FileRole::Input)?;
    let reference_track = load(reference, FileRole::Reference)?;

    let (report, summary) = pipeline.run(&primary, &reference_track);
    for line in SummaryFormatter::new().format_summary(&summary).lines() {
        log::info!("{}", line);
    }

    let bytes = JsonFormatter::pretty().format_records(&report.records)?;
    fs::write(output, bytes).map_err(|source| Error::Write {
        path: output.to_path_buf(),
        source,
    })?;
    log::info!("{} records written to {}", summary.emitted, output.display());

    Ok(summary)
}
