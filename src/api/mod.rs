//! Output formatting for reports and run summaries

pub mod formatting;

pub use formatting::{JsonFormatter, SummaryFormatter};
