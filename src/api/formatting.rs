//! Report serialization and human-readable run summaries

use crate::processing::pipeline::RunSummary;
use crate::processing::report::ResultRecord;

/// JSON output for result records
#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output, as written to report files
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Records as a single JSON array, newline terminated.
    /// An empty slice yields `[]`.
    pub fn format_records(&self, records: &[ResultRecord]) -> Result<Vec<u8>, serde_json::Error> {
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(records)?
        } else {
            serde_json::to_vec(records)?
        };
        bytes.push(b'\n');
        Ok(bytes)
    }
}

/// Text summary of a run
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFormatter {
    /// Single line instead of one count per line
    pub compact: bool,
}

impl SummaryFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }

    pub fn format_summary(&self, summary: &RunSummary) -> String {
        if self.compact {
            return format!(
                "input={} reference={} connected={} emitted={} filtered={} strategy={:?}",
                summary.primary_len,
                summary.reference_len,
                summary.connected,
                summary.emitted,
                summary.filtered,
                summary.strategy
            );
        }

        let mut output = String::new();
        output.push_str(&format!("Input size:       {}\n", summary.primary_len));
        output.push_str(&format!("Reference size:   {}\n", summary.reference_len));
        output.push_str(&format!("Connected points: {}\n", summary.connected));
        if summary.filtered > 0 {
            output.push_str(&format!("Origin filtered:  {}\n", summary.filtered));
        }
        output.push_str(&format!("Alignment:        {:?}", summary.strategy));
        output
    }
}
