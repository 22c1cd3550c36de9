//! Time alignment of a primary track against a reference track
//!
//! Every primary sample is matched to the pair of reference samples whose
//! timestamps straddle it. `prev` is the sample right before the first
//! reference timestamp strictly greater than the target, `next` the sample
//! right after the last reference timestamp strictly smaller than it. A
//! primary sample without both neighbours is left out of the alignment.

use crate::core::{AlignmentEntry, Sample, Track};
use serde::{Deserialize, Serialize};

/// Bracket search strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AlignStrategy {
    /// Binary search when the reference track is time-sorted, linear scan otherwise
    #[default]
    Auto,
    /// Forward and backward scan over the whole reference track, O(m) per sample
    #[value(name = "scan")]
    #[serde(rename = "scan")]
    LinearScan,
    /// Two `partition_point` searches, O(log m) per sample; requires a time-sorted reference
    #[value(name = "binary")]
    #[serde(rename = "binary")]
    BinarySearch,
}

/// Ordered mapping from primary index to its reference bracket
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alignment {
    entries: Vec<AlignmentEntry>,
}

impl Alignment {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending primary index order
    pub fn entries(&self) -> &[AlignmentEntry] {
        &self.entries
    }

    pub fn get(&self, primary_index: usize) -> Option<&AlignmentEntry> {
        self.entries
            .binary_search_by_key(&primary_index, |e| e.primary_index)
            .ok()
            .map(|i| &self.entries[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AlignmentEntry> {
        self.entries.iter()
    }
}

/// Locates reference brackets for every primary sample
#[derive(Debug, Clone, Copy, Default)]
pub struct Aligner {
    strategy: AlignStrategy,
}

impl Aligner {
    pub fn new(strategy: AlignStrategy) -> Self {
        Self { strategy }
    }

    /// Strategy that will actually run for `reference`
    pub fn resolve_strategy(&self, reference: &Track) -> AlignStrategy {
        match self.strategy {
            AlignStrategy::Auto if reference.is_time_sorted() => AlignStrategy::BinarySearch,
            AlignStrategy::Auto => AlignStrategy::LinearScan,
            other => other,
        }
    }

    pub fn align(&self, primary: &Track, reference: &Track) -> Alignment {
        let strategy = self.resolve_strategy(reference);
        match reference.time_span() {
            Some((start, end)) => log::debug!(
                "Aligning {} samples against {} reference samples covering [{}, {}] ({:?})",
                primary.len(),
                reference.len(),
                start,
                end,
                strategy
            ),
            None => log::debug!("Reference track is empty, nothing to align"),
        }

        let search: fn(&[Sample], f64) -> Option<(usize, usize)> = match strategy {
            AlignStrategy::BinarySearch => search_bracket,
            _ => scan_bracket,
        };

        let mut entries = Vec::with_capacity(primary.len());
        for (primary_index, sample) in primary.iter().enumerate() {
            match search(reference.samples(), sample.timestamp) {
                Some((prev_index, next_index)) => entries.push(AlignmentEntry {
                    primary_index,
                    prev_index,
                    next_index,
                }),
                None => log::debug!(
                    "Sample {} at t={} is outside the reference coverage, skipped",
                    primary_index,
                    sample.timestamp
                ),
            }
        }

        Alignment { entries }
    }
}

/// Linear bracket search, valid for any timestamp order.
///
/// A later-than-`t` sample at index 0 has no predecessor and does not end the
/// forward scan; the next later-than-`t` sample is used instead.
pub fn scan_bracket(reference: &[Sample], t: f64) -> Option<(usize, usize)> {
    let prev = reference
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, s)| t < s.timestamp)
        .map(|(j, _)| j - 1)?;
    let next = reference.iter().rposition(|s| t > s.timestamp)? + 1;
    (next < reference.len()).then_some((prev, next))
}

/// Binary bracket search over a time-sorted reference
pub fn search_bracket(reference: &[Sample], t: f64) -> Option<(usize, usize)> {
    let first_after = reference.partition_point(|s| s.timestamp <= t);
    let before_count = reference.partition_point(|s| s.timestamp < t);
    if first_after == 0 || first_after == reference.len() || before_count == 0 {
        return None;
    }
    let next = before_count;
    (next < reference.len()).then_some((first_after - 1, next))
}
