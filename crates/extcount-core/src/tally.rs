//! Running count of accepted extensions.

use crate::report::ReportEntry;
use std::collections::HashMap;

/// Extension (lowercase, with dot) to count. Extensions never seen have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionTally {
    counts: HashMap<String, u64>,
}

impl ExtensionTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, ext: String) {
        *self.counts.entry(ext).or_insert(0) += 1;
    }

    /// Count for `ext`; zero when never recorded.
    pub fn get(&self, ext: &str) -> u64 {
        self.counts.get(ext).copied().unwrap_or(0)
    }

    /// Number of distinct extensions.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries ordered by count descending, then extension ascending so equal
    /// counts come out in the same order on every run.
    pub fn into_report(self) -> Vec<ReportEntry> {
        let mut entries: Vec<ReportEntry> = self
            .counts
            .into_iter()
            .map(|(extension, count)| ReportEntry { extension, count })
            .collect();
        entries.sort_unstable_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.extension.cmp(&b.extension))
        });
        entries
    }
}
