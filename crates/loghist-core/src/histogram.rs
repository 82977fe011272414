//! Key counting in first-encounter order.
//!
//! The histogram is a plain owned value: the caller builds it during the read
//! pass and hands it to [`report`](crate::report) afterwards.

use indexmap::IndexMap;

use crate::types::HistogramEntry;

/// Key → count mapping that remembers the order keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: IndexMap<String, u64>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`. The empty string is a valid key.
    pub fn record(&mut self, key: impl Into<String>) {
        *self.counts.entry(key.into()).or_insert(0) += 1;
    }

    /// Occurrences recorded for `key` (0 if never seen).
    pub fn count(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of lines recorded.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Consume the histogram into entries sorted by count, highest first.
    ///
    /// The sort is stable, so keys with equal counts stay in first-encounter
    /// order.
    pub fn into_sorted(self) -> Vec<HistogramEntry> {
        let mut entries: Vec<HistogramEntry> = self
            .counts
            .into_iter()
            .map(|(key, count)| HistogramEntry { count, key })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

impl<K: Into<String>> FromIterator<K> for Histogram {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut hist = Histogram::new();
        hist.extend(iter);
        hist
    }
}

impl<K: Into<String>> Extend<K> for Histogram {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.record(key);
        }
    }
}
