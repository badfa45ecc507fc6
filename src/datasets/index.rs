//! Indexed view of a raw dataset
//!
//! Each raw dataset collapses into a lookup of entity key -> year -> value,
//! built once per process and read through accessors thereafter. Rows that
//! cannot contribute (missing key, no finite value) are excluded silently
//! but tracked in [`SkipStats`] for the data-quality report.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashMap;

use super::DatasetKind;

/// Upper bound on distinct identifiers kept in the skip sample
const SAMPLE_CAP: usize = 5;
/// Only the first skip events are eligible for the sample
const SAMPLE_EVENT_WINDOW: usize = 25;

/// Usable/skipped row counts for one dataset, with a small sample of
/// skipped entity identifiers
#[derive(Debug, Clone, Default)]
pub struct SkipStats {
    /// Rows present in the raw document
    pub loaded: usize,
    /// Rows that contributed at least one indexed value
    pub usable: usize,
    /// Rows excluded from the index
    pub skipped: usize,
    /// Up to [`SAMPLE_CAP`] distinct identifiers from the first
    /// [`SAMPLE_EVENT_WINDOW`] skip events
    pub sample: Vec<String>,
    events: usize,
}

impl SkipStats {
    /// Record one usable row
    pub fn record_usable(&mut self) {
        self.usable += 1;
    }

    /// Record one skipped row. The identifier is whatever the row offered
    /// (name or code); rows with no identifying field still count.
    pub fn record_skip(&mut self, identifier: Option<&str>) {
        self.skipped += 1;
        self.events += 1;
        if self.events > SAMPLE_EVENT_WINDOW || self.sample.len() >= SAMPLE_CAP {
            return;
        }
        if let Some(id) = identifier {
            if !self.sample.iter().any(|s| s == id) {
                self.sample.push(id.to_string());
            }
        }
    }
}

/// Lookup of entity key -> year -> metric value for one dataset.
///
/// Owned exclusively by the dataset store; the merge engine only reads
/// through [`DatasetIndex::value`].
#[derive(Debug, Clone)]
pub struct DatasetIndex {
    kind: DatasetKind,
    values: FxHashMap<String, BTreeMap<i32, f64>>,
    years: BTreeSet<i32>,
    stats: SkipStats,
}

impl DatasetIndex {
    /// Create an empty index for a dataset
    #[must_use] pub fn new(kind: DatasetKind) -> Self {
        Self {
            kind,
            values: FxHashMap::default(),
            years: BTreeSet::new(),
            stats: SkipStats::default(),
        }
    }

    /// Which dataset this index was built from
    #[must_use] pub const fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// Look up the value for an entity in a year. Only finite values are
    /// ever stored, so a hit is always safe to merge.
    #[must_use] pub fn value(&self, key: &str, year: i32) -> Option<f64> {
        self.values.get(key).and_then(|by_year| by_year.get(&year)).copied()
    }

    /// Years for which this dataset holds any value
    #[must_use] pub const fn years(&self) -> &BTreeSet<i32> {
        &self.years
    }

    /// Number of indexed entities
    #[must_use] pub fn entity_count(&self) -> usize {
        self.values.len()
    }

    /// Skip statistics gathered while building this index
    #[must_use] pub const fn stats(&self) -> &SkipStats {
        &self.stats
    }

    pub(crate) fn insert(&mut self, key: &str, year: i32, value: f64) {
        self.years.insert(year);
        self.values.entry(key.to_string()).or_default().insert(year, value);
    }

    pub(crate) fn stats_mut(&mut self) -> &mut SkipStats {
        &mut self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_capped_and_distinct() {
        let mut stats = SkipStats::default();
        for i in 0..10 {
            stats.record_skip(Some("Atlantis"));
            stats.record_skip(Some(&format!("Lost-{i}")));
        }
        assert_eq!(stats.skipped, 20);
        assert_eq!(stats.sample.len(), SAMPLE_CAP);
        assert_eq!(stats.sample[0], "Atlantis");
        // "Atlantis" appears once despite repeated skips.
        assert_eq!(stats.sample.iter().filter(|s| *s == "Atlantis").count(), 1);
    }

    #[test]
    fn sample_window_closes_after_early_events() {
        let mut stats = SkipStats::default();
        for i in 0..30 {
            // Identifiers only on late events: the window is already shut.
            let id = if i < SAMPLE_EVENT_WINDOW { None } else { Some("Late") };
            stats.record_skip(id);
        }
        assert_eq!(stats.skipped, 30);
        assert!(stats.sample.is_empty());
    }

    #[test]
    fn lookup_misses_are_none() {
        let mut index = DatasetIndex::new(DatasetKind::Happiness);
        index.insert("DNK", 2024, 61.2);
        assert_eq!(index.value("DNK", 2024), Some(61.2));
        assert_eq!(index.value("DNK", 2023), None);
        assert_eq!(index.value("SWE", 2024), None);
        assert!(index.years().contains(&2024));
    }
}
