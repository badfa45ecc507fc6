//! Dataset store: memoized loading, indexing and quality reporting
//!
//! The store owns all per-process caches that the original design kept as
//! module globals: the lazily built baseline table, one index cell per raw
//! dataset, and the set of datasets already covered by a quality report.
//! It is explicitly constructed and handed to the service, so nothing here
//! is hidden global state.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, OnceLock};

use tokio::sync::OnceCell;

use crate::baseline;
use crate::datasets::source::RawSource;
use crate::datasets::{DatasetIndex, DatasetKind, corruption, happiness, inflation};
use crate::error::Result;
use crate::models::metrics::CountryMetricYear;
use crate::quality;

/// Process-lifetime caches for baseline and external dataset data
pub struct DatasetStore {
    source: Arc<dyn RawSource>,
    baseline: OnceLock<Vec<CountryMetricYear>>,
    happiness: OnceCell<Arc<DatasetIndex>>,
    inflation: OnceCell<Arc<DatasetIndex>>,
    corruption: OnceCell<Arc<DatasetIndex>>,
    reported: Mutex<HashSet<DatasetKind>>,
}

impl DatasetStore {
    /// Create a store fetching raw documents through `source`
    #[must_use] pub fn new(source: Arc<dyn RawSource>) -> Self {
        Self {
            source,
            baseline: OnceLock::new(),
            happiness: OnceCell::new(),
            inflation: OnceCell::new(),
            corruption: OnceCell::new(),
            reported: Mutex::new(HashSet::new()),
        }
    }

    /// The full baseline table, generated on first access and cached
    #[must_use] pub fn baseline(&self) -> &[CountryMetricYear] {
        self.baseline.get_or_init(baseline::baseline_table)
    }

    fn cell(&self, kind: DatasetKind) -> &OnceCell<Arc<DatasetIndex>> {
        match kind {
            DatasetKind::Happiness => &self.happiness,
            DatasetKind::Inflation => &self.inflation,
            DatasetKind::Corruption => &self.corruption,
        }
    }

    /// Get the index for a dataset, loading and indexing it on first use.
    ///
    /// Concurrent calls before the first load resolves all await the same
    /// in-flight load; exactly one fetch is issued. A successful index is
    /// cached for the process lifetime. A failed load leaves the cell
    /// empty, so the next call retries from scratch.
    pub async fn index(&self, kind: DatasetKind) -> Result<Arc<DatasetIndex>> {
        let index = self
            .cell(kind)
            .get_or_try_init(|| async move {
                let raw = self.source.fetch(kind).await?;
                let index = match kind {
                    DatasetKind::Happiness => happiness::build_index(&raw)?,
                    DatasetKind::Inflation => inflation::build_index(&raw)?,
                    DatasetKind::Corruption => corruption::build_index(&raw)?,
                };
                log::info!(
                    "Indexed {} dataset: {} entities across {} years",
                    kind,
                    index.entity_count(),
                    index.years().len()
                );
                Ok::<_, crate::error::AtlasError>(Arc::new(index))
            })
            .await?;
        Ok(Arc::clone(index))
    }

    /// Emit the data-quality report for a dataset, once per store lifetime.
    ///
    /// Returns whether a record was emitted; repeat calls are no-ops.
    pub fn report_quality(&self, index: &DatasetIndex, requested_year: i32) -> bool {
        let mut reported = match self.reported.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if !reported.insert(index.kind()) {
            return false;
        }
        quality::emit_report(index, requested_year);
        true
    }
}

impl std::fmt::Debug for DatasetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetStore")
            .field("baseline_cached", &self.baseline.get().is_some())
            .field("happiness_cached", &self.happiness.initialized())
            .field("inflation_cached", &self.inflation.initialized())
            .field("corruption_cached", &self.corruption.initialized())
            .finish_non_exhaustive()
    }
}
