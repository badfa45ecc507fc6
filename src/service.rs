//! Merge engine and public metrics API
//!
//! The service orchestrates the whole pipeline: select baseline rows for a
//! request, join the three external dataset loads, overlay finite external
//! values metric by metric, report data quality, and degrade to pure
//! baseline output when any external load fails. The public entry points
//! model a remote API: they add a random delay and never return an error.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::baseline::SUPPORTED_YEARS;
use crate::config::ServiceConfig;
use crate::datasets::DatasetKind;
use crate::datasets::source::{FileSource, RawSource};
use crate::models::metrics::CountryMetricYear;
use crate::store::DatasetStore;

/// Country metrics service: baseline generation plus external dataset merge
#[derive(Debug)]
pub struct MetricsService {
    store: DatasetStore,
    config: ServiceConfig,
}

impl MetricsService {
    /// Create a service reading dataset documents from the configured
    /// data directory
    #[must_use] pub fn new(config: ServiceConfig) -> Self {
        let source = Arc::new(FileSource::new(config.data_dir.clone()));
        Self::with_source(config, source)
    }

    /// Create a service with an injected raw-document source
    #[must_use] pub fn with_source(config: ServiceConfig, source: Arc<dyn RawSource>) -> Self {
        Self {
            store: DatasetStore::new(source),
            config,
        }
    }

    /// Access the underlying store
    #[must_use] pub const fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Merged metrics for every country in one year.
    ///
    /// Simulates remote latency, then merges. Never fails: an unsupported
    /// year yields an empty list, and external load failures degrade to
    /// baseline-only rows.
    pub async fn get_metrics_for_year(&self, year: i32) -> Vec<CountryMetricYear> {
        self.delay().await;
        self.merge_year(year).await
    }

    /// Merged metric series for one country, ordered by year ascending.
    ///
    /// Same contract as [`Self::get_metrics_for_year`]: latency simulated,
    /// unknown ISO3 yields an empty list, failures degrade to baseline.
    pub async fn get_series_for_country(&self, iso3: &str) -> Vec<CountryMetricYear> {
        self.delay().await;
        self.merge_series(iso3).await
    }

    /// Merge one year's baseline rows with external data
    pub async fn merge_year(&self, year: i32) -> Vec<CountryMetricYear> {
        let rows: Vec<CountryMetricYear> = self
            .store
            .baseline()
            .iter()
            .filter(|row| row.year == year)
            .cloned()
            .collect();
        self.merge_rows(rows, year).await
    }

    /// Merge one country's baseline series with external data
    pub async fn merge_series(&self, iso3: &str) -> Vec<CountryMetricYear> {
        let mut rows: Vec<CountryMetricYear> = self
            .store
            .baseline()
            .iter()
            .filter(|row| row.iso3 == iso3)
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.year);

        // A series has no single requested year; report against the newest
        // supported one.
        let reference_year = SUPPORTED_YEARS[SUPPORTED_YEARS.len() - 1];
        self.merge_rows(rows, reference_year).await
    }

    /// Overlay external values onto baseline rows.
    ///
    /// The three dataset loads are issued together and joined; if any of
    /// them fails the merge is abandoned as a whole and the baseline rows
    /// are returned untouched (full fallback, logged, never an error).
    async fn merge_rows(
        &self,
        mut rows: Vec<CountryMetricYear>,
        requested_year: i32,
    ) -> Vec<CountryMetricYear> {
        if rows.is_empty() {
            return rows;
        }

        let joined = tokio::try_join!(
            self.store.index(DatasetKind::Happiness),
            self.store.index(DatasetKind::Inflation),
            self.store.index(DatasetKind::Corruption),
        );
        let (happiness, inflation, corruption) = match joined {
            Ok(indexes) => indexes,
            Err(e) => {
                log::warn!("External datasets unavailable, serving baseline only: {e}");
                return rows;
            }
        };

        for row in &mut rows {
            // Each metric overrides independently; a missing external value
            // leaves the baseline value in place. Only finite values are
            // ever indexed, so a hit is always mergeable.
            if let Some(score) = happiness.value(&row.iso3, row.year) {
                row.happiness = score;
            }
            if let Some(rate) = inflation.value(&row.country, row.year) {
                row.inflation = rate;
            }
            if let Some(score) = corruption.value(&row.country, row.year) {
                row.cpi = score;
            }
            // The composite score stays as generated: it is derived from
            // baseline values only and is never recomputed post-merge.
        }

        self.store.report_quality(&happiness, requested_year);
        self.store.report_quality(&inflation, requested_year);
        self.store.report_quality(&corruption, requested_year);

        rows
    }

    /// Simulated network latency before a request resolves
    async fn delay(&self) {
        let (min, max) = self.config.latency_ms;
        if max == 0 {
            return;
        }
        let ms = rand::rng().random_range(min..=max);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
