//! Shared test fixtures: an in-memory raw-document source with fetch
//! accounting and injectable failures, plus canned dataset documents.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;

use atlas_data::datasets::{DatasetKind, RawSource};
use atlas_data::{AtlasError, Result};

/// Serves dataset documents from memory, counting fetches per kind and
/// optionally failing the first N fetches.
pub struct MemorySource {
    docs: HashMap<DatasetKind, String>,
    counts: Mutex<HashMap<DatasetKind, usize>>,
    failures_remaining: AtomicUsize,
}

impl MemorySource {
    pub fn new(docs: HashMap<DatasetKind, String>) -> Self {
        Self {
            docs,
            counts: Mutex::new(HashMap::new()),
            failures_remaining: AtomicUsize::new(0),
        }
    }

    /// Fail the first `n` fetches (across all kinds) before serving
    pub fn failing_first(docs: HashMap<DatasetKind, String>, n: usize) -> Self {
        let source = Self::new(docs);
        source.failures_remaining.store(n, Ordering::SeqCst);
        source
    }

    pub fn fetch_count(&self, kind: DatasetKind) -> usize {
        *self.counts.lock().unwrap().get(&kind).unwrap_or(&0)
    }
}

impl RawSource for MemorySource {
    fn fetch<'a>(
        &'a self,
        kind: DatasetKind,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            *self.counts.lock().unwrap().entry(kind).or_insert(0) += 1;

            // Suspend once so concurrent fetches can actually overlap.
            tokio::task::yield_now().await;

            let remaining = self.failures_remaining.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
                return Err(AtlasError::dataset(kind, "simulated fetch failure"));
            }

            self.docs
                .get(&kind)
                .cloned()
                .ok_or_else(|| AtlasError::dataset(kind, "document not found"))
        })
    }
}

/// A happiness document with Danish scores for 2024/2025
pub fn happiness_doc() -> String {
    json!([
        { "Country": "Denmark", "ISO": "DNK", "HPI_2024": 60.4, "HPI_2025": 55.2 },
        { "Country": "Sweden", "ISO": "SWE", "HPI_2024": "57.9", "HPI_2025": null }
    ])
    .to_string()
}

/// An inflation document covering Denmark and Sweden
pub fn inflation_doc() -> String {
    json!([
        { "Country Name": "Denmark", "2024": 1.9, "2025": "2.1" },
        { "Country Name": "Sweden", "2024": "3.4", "2025": 2.6 }
    ])
    .to_string()
}

/// A corruption document covering Denmark only
pub fn corruption_doc() -> String {
    json!([
        { "year": 2024, "country": "Denmark", "score": 90 },
        { "year": "2025", "country": "Denmark", "score": "89" }
    ])
    .to_string()
}

/// All three documents keyed by kind
pub fn full_docs() -> HashMap<DatasetKind, String> {
    HashMap::from([
        (DatasetKind::Happiness, happiness_doc()),
        (DatasetKind::Inflation, inflation_doc()),
        (DatasetKind::Corruption, corruption_doc()),
    ])
}
