//! Data-quality reporting
//!
//! One observability record per dataset per process lifetime: how many rows
//! loaded, how many were usable, how many were skipped, and a small sample
//! of skipped identifiers. Reports are logs only; data quality never
//! becomes an error.

use std::collections::BTreeSet;

use crate::datasets::DatasetIndex;

/// Choose the reference year for a dataset's quality report.
///
/// The requested year wins if the dataset actually covers it; otherwise the
/// newest covered year; an empty year set falls back to the requested year
/// unchanged.
#[must_use] pub fn pick_log_year(requested: i32, years: &BTreeSet<i32>) -> i32 {
    if years.contains(&requested) {
        return requested;
    }
    years.iter().next_back().copied().unwrap_or(requested)
}

/// Emit the quality record for one dataset
pub(crate) fn emit_report(index: &DatasetIndex, requested_year: i32) {
    let stats = index.stats();
    let year = pick_log_year(requested_year, index.years());
    log::info!(
        "Data quality [{}] (reference year {year}): {} rows loaded, {} usable, {} skipped, skipped sample: {:?}",
        index.kind(),
        stats.loaded,
        stats.usable,
        stats.skipped,
        stats.sample,
    );
}
