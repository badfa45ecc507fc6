//! Happiness dataset indexer
//!
//! Wide rows keyed by ISO3 code, with one `HPI_<year>` column per year.
//! Year columns are discovered by scanning the first row's field names.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

use super::index::DatasetIndex;
use super::{DatasetKind, coerce_f64};

/// Prefix of the per-year score columns
const YEAR_COLUMN_PREFIX: &str = "HPI_";

/// One raw happiness row as it appears in the document
#[derive(Debug, Deserialize)]
pub(crate) struct HappinessRow {
    #[serde(rename = "Country")]
    country: Option<String>,
    #[serde(rename = "ISO")]
    iso3: Option<String>,
    #[serde(flatten)]
    columns: BTreeMap<String, Value>,
}

/// Discover the year columns from a row's field names
fn year_columns(row: &HappinessRow) -> Vec<(String, i32)> {
    row.columns
        .keys()
        .filter_map(|name| {
            let suffix = name.strip_prefix(YEAR_COLUMN_PREFIX)?;
            let year = suffix.parse::<i32>().ok()?;
            Some((name.clone(), year))
        })
        .collect()
}

/// Parse the raw happiness document and build its index.
///
/// Rows without an ISO code, or with no finite score in any discovered year
/// column, are skipped and counted.
pub(crate) fn build_index(raw: &str) -> Result<DatasetIndex> {
    let rows: Vec<HappinessRow> = serde_json::from_str(raw)?;
    let mut index = DatasetIndex::new(DatasetKind::Happiness);

    let columns = rows.first().map(year_columns).unwrap_or_default();
    index.stats_mut().loaded = rows.len();

    for row in &rows {
        let Some(iso3) = row.iso3.as_deref().filter(|s| !s.is_empty()) else {
            index.stats_mut().record_skip(row.country.as_deref());
            continue;
        };

        let mut indexed_any = false;
        for (column, year) in &columns {
            if let Some(score) = row.columns.get(column).and_then(coerce_f64) {
                index.insert(iso3, *year, score);
                indexed_any = true;
            }
        }

        if indexed_any {
            index.stats_mut().record_usable();
        } else {
            index.stats_mut().record_skip(Some(iso3));
        }
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn indexes_by_iso_and_discovered_years() {
        let raw = json!([
            { "Country": "Denmark", "ISO": "DNK", "HPI_2024": 61.2, "HPI_2025": 62.0 },
            { "Country": "Sweden", "ISO": "SWE", "HPI_2024": "58.1", "HPI_2025": null }
        ])
        .to_string();

        let index = build_index(&raw).unwrap();
        assert_eq!(index.value("DNK", 2024), Some(61.2));
        assert_eq!(index.value("DNK", 2025), Some(62.0));
        assert_eq!(index.value("SWE", 2024), Some(58.1));
        assert_eq!(index.value("SWE", 2025), None);
        assert_eq!(index.stats().usable, 2);
        assert_eq!(index.stats().skipped, 0);
        assert!(index.years().contains(&2024) && index.years().contains(&2025));
    }

    #[test]
    fn skips_rows_without_iso() {
        let raw = json!([
            { "Country": "Denmark", "ISO": "DNK", "HPI_2024": 61.2 },
            { "Country": "Nowhere", "HPI_2024": 50.0 },
            { "Country": "Blank", "ISO": "", "HPI_2024": 50.0 }
        ])
        .to_string();

        let index = build_index(&raw).unwrap();
        assert_eq!(index.stats().usable, 1);
        assert_eq!(index.stats().skipped, 2);
        assert_eq!(index.stats().sample, vec!["Nowhere", "Blank"]);
    }

    #[test]
    fn skips_rows_with_no_finite_value() {
        let raw = json!([
            { "Country": "Denmark", "ISO": "DNK", "HPI_2024": 61.2 },
            { "Country": "Iceland", "ISO": "ISL", "HPI_2024": "n/a" }
        ])
        .to_string();

        let index = build_index(&raw).unwrap();
        assert_eq!(index.value("ISL", 2024), None);
        assert_eq!(index.stats().skipped, 1);
        assert_eq!(index.stats().sample, vec!["ISL"]);
    }

    #[test]
    fn empty_document_yields_empty_index() {
        let index = build_index("[]").unwrap();
        assert_eq!(index.entity_count(), 0);
        assert!(index.years().is_empty());
        assert_eq!(index.stats().loaded, 0);
    }
}
