//! Inflation dataset indexer
//!
//! Wide rows keyed by country display name, with one bare-year column per
//! year (values may be numbers or numeric strings). The name join against
//! baseline countries is an exact string match; unmatched spellings simply
//! never merge.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

use super::index::DatasetIndex;
use super::{DatasetKind, coerce_f64};

/// One raw inflation row as it appears in the document
#[derive(Debug, Deserialize)]
pub(crate) struct InflationRow {
    #[serde(rename = "Country Name")]
    country: Option<String>,
    #[serde(flatten)]
    columns: BTreeMap<String, Value>,
}

/// Discover the year columns: field names that parse as integers
fn year_columns(row: &InflationRow) -> Vec<(String, i32)> {
    row.columns
        .keys()
        .filter_map(|name| {
            let year = name.trim().parse::<i32>().ok()?;
            Some((name.clone(), year))
        })
        .collect()
}

/// Parse the raw inflation document and build its index
pub(crate) fn build_index(raw: &str) -> Result<DatasetIndex> {
    let rows: Vec<InflationRow> = serde_json::from_str(raw)?;
    let mut index = DatasetIndex::new(DatasetKind::Inflation);

    let columns = rows.first().map(year_columns).unwrap_or_default();
    index.stats_mut().loaded = rows.len();

    for row in &rows {
        let Some(country) = row.country.as_deref().filter(|s| !s.is_empty()) else {
            index.stats_mut().record_skip(None);
            continue;
        };

        let mut indexed_any = false;
        for (column, year) in &columns {
            if let Some(rate) = row.columns.get(column).and_then(coerce_f64) {
                index.insert(country, *year, rate);
                indexed_any = true;
            }
        }

        if indexed_any {
            index.stats_mut().record_usable();
        } else {
            index.stats_mut().record_skip(Some(country));
        }
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn indexes_by_name_with_string_coercion() {
        let raw = json!([
            { "Country Name": "Denmark", "2024": 1.9, "2025": "2.1" },
            { "Country Name": "Sweden", "2024": "3.4", "2025": ".." }
        ])
        .to_string();

        let index = build_index(&raw).unwrap();
        assert_eq!(index.value("Denmark", 2024), Some(1.9));
        assert_eq!(index.value("Denmark", 2025), Some(2.1));
        assert_eq!(index.value("Sweden", 2024), Some(3.4));
        assert_eq!(index.value("Sweden", 2025), None);
        assert_eq!(index.stats().usable, 2);
    }

    #[test]
    fn non_year_columns_are_ignored() {
        let raw = json!([
            { "Country Name": "Denmark", "Indicator Name": "CPI inflation", "2024": 1.9 }
        ])
        .to_string();

        let index = build_index(&raw).unwrap();
        assert_eq!(index.value("Denmark", 2024), Some(1.9));
        assert_eq!(index.years().len(), 1);
    }

    #[test]
    fn nameless_rows_count_without_sample_entry() {
        let raw = json!([
            { "2024": 5.0 },
            { "Country Name": "Denmark", "2024": 1.9 }
        ])
        .to_string();

        let index = build_index(&raw).unwrap();
        assert_eq!(index.stats().skipped, 1);
        assert!(index.stats().sample.is_empty());
    }
}
