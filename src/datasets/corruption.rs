//! Corruption Perceptions Index dataset indexer
//!
//! Flat tuples of (year, country, score) keyed by country display name.
//! Year and score may arrive as numeric strings and are coerced before use.

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

use super::index::DatasetIndex;
use super::{DatasetKind, coerce_f64, coerce_year};

/// One raw corruption tuple as it appears in the document
#[derive(Debug, Deserialize)]
pub(crate) struct CorruptionRow {
    #[serde(default)]
    year: Value,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    score: Value,
}

/// Parse the raw corruption document and build its index.
///
/// Each tuple stands alone: a tuple missing its country, or whose year or
/// score does not coerce, is skipped and counted.
pub(crate) fn build_index(raw: &str) -> Result<DatasetIndex> {
    let rows: Vec<CorruptionRow> = serde_json::from_str(raw)?;
    let mut index = DatasetIndex::new(DatasetKind::Corruption);
    index.stats_mut().loaded = rows.len();

    for row in &rows {
        let Some(country) = row.country.as_deref().filter(|s| !s.is_empty()) else {
            index.stats_mut().record_skip(None);
            continue;
        };
        let (Some(year), Some(score)) = (coerce_year(&row.year), coerce_f64(&row.score)) else {
            index.stats_mut().record_skip(Some(country));
            continue;
        };

        index.insert(country, year, score);
        index.stats_mut().record_usable();
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn indexes_tuples_with_coercion() {
        let raw = json!([
            { "year": 2024, "country": "Denmark", "score": 90 },
            { "year": "2024", "country": "Sweden", "score": "82" },
            { "year": "2025", "country": "Denmark", "score": 89.5 }
        ])
        .to_string();

        let index = build_index(&raw).unwrap();
        assert_eq!(index.value("Denmark", 2024), Some(90.0));
        assert_eq!(index.value("Sweden", 2024), Some(82.0));
        assert_eq!(index.value("Denmark", 2025), Some(89.5));
        assert_eq!(index.stats().usable, 3);
        assert_eq!(index.years().len(), 2);
    }

    #[test]
    fn skips_defective_tuples() {
        let raw = json!([
            { "year": 2024, "country": "Denmark", "score": 90 },
            { "year": 2024, "score": 50 },
            { "year": "soon", "country": "Sweden", "score": 50 },
            { "year": 2024, "country": "Norway", "score": "high" }
        ])
        .to_string();

        let index = build_index(&raw).unwrap();
        assert_eq!(index.stats().loaded, 4);
        assert_eq!(index.stats().usable, 1);
        assert_eq!(index.stats().skipped, 3);
        assert_eq!(index.stats().sample, vec!["Sweden", "Norway"]);
    }
}
