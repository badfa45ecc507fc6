//! Raw dataset definitions, loaders and indexers
//!
//! Three external datasets feed the merge engine, each with its own shape
//! and entity key:
//!
//! - Happiness: wide rows keyed by ISO3, one `HPI_<year>` column per year
//! - Inflation: wide rows keyed by country name, bare-year columns
//! - Corruption: flat (year, country, score) tuples keyed by country name
//!
//! Rows are parsed at the loader boundary into per-dataset row types and
//! immediately collapsed into a [`DatasetIndex`]; no raw shape escapes this
//! module.

pub mod corruption;
pub mod happiness;
pub mod index;
pub mod inflation;
pub mod source;

use std::fmt;

use serde_json::Value;

pub use index::{DatasetIndex, SkipStats};
pub use source::{FileSource, RawSource};

/// The three external datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// Happy Planet Index scores, keyed by ISO3
    Happiness,
    /// Annual inflation rates, keyed by country display name
    Inflation,
    /// Corruption Perceptions Index scores, keyed by country display name
    Corruption,
}

impl DatasetKind {
    /// All dataset kinds, in merge order
    pub const ALL: [Self; 3] = [Self::Happiness, Self::Inflation, Self::Corruption];

    /// Short name used in logs and errors
    #[must_use] pub const fn name(self) -> &'static str {
        match self {
            Self::Happiness => "happiness",
            Self::Inflation => "inflation",
            Self::Corruption => "corruption",
        }
    }

    /// Fixed document name fetched by the loader
    #[must_use] pub const fn document_name(self) -> &'static str {
        match self {
            Self::Happiness => "happiness.json",
            Self::Inflation => "inflation.json",
            Self::Corruption => "corruption.json",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coerce a JSON value to a finite f64.
///
/// Numbers pass through; numeric strings are parsed. Anything else, and any
/// non-finite result, yields `None`.
#[must_use] pub(crate) fn coerce_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Coerce a JSON value to a year, accepting numbers and numeric strings
#[must_use] pub(crate) fn coerce_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}
