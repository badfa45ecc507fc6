//! A Rust library for country-level socioeconomic metrics: deterministic
//! baseline generation, merging of heterogeneous external datasets, and
//! data-quality reporting.
//!
//! The merge engine reconciles three independently-shaped raw datasets
//! (happiness, inflation, corruption perception) against a synthetic,
//! fully deterministic baseline, overriding baseline values metric by
//! metric wherever a finite external value exists and falling back to the
//! baseline everywhere else.

pub mod baseline;
pub mod config;
pub mod datasets;
pub mod error;
pub mod models;
pub mod quality;
pub mod service;
pub mod store;

// Re-export the most common types for easier use
// Core types
pub use config::ServiceConfig;
pub use error::{AtlasError, Result};
pub use models::country::{COUNTRIES, Country, country_by_iso3};
pub use models::meta::MetricKey;
pub use models::metrics::{CountryMetricYear, compute_composite};

// Baseline generation
pub use baseline::{SUPPORTED_YEARS, baseline_row, baseline_table};

// Dataset loading and merging
pub use datasets::{DatasetIndex, DatasetKind, FileSource, RawSource, SkipStats};
pub use quality::pick_log_year;
pub use service::MetricsService;
pub use store::DatasetStore;
