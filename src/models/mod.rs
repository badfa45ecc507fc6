//! Domain models for country-level socioeconomic metrics
//!
//! This module contains the static country metadata, the flat
//! per-country-per-year metric record consumed by the presentation layer,
//! and display metadata for the individual metrics.

pub mod country;
pub mod meta;
pub mod metrics;

pub use country::{COUNTRIES, Country, country_by_iso3};
pub use meta::MetricKey;
pub use metrics::CountryMetricYear;
