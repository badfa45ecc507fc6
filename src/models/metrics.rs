//! Per-country-per-year metric record
//!
//! This is the flat output type of the merge engine and the only shape the
//! presentation layer ever sees. Field names match the wire format of the
//! original metrics API.

use serde::{Deserialize, Serialize};

/// All socioeconomic metrics for one country in one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryMetricYear {
    /// ISO3 country code
    pub iso3: String,
    /// Country display name
    pub country: String,
    /// Calendar year
    pub year: i32,
    /// Average salary in USD
    pub avg_salary_usd: f64,
    /// Annual inflation in percent
    pub inflation: f64,
    /// Unemployment rate in percent
    pub unemployment: f64,
    /// Corruption Perceptions Index score (0-100, higher is cleaner)
    pub cpi: f64,
    /// Happiness score
    pub happiness: f64,
    /// Derived composite score (0-100)
    pub composite_score: f64,
}

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Compute the composite score from the five primary metrics of a record.
///
/// Each metric is normalized to [0, 1] by a fixed linear clamp, then combined
/// with fixed weights (salary 35%, happiness 20%, CPI 15%, inflation 15%
/// inverted, unemployment 15% inverted). The result is clamped to [0, 100]
/// but not rounded; callers decide the output precision.
#[must_use] pub fn compute_composite(row: &CountryMetricYear) -> f64 {
    let salary_norm = clamp01((row.avg_salary_usd - 40_000.0) / 140_000.0);
    let happiness_norm = clamp01(row.happiness / 10.0);
    let cpi_norm = clamp01(row.cpi / 100.0);
    let inflation_norm = clamp01((15.0 - row.inflation) / 15.0);
    let unemployment_norm = clamp01((15.0 - row.unemployment) / 15.0);

    let score = 100.0
        * (0.35 * salary_norm
            + 0.20 * happiness_norm
            + 0.15 * cpi_norm
            + 0.15 * inflation_norm
            + 0.15 * unemployment_norm);

    score.clamp(0.0, 100.0)
}
