//! Deterministic baseline generator
//!
//! Produces a complete, gap-free synthetic metric record for every supported
//! (country, year) pair. Each country's multi-year trajectory is derived
//! from its ISO3 code; year-specific noise is derived from an independent
//! `ISO3-year` seed. No system randomness enters this path, so the same
//! inputs always yield bit-identical output.

pub mod rng;

use itertools::iproduct;

use crate::models::country::{COUNTRIES, Country};
use crate::models::metrics::{CountryMetricYear, compute_composite};
use rng::seeded_rng;

/// Years covered by the baseline table, ascending
pub const SUPPORTED_YEARS: [i32; 6] = [2020, 2021, 2022, 2023, 2024, 2025];

/// First year in [`SUPPORTED_YEARS`]; trend offsets count from here
pub const FIRST_YEAR: i32 = 2020;

/// Per-country trajectory parameters drawn from the country's seed
#[derive(Debug, Clone)]
struct CountryProfile {
    salary_base: f64,
    inflation_base: f64,
    unemployment_base: f64,
    cpi_base: f64,
    happiness_base: f64,
    salary_trend: f64,
    inflation_trend: f64,
    unemployment_trend: f64,
    cpi_trend: f64,
    happiness_trend: f64,
}

impl CountryProfile {
    /// Draw the five base values and five trend slopes for a country.
    /// Draw order is part of the determinism contract and must not change.
    fn for_iso3(iso3: &str) -> Self {
        let mut rng = seeded_rng(iso3);
        Self {
            salary_base: 40_000.0 + rng.next_f64() * 120_000.0,
            inflation_base: 1.0 + rng.next_f64() * 8.0,
            unemployment_base: 3.0 + rng.next_f64() * 8.0,
            cpi_base: 25.0 + rng.next_f64() * 60.0,
            happiness_base: 4.5 + rng.next_f64() * 3.5,
            salary_trend: -0.01 + rng.next_f64() * 0.05,
            inflation_trend: -0.2 + rng.next_f64() * 0.6,
            unemployment_trend: -0.2 + rng.next_f64() * 0.6,
            cpi_trend: -0.1 + rng.next_f64() * 0.4,
            happiness_trend: -0.05 + rng.next_f64() * 0.2,
        }
    }
}

/// Round to a fixed number of decimals, half away from zero
fn round_dp(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Generate the baseline record for one (country, year) pair.
///
/// Base and trend come from the country profile; a second, independent seed
/// (`ISO3-year`) adds year-specific noise. Every metric is clamped to its
/// documented range and rounded to its fixed precision, then the composite
/// score is derived from the clamped/rounded values.
#[must_use] pub fn baseline_row(country: &Country, year: i32) -> CountryMetricYear {
    let profile = CountryProfile::for_iso3(country.iso3);
    let offset = f64::from(year - FIRST_YEAR);

    let mut rng = seeded_rng(&format!("{}-{}", country.iso3, year));
    let salary_noise = 0.92 + rng.next_f64() * 0.16;
    let inflation_noise = -1.2 + rng.next_f64() * 2.4;
    let unemployment_noise = -1.0 + rng.next_f64() * 2.0;
    let cpi_noise = -3.0 + rng.next_f64() * 6.0;
    let happiness_noise = -0.3 + rng.next_f64() * 0.6;

    let avg_salary_usd = (profile.salary_base
        * (1.0 + profile.salary_trend * offset)
        * salary_noise)
        .clamp(30_000.0, 190_000.0);
    let inflation = (profile.inflation_base + profile.inflation_trend * offset + inflation_noise)
        .clamp(0.4, 15.0);
    let unemployment = (profile.unemployment_base
        + profile.unemployment_trend * offset
        + unemployment_noise)
        .clamp(2.0, 18.0);
    let cpi = (profile.cpi_base + profile.cpi_trend * offset + cpi_noise).clamp(20.0, 90.0);
    let happiness = (profile.happiness_base + profile.happiness_trend * offset + happiness_noise)
        .clamp(3.8, 8.8);

    let mut row = CountryMetricYear {
        iso3: country.iso3.to_string(),
        country: country.name.to_string(),
        year,
        avg_salary_usd: round_dp(avg_salary_usd, 0),
        inflation: round_dp(inflation, 1),
        unemployment: round_dp(unemployment, 1),
        cpi: round_dp(cpi, 0),
        happiness: round_dp(happiness, 1),
        composite_score: 0.0,
    };
    row.composite_score = round_dp(compute_composite(&row), 1);
    row
}

/// Generate the full baseline table: every supported country crossed with
/// every supported year, country-major then year-ascending.
#[must_use] pub fn baseline_table() -> Vec<CountryMetricYear> {
    iproduct!(COUNTRIES.iter(), SUPPORTED_YEARS)
        .map(|(country, year)| baseline_row(country, year))
        .collect()
}
