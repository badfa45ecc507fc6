//! Display metadata for metrics
//!
//! Labels, units, polarity and value formatting for each of the six metrics,
//! so consumers can render values without hard-coding per-metric rules.

use crate::models::metrics::CountryMetricYear;

/// Identifies one of the six metrics on a [`CountryMetricYear`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    /// Average salary in USD
    AvgSalaryUsd,
    /// Annual inflation in percent
    Inflation,
    /// Unemployment rate in percent
    Unemployment,
    /// Corruption Perceptions Index score
    Cpi,
    /// Happiness score
    Happiness,
    /// Derived composite score
    CompositeScore,
}

impl MetricKey {
    /// All metrics, in wire-format field order
    pub const ALL: [Self; 6] = [
        Self::AvgSalaryUsd,
        Self::Inflation,
        Self::Unemployment,
        Self::Cpi,
        Self::Happiness,
        Self::CompositeScore,
    ];

    /// Wire-format field name
    #[must_use] pub const fn field_name(self) -> &'static str {
        match self {
            Self::AvgSalaryUsd => "avg_salary_usd",
            Self::Inflation => "inflation",
            Self::Unemployment => "unemployment",
            Self::Cpi => "cpi",
            Self::Happiness => "happiness",
            Self::CompositeScore => "composite_score",
        }
    }

    /// Human-readable label
    #[must_use] pub const fn label(self) -> &'static str {
        match self {
            Self::AvgSalaryUsd => "Average Salary",
            Self::Inflation => "Inflation",
            Self::Unemployment => "Unemployment",
            Self::Cpi => "Corruption Perceptions Index",
            Self::Happiness => "Happy Planet Index (HPI)",
            Self::CompositeScore => "Composite Score",
        }
    }

    /// Unit shown next to the label
    #[must_use] pub const fn unit(self) -> &'static str {
        match self {
            Self::AvgSalaryUsd => "USD",
            Self::Inflation | Self::Unemployment => "%",
            Self::Cpi | Self::Happiness | Self::CompositeScore => "0-100",
        }
    }

    /// Whether a higher value is better for this metric
    #[must_use] pub const fn higher_is_better(self) -> bool {
        !matches!(self, Self::Inflation | Self::Unemployment)
    }

    /// Read this metric's value from a record
    #[must_use] pub fn value(self, row: &CountryMetricYear) -> f64 {
        match self {
            Self::AvgSalaryUsd => row.avg_salary_usd,
            Self::Inflation => row.inflation,
            Self::Unemployment => row.unemployment,
            Self::Cpi => row.cpi,
            Self::Happiness => row.happiness,
            Self::CompositeScore => row.composite_score,
        }
    }

    /// Format a value of this metric for display
    #[must_use] pub fn format(self, value: f64) -> String {
        match self {
            Self::AvgSalaryUsd => format_currency(value, 0),
            Self::Inflation | Self::Unemployment => format_percent(value, 1),
            Self::Cpi => format_score(value, 0),
            Self::Happiness | Self::CompositeScore => format_score(value, 1),
        }
    }
}

/// Format a number with thousands separators and a fixed number of decimals
#[must_use] pub fn format_number(value: f64, digits: usize) -> String {
    let formatted = format!("{value:.digits$}", value = value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    // Group the integer digits in threes from the right.
    let bytes = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, b) in bytes.iter().enumerate() {
        if idx > 0 && (bytes.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Format a currency value, e.g. `$70,500`
#[must_use] pub fn format_currency(value: f64, digits: usize) -> String {
    format!("${}", format_number(value, digits))
}

/// Format a percentage, e.g. `4.5%`
#[must_use] pub fn format_percent(value: f64, digits: usize) -> String {
    format!("{}%", format_number(value, digits))
}

/// Format a plain score, e.g. `61.2`
#[must_use] pub fn format_score(value: f64, digits: usize) -> String {
    format_number(value, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(70_500.0, 0), "70,500");
        assert_eq!(format_number(1_234_567.0, 0), "1,234,567");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(-1_200.5, 1), "-1,200.5");
    }

    #[test]
    fn metric_formats() {
        assert_eq!(MetricKey::AvgSalaryUsd.format(70_500.0), "$70,500");
        assert_eq!(MetricKey::Inflation.format(4.5), "4.5%");
        assert_eq!(MetricKey::Cpi.format(61.4), "61");
        assert_eq!(MetricKey::CompositeScore.format(61.25), "61.2");
    }

    #[test]
    fn polarity() {
        assert!(MetricKey::AvgSalaryUsd.higher_is_better());
        assert!(!MetricKey::Inflation.higher_is_better());
        assert!(!MetricKey::Unemployment.higher_is_better());
        assert!(MetricKey::Cpi.higher_is_better());
    }
}
