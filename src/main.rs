use std::path::PathBuf;
use std::time::Instant;

use log::{info, warn};

use atlas_data::{MetricKey, MetricsService, ServiceConfig};

#[tokio::main]
async fn main() {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("data"), PathBuf::from);
    if !data_dir.exists() {
        warn!(
            "Data directory not found: {} (serving baseline-only data)",
            data_dir.display()
        );
    }

    let config = ServiceConfig {
        data_dir,
        ..ServiceConfig::default()
    };
    let service = MetricsService::new(config);

    // Example 1: one year across all countries
    let year = 2025;
    info!("Fetching metrics for {year}...");
    let start = Instant::now();
    let rows = service.get_metrics_for_year(year).await;
    info!("Received {} rows in {:?}", rows.len(), start.elapsed());

    for row in rows.iter().take(10) {
        println!(
            "{} {:<22} salary {:>9}  inflation {:>6}  unemployment {:>6}  cpi {:>3}  happiness {:>5}  composite {:>5}",
            row.iso3,
            row.country,
            MetricKey::AvgSalaryUsd.format(row.avg_salary_usd),
            MetricKey::Inflation.format(row.inflation),
            MetricKey::Unemployment.format(row.unemployment),
            MetricKey::Cpi.format(row.cpi),
            MetricKey::Happiness.format(row.happiness),
            MetricKey::CompositeScore.format(row.composite_score),
        );
    }

    // Example 2: one country across all years
    let iso3 = "DNK";
    info!("Fetching series for {iso3}...");
    let start = Instant::now();
    let series = service.get_series_for_country(iso3).await;
    info!("Received {} rows in {:?}", series.len(), start.elapsed());

    for row in &series {
        println!(
            "{} {}: composite {}",
            row.iso3,
            row.year,
            MetricKey::CompositeScore.format(row.composite_score)
        );
    }
}
