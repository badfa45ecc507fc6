//! Configuration for the metrics service.

use std::path::PathBuf;

/// Configuration for [`crate::service::MetricsService`]
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory holding the three raw dataset documents
    pub data_dir: PathBuf,
    /// Simulated request latency range in milliseconds (min, max).
    /// Set to `(0, 0)` to disable the delay (tests do).
    pub latency_ms: (u64, u64),
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            latency_ms: (150, 400),
        }
    }
}
