use protparam::engine::config::AnalysisConfig;
use std::time::Duration;

/// Fully resolved settings for one CLI invocation.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub min_length: usize,
    pub fetch_timeout: Duration,
}
