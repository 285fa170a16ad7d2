use std::path::PathBuf;

use crate::policy::{AggregationStrategy, RankOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide settings for one deployment.
///
/// `strategy` is fixed for the lifetime of the process so that verdicts from
/// different aggregation policies never end up in the same payload.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub strategy: AggregationStrategy,
    pub rank_order: RankOrder,
    pub candidates_path: PathBuf,
}
