//! Shared configuration and policy types for votesense.

pub mod app_config;
pub mod candidates;
pub mod config;
pub mod policy;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use candidates::{load_candidates, CandidateConfig, CandidateId, CandidatesFile};
pub use config::{load_app_config, load_app_config_from_env};
pub use policy::{AggregationStrategy, RankOrder};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read candidates file {path}: {source}")]
    CandidatesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse candidates file: {0}")]
    CandidatesFileParse(#[from] serde_yaml::Error),

    #[error("candidates validation failed: {0}")]
    Validation(String),
}
