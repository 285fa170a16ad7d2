//! Candidate roster: the id → display-name lookup handed to the formatter.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Identifier of a candidate, as assigned by the persistence layer.
pub type CandidateId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateConfig {
    pub id: CandidateId,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidatesFile {
    pub candidates: Vec<CandidateConfig>,
}

impl CandidatesFile {
    /// Display name for `id`, if the roster lists it.
    #[must_use]
    pub fn name_of(&self, id: CandidateId) -> Option<&str> {
        self.candidates
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Candidate ids in roster order.
    pub fn ids(&self) -> impl Iterator<Item = CandidateId> + '_ {
        self.candidates.iter().map(|c| c.id)
    }
}

/// Load and validate the candidate roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_candidates(path: &Path) -> Result<CandidatesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CandidatesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let candidates_file: CandidatesFile = serde_yaml::from_str(&content)?;

    validate_candidates(&candidates_file)?;

    Ok(candidates_file)
}

fn validate_candidates(candidates_file: &CandidatesFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for candidate in &candidates_file.candidates {
        if candidate.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "candidate {} has an empty name",
                candidate.id
            )));
        }

        if !seen_ids.insert(candidate.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate candidate id: {} ('{}')",
                candidate.id, candidate.name
            )));
        }
    }

    Ok(())
}
