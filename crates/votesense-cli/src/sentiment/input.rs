//! Input loading for sentiment commands.

use std::path::Path;

use anyhow::Context;
use votesense_core::{load_candidates, AppConfig, CandidatesFile};
use votesense_sentiment::{parse_records, CommentText, RawCommentSentiment};

/// Read a JSON array of comment records.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a records array.
pub(crate) fn read_records(path: &Path) -> anyhow::Result<Vec<RawCommentSentiment>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read comments file {}", path.display()))?;
    parse_records(&content)
        .with_context(|| format!("failed to parse comments file {}", path.display()))
}

/// Read a JSON array of `{candidate_id, comment}` objects.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub(crate) fn read_comment_texts(path: &Path) -> anyhow::Result<Vec<CommentText>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read comment text file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse comment text file {}", path.display()))
}

/// Pick the candidate roster for a run.
///
/// An explicit path must load. The configured default path is optional: when
/// it does not exist the run proceeds with an empty roster and every name
/// renders as the unknown placeholder.
///
/// # Errors
///
/// Returns an error if the chosen roster file exists but is invalid, or if an
/// explicit path is missing.
pub(crate) fn resolve_roster(
    config: &AppConfig,
    explicit: Option<&Path>,
) -> anyhow::Result<CandidatesFile> {
    if let Some(path) = explicit {
        return load_candidates(path)
            .with_context(|| format!("failed to load candidates from {}", path.display()));
    }

    if config.candidates_path.exists() {
        return load_candidates(&config.candidates_path).with_context(|| {
            format!(
                "failed to load candidates from {}",
                config.candidates_path.display()
            )
        });
    }

    tracing::warn!(
        path = %config.candidates_path.display(),
        "candidate roster not found; names will render as unknown"
    );
    Ok(CandidatesFile::default())
}
