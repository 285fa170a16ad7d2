use thiserror::Error;
use votesense_core::CandidateId;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("invalid record for candidate {candidate_id}: {reason}")]
    InvalidRecord {
        candidate_id: CandidateId,
        reason: String,
    },

    #[error("all comments for candidate {candidate_id} carry zero confidence")]
    DivisionUndefined { candidate_id: CandidateId },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
