use std::str::FromStr;

use serde::{Deserialize, Serialize};
use votesense_core::CandidateId;

use crate::error::SentimentError;

/// Sentiment label for a comment or a candidate verdict.
///
/// Variant order is lexicographic on the label name; the weighted-majority
/// tie-break relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(format!("unknown sentiment label '{other}'")),
        }
    }
}

/// One classifier judgment attached to one comment.
///
/// Constructed only through [`CommentSentiment::new`] or `TryFrom`, so the
/// confidence is always a finite number in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommentSentiment {
    candidate_id: CandidateId,
    label: Sentiment,
    confidence: f64,
}

impl CommentSentiment {
    /// # Errors
    ///
    /// Returns [`SentimentError::InvalidRecord`] if `confidence` is not a
    /// finite number in `[0, 1]`.
    pub fn new(
        candidate_id: CandidateId,
        label: Sentiment,
        confidence: f64,
    ) -> Result<Self, SentimentError> {
        if !confidence.is_finite() {
            return Err(SentimentError::InvalidRecord {
                candidate_id,
                reason: format!("confidence {confidence} is not finite"),
            });
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(SentimentError::InvalidRecord {
                candidate_id,
                reason: format!("confidence {confidence} is outside [0, 1]"),
            });
        }
        Ok(Self {
            candidate_id,
            label,
            confidence,
        })
    }

    #[must_use]
    pub fn candidate_id(&self) -> CandidateId {
        self.candidate_id
    }

    #[must_use]
    pub fn label(&self) -> Sentiment {
        self.label
    }

    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// Wire shape of a comment record as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCommentSentiment {
    pub candidate_id: CandidateId,
    pub sentiment: String,
    #[serde(default)]
    pub sentiment_probability: Option<f64>,
}

impl TryFrom<RawCommentSentiment> for CommentSentiment {
    type Error = SentimentError;

    fn try_from(raw: RawCommentSentiment) -> Result<Self, Self::Error> {
        let label = raw
            .sentiment
            .parse::<Sentiment>()
            .map_err(|reason| SentimentError::InvalidRecord {
                candidate_id: raw.candidate_id,
                reason,
            })?;
        let confidence = raw
            .sentiment_probability
            .ok_or_else(|| SentimentError::InvalidRecord {
                candidate_id: raw.candidate_id,
                reason: "missing confidence".to_string(),
            })?;
        CommentSentiment::new(raw.candidate_id, label, confidence)
    }
}

impl From<CommentSentiment> for RawCommentSentiment {
    fn from(record: CommentSentiment) -> Self {
        Self {
            candidate_id: record.candidate_id,
            sentiment: record.label.to_string(),
            sentiment_probability: Some(record.confidence),
        }
    }
}

/// Parse a JSON array of raw comment records.
///
/// Only the JSON shape is checked here; per-record validation happens in the
/// pipeline so one bad record cannot sink the rest.
///
/// # Errors
///
/// Returns [`SentimentError::Json`] if the input is not an array of records.
pub fn parse_records(json: &str) -> Result<Vec<RawCommentSentiment>, SentimentError> {
    Ok(serde_json::from_str(json)?)
}

/// An aggregator's conclusion for one candidate, before it is bound to an id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub sentiment: Sentiment,
    pub score: f64,
}

impl Assessment {
    #[must_use]
    pub const fn neutral(score: f64) -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            score,
        }
    }
}

/// Aggregated sentiment for one candidate in one run.
///
/// `score` is on the scale of whichever strategy produced it; scores from
/// different strategies are not comparable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateVerdict {
    pub candidate_id: CandidateId,
    pub sentiment: Sentiment,
    pub score: f64,
    /// Valid records that fed this verdict.
    pub comment_count: usize,
    /// Polarity score in `[-1, 1]` before softmax. Polarity strategy only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_score: Option<f64>,
}
