//! Per-candidate aggregation strategies.
//!
//! Both policies sit behind [`Aggregator`] so the pipeline and the formatter
//! never branch on which one is active. A deployment picks exactly one via
//! [`AggregationStrategy`].

use std::collections::BTreeMap;

use votesense_core::AggregationStrategy;

use crate::error::SentimentError;
use crate::normalize::softmax;
use crate::types::{Assessment, CandidateVerdict, CommentSentiment, Sentiment};

/// Round to three decimal places, the precision every reported score uses.
#[must_use]
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Reduces one candidate's comment records into a single [`Assessment`].
pub trait Aggregator: Send + Sync {
    fn strategy(&self) -> AggregationStrategy;

    /// Verdict for a candidate with no comments.
    fn empty_verdict(&self) -> Assessment;

    /// Aggregate the records of a single candidate.
    ///
    /// # Errors
    ///
    /// Strategy-specific; see the implementors.
    fn aggregate(&self, records: &[CommentSentiment]) -> Result<Assessment, SentimentError>;

    /// Cross-candidate pass run once after every candidate has a verdict.
    fn finalize(&self, _verdicts: &mut [CandidateVerdict]) {}
}

/// Build the aggregator for the configured strategy.
#[must_use]
pub fn aggregator_for(strategy: AggregationStrategy) -> Box<dyn Aggregator> {
    match strategy {
        AggregationStrategy::WeightedMajority => Box::new(WeightedMajority),
        AggregationStrategy::PolarityCount => Box::new(PolarityCount),
    }
}

/// Confidence-weighted majority vote.
///
/// Each record contributes `confidence / total_confidence` to its label; the
/// label with the most mass wins and its mass is the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMajority;

impl WeightedMajority {
    const EMPTY_SCORE: f64 = 0.5;
    /// Weights closer than this are equal; summing `confidence / total`
    /// per record leaves ulp-level noise on ties.
    const TIE_EPSILON: f64 = 1e-9;

    /// Normalized confidence mass per label.
    ///
    /// Returns `None` when total confidence is zero (including empty input).
    #[must_use]
    pub fn label_weights(records: &[CommentSentiment]) -> Option<BTreeMap<Sentiment, f64>> {
        let total: f64 = records.iter().map(CommentSentiment::confidence).sum();
        if total <= 0.0 {
            return None;
        }

        let mut weights = BTreeMap::new();
        for record in records {
            *weights.entry(record.label()).or_insert(0.0) += record.confidence() / total;
        }
        Some(weights)
    }
}

impl Aggregator for WeightedMajority {
    fn strategy(&self) -> AggregationStrategy {
        AggregationStrategy::WeightedMajority
    }

    fn empty_verdict(&self) -> Assessment {
        Assessment::neutral(Self::EMPTY_SCORE)
    }

    /// # Errors
    ///
    /// Returns [`SentimentError::DivisionUndefined`] when every record carries
    /// zero confidence.
    fn aggregate(&self, records: &[CommentSentiment]) -> Result<Assessment, SentimentError> {
        let Some(first) = records.first() else {
            return Ok(self.empty_verdict());
        };

        let weights = Self::label_weights(records).ok_or(SentimentError::DivisionUndefined {
            candidate_id: first.candidate_id(),
        })?;

        // BTreeMap iterates labels in lexicographic order and only a weight
        // beyond the tie tolerance replaces the leader, so ties go to the
        // earlier label.
        let (sentiment, weight) = weights.into_iter().fold(
            (Sentiment::Neutral, f64::NEG_INFINITY),
            |best, (label, weight)| {
                if weight > best.1 + Self::TIE_EPSILON {
                    (label, weight)
                } else {
                    best
                }
            },
        );

        Ok(Assessment {
            sentiment,
            score: round3(weight),
        })
    }
}

/// Positive-minus-negative count polarity, softmax-normalized across
/// candidates in [`Aggregator::finalize`].
///
/// Before finalization the assessment score is the raw polarity in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarityCount;

impl PolarityCount {
    /// `(positive - negative) / (positive + negative)`; neutral records are
    /// ignored and an all-neutral or empty set scores `0.0`.
    #[must_use]
    pub fn raw_score(records: &[CommentSentiment]) -> f64 {
        let positive = records
            .iter()
            .filter(|r| r.label() == Sentiment::Positive)
            .count();
        let negative = records
            .iter()
            .filter(|r| r.label() == Sentiment::Negative)
            .count();

        if positive + negative == 0 {
            return 0.0;
        }

        #[allow(clippy::cast_precision_loss)]
        let (positive, negative) = (positive as f64, negative as f64);
        (positive - negative) / (positive + negative)
    }
}

impl Aggregator for PolarityCount {
    fn strategy(&self) -> AggregationStrategy {
        AggregationStrategy::PolarityCount
    }

    fn empty_verdict(&self) -> Assessment {
        Assessment::neutral(0.0)
    }

    /// Never fails.
    fn aggregate(&self, records: &[CommentSentiment]) -> Result<Assessment, SentimentError> {
        let score = Self::raw_score(records);
        let sentiment = if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };
        Ok(Assessment { sentiment, score })
    }

    /// Replace each commented candidate's raw score with its softmax share.
    ///
    /// Candidates without comments keep their default score and take no part
    /// in the normalization.
    fn finalize(&self, verdicts: &mut [CandidateVerdict]) {
        let included: Vec<usize> = verdicts
            .iter()
            .enumerate()
            .filter(|(_, v)| v.comment_count > 0)
            .map(|(idx, _)| idx)
            .collect();

        let raw: Vec<f64> = included.iter().map(|&idx| verdicts[idx].score).collect();
        let normalized = softmax(&raw);

        for (&idx, probability) in included.iter().zip(normalized) {
            let verdict = &mut verdicts[idx];
            verdict.raw_score = Some(verdict.score);
            verdict.score = round3(probability);
        }
    }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
