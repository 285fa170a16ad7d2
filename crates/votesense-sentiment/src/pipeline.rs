//! One aggregation run, from raw records to finalized verdicts.

use std::collections::HashMap;

use votesense_core::{AggregationStrategy, CandidateId, CandidatesFile};

use crate::aggregate::Aggregator;
use crate::error::SentimentError;
use crate::types::{Assessment, CandidateVerdict, CommentSentiment, RawCommentSentiment};

/// Output of [`run_sentiment`].
#[derive(Debug)]
pub struct SentimentRun {
    pub strategy: AggregationStrategy,
    /// One verdict per candidate: roster order first, then candidates that
    /// only appear in the records, in first-seen order.
    pub verdicts: Vec<CandidateVerdict>,
    /// Records dropped during validation.
    pub rejected: Vec<SentimentError>,
}

/// Run the full aggregation for every candidate.
///
/// 1. Validate each raw record; invalid records are logged and collected in
///    [`SentimentRun::rejected`].
/// 2. Group the remaining records by candidate.
/// 3. Aggregate each candidate independently (see [`aggregate_candidates`]).
/// 4. Apply the strategy's cross-candidate pass.
///
/// The run holds no state between calls; the same input always produces the
/// same verdicts.
#[must_use]
pub fn run_sentiment(
    aggregator: &dyn Aggregator,
    roster: &CandidatesFile,
    records: &[RawCommentSentiment],
) -> SentimentRun {
    let mut valid = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for raw in records {
        match CommentSentiment::try_from(raw.clone()) {
            Ok(record) => valid.push(record),
            Err(e) => {
                tracing::warn!(
                    candidate = raw.candidate_id,
                    error = %e,
                    "rejecting comment record"
                );
                rejected.push(e);
            }
        }
    }

    let verdicts = aggregate_candidates(aggregator, roster.ids(), &valid);

    tracing::info!(
        strategy = %aggregator.strategy(),
        candidates = verdicts.len(),
        comments = valid.len(),
        rejected = rejected.len(),
        "sentiment aggregation complete"
    );

    SentimentRun {
        strategy: aggregator.strategy(),
        verdicts,
        rejected,
    }
}

/// Aggregate already-validated records into finalized verdicts.
///
/// Every id in `candidates` gets a verdict even without comments. A failure
/// while aggregating one candidate is logged and replaced by a neutral
/// zero-score verdict for that candidate alone.
#[must_use]
pub fn aggregate_candidates(
    aggregator: &dyn Aggregator,
    candidates: impl IntoIterator<Item = CandidateId>,
    records: &[CommentSentiment],
) -> Vec<CandidateVerdict> {
    let groups = group_by_candidate(candidates, records);

    let mut verdicts: Vec<CandidateVerdict> = groups
        .into_iter()
        .map(|(candidate_id, group)| {
            let assessment = if group.is_empty() {
                aggregator.empty_verdict()
            } else {
                aggregator.aggregate(&group).unwrap_or_else(|e| {
                    tracing::warn!(
                        candidate = candidate_id,
                        error = %e,
                        "aggregation failed; using neutral verdict"
                    );
                    Assessment::neutral(0.0)
                })
            };

            CandidateVerdict {
                candidate_id,
                sentiment: assessment.sentiment,
                score: assessment.score,
                comment_count: group.len(),
                raw_score: None,
            }
        })
        .collect();

    aggregator.finalize(&mut verdicts);
    verdicts
}

fn group_by_candidate(
    candidates: impl IntoIterator<Item = CandidateId>,
    records: &[CommentSentiment],
) -> Vec<(CandidateId, Vec<CommentSentiment>)> {
    let mut groups: Vec<(CandidateId, Vec<CommentSentiment>)> = Vec::new();
    let mut index: HashMap<CandidateId, usize> = HashMap::new();

    let ids = candidates
        .into_iter()
        .chain(records.iter().map(CommentSentiment::candidate_id));
    for id in ids {
        index.entry(id).or_insert_with(|| {
            groups.push((id, Vec::new()));
            groups.len() - 1
        });
    }

    for record in records {
        groups[index[&record.candidate_id()]].1.push(*record);
    }

    groups
}
