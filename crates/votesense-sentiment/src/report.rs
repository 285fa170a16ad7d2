//! Ranking and payload shaping for the presentation layer.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;
use votesense_core::{AggregationStrategy, CandidateId, CandidatesFile, RankOrder};

use crate::pipeline::SentimentRun;
use crate::types::{CandidateVerdict, Sentiment};

/// Display name used when a candidate id is missing from the roster.
pub const UNKNOWN_CANDIDATE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub candidate_id: CandidateId,
    pub name: String,
    pub sentiment: Sentiment,
    pub score: f64,
    pub comment_count: usize,
}

/// Attach display names to verdicts and order them.
///
/// Unresolvable names become [`UNKNOWN_CANDIDATE`]. With
/// [`RankOrder::ScoreDesc`] the sort is stable on descending score, then
/// ascending candidate id.
#[must_use]
pub fn build_ranking(
    verdicts: &[CandidateVerdict],
    roster: &CandidatesFile,
    order: RankOrder,
) -> Vec<RankingEntry> {
    let mut ranking: Vec<RankingEntry> = verdicts
        .iter()
        .map(|v| RankingEntry {
            candidate_id: v.candidate_id,
            name: roster
                .name_of(v.candidate_id)
                .unwrap_or(UNKNOWN_CANDIDATE)
                .to_string(),
            sentiment: v.sentiment,
            score: v.score,
            comment_count: v.comment_count,
        })
        .collect();

    if order == RankOrder::ScoreDesc {
        ranking.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.candidate_id.cmp(&b.candidate_id))
        });
    }

    ranking
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub sentiment: Sentiment,
    pub probability: f64,
}

/// The engine's output boundary.
///
/// The two shapes are not interchangeable: a consumer must read the
/// `strategy` tag before interpreting any score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum SentimentPayload {
    /// Per-candidate verdicts keyed by candidate id.
    Weighted {
        predictions: BTreeMap<CandidateId, Prediction>,
    },
    /// Ordered ranking whose scores form a distribution over candidates.
    Polarity { ranking: Vec<RankingEntry> },
}

impl SentimentPayload {
    #[must_use]
    pub fn from_run(run: &SentimentRun, roster: &CandidatesFile, order: RankOrder) -> Self {
        match run.strategy {
            AggregationStrategy::WeightedMajority => SentimentPayload::Weighted {
                predictions: run
                    .verdicts
                    .iter()
                    .map(|v| {
                        (
                            v.candidate_id,
                            Prediction {
                                sentiment: v.sentiment,
                                probability: v.score,
                            },
                        )
                    })
                    .collect(),
            },
            AggregationStrategy::PolarityCount => SentimentPayload::Polarity {
                ranking: build_ranking(&run.verdicts, roster, order),
            },
        }
    }
}

/// Plain-text table, one candidate per line.
#[must_use]
pub fn render_table(ranking: &[RankingEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6}{:<10}{:<25}{:<11}{:<8}COMMENTS",
        "RANK", "ID", "NAME", "SENTIMENT", "SCORE"
    );
    for (position, entry) in ranking.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<6}{:<10}{:<25}{:<11}{:<8.3}{}",
            position + 1,
            entry.candidate_id,
            entry.name,
            entry.sentiment,
            entry.score,
            entry.comment_count
        );
    }
    out
}

/// Markdown report with a header block and a ranking table.
#[must_use]
pub fn render_markdown(
    ranking: &[RankingEntry],
    strategy: AggregationStrategy,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Candidate Sentiment Report");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "**Generated**: {}",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(out, "**Strategy**: {strategy}");
    let _ = writeln!(out, "**Candidates**: {}", ranking.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Rank | Candidate | Sentiment | Score | Comments |");
    let _ = writeln!(out, "|------|-----------|-----------|-------|----------|");
    for (position, entry) in ranking.iter().enumerate() {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {:.3} | {} |",
            position + 1,
            entry.name,
            entry.sentiment,
            entry.score,
            entry.comment_count
        );
    }
    out
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
