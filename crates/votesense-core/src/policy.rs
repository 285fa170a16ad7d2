//! Deployment-level policy switches for the sentiment engine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which aggregation policy turns comment records into candidate verdicts.
///
/// The two policies produce scores on different scales and must never be
/// mixed in one payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AggregationStrategy {
    /// Confidence-weighted majority; score is the winning label's share of
    /// total confidence.
    #[default]
    #[serde(rename = "weighted")]
    WeightedMajority,
    /// Positive/negative count polarity, softmax-normalized across candidates.
    #[serde(rename = "polarity")]
    PolarityCount,
}

impl std::fmt::Display for AggregationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationStrategy::WeightedMajority => write!(f, "weighted"),
            AggregationStrategy::PolarityCount => write!(f, "polarity"),
        }
    }
}

impl FromStr for AggregationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weighted" => Ok(AggregationStrategy::WeightedMajority),
            "polarity" => Ok(AggregationStrategy::PolarityCount),
            other => Err(format!(
                "unknown strategy '{other}'; expected 'weighted' or 'polarity'"
            )),
        }
    }
}

/// Ordering applied to the ranking before it leaves the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankOrder {
    /// Keep roster order, with unlisted candidates appended as first seen.
    #[default]
    Input,
    /// Highest score first; equal scores fall back to ascending candidate id.
    ScoreDesc,
}

impl std::fmt::Display for RankOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankOrder::Input => write!(f, "input"),
            RankOrder::ScoreDesc => write!(f, "score-desc"),
        }
    }
}

impl FromStr for RankOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input" => Ok(RankOrder::Input),
            "score-desc" | "score_desc" => Ok(RankOrder::ScoreDesc),
            other => Err(format!(
                "unknown rank order '{other}'; expected 'input' or 'score-desc'"
            )),
        }
    }
}
