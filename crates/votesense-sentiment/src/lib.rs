//! Candidate sentiment aggregation engine.
//!
//! Reduces per-comment sentiment records (label + classifier confidence) into
//! one verdict per candidate, normalizes across candidates when the active
//! policy calls for it, and shapes the result for the presentation layer.
//! Everything here is pure and synchronous: callers supply materialized
//! records and a candidate roster, and each run recomputes from scratch.

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod scorer;
pub mod types;

pub use aggregate::{aggregator_for, round3, Aggregator, PolarityCount, WeightedMajority};
pub use classifier::{
    classify_comments, Classification, Classifier, CommentText, LexiconClassifier,
};
pub use error::SentimentError;
pub use normalize::softmax;
pub use pipeline::{aggregate_candidates, run_sentiment, SentimentRun};
pub use report::{
    build_ranking, render_markdown, render_table, Prediction, RankingEntry, SentimentPayload,
    UNKNOWN_CANDIDATE,
};
pub use scorer::lexicon_score;
pub use types::{
    parse_records, Assessment, CandidateVerdict, CommentSentiment, RawCommentSentiment, Sentiment,
};
