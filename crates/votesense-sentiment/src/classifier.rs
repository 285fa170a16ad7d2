//! Boundary to the per-comment sentiment classifier.
//!
//! The engine consumes classifier output; it never re-classifies stored
//! comments. [`LexiconClassifier`] is a deterministic baseline so the tooling
//! works without a model server.

use serde::Deserialize;
use votesense_core::CandidateId;

use crate::aggregate::round3;
use crate::error::SentimentError;
use crate::scorer::lexicon_score;
use crate::types::{CommentSentiment, Sentiment};

/// A classifier's judgment of one piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: Sentiment,
    pub confidence: f64,
}

pub trait Classifier {
    /// Label `text` as positive or negative with a confidence in `[0, 1]`.
    fn classify(&self, text: &str) -> Classification;
}

/// Lexicon-backed classifier.
///
/// Anything that does not score above zero is labelled negative, mirroring a
/// binary model. Confidence maps `|score|` from `[0, 1]` onto `[0.5, 1.0]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl Classifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Classification {
        let score = lexicon_score(text);
        let label = if score > 0.0 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        };
        Classification {
            label,
            confidence: round3(0.5 + score.abs() / 2.0),
        }
    }
}

/// A newly submitted comment awaiting classification.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentText {
    pub candidate_id: CandidateId,
    pub comment: String,
}

/// Classify each comment exactly once and build its record.
///
/// # Errors
///
/// Returns [`SentimentError::InvalidRecord`] if the classifier reports a
/// confidence outside `[0, 1]`.
pub fn classify_comments(
    classifier: &dyn Classifier,
    comments: &[CommentText],
) -> Result<Vec<CommentSentiment>, SentimentError> {
    comments
        .iter()
        .map(|c| {
            let Classification { label, confidence } = classifier.classify(&c.comment);
            CommentSentiment::new(c.candidate_id, label, confidence)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct CountingClassifier {
        calls: Cell<usize>,
        confidence: f64,
    }

    impl Classifier for CountingClassifier {
        fn classify(&self, _text: &str) -> Classification {
            self.calls.set(self.calls.get() + 1);
            Classification {
                label: Sentiment::Positive,
                confidence: self.confidence,
            }
        }
    }

    fn comment(candidate_id: CandidateId, text: &str) -> CommentText {
        CommentText {
            candidate_id,
            comment: text.to_string(),
        }
    }

    #[test]
    fn lexicon_classifier_labels_positive_text() {
        let out = LexiconClassifier.classify("honest and capable");
        assert_eq!(out.label, Sentiment::Positive);
        assert!((out.confidence - 0.95).abs() < 1e-9, "got {}", out.confidence);
    }

    #[test]
    fn lexicon_classifier_labels_unknown_text_negative_at_half() {
        let out = LexiconClassifier.classify("see you at the town hall");
        assert_eq!(out.label, Sentiment::Negative);
        assert!((out.confidence - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn lexicon_classifier_confidence_stays_in_range() {
        for text in ["", "corrupt liar fraud criminal", "best best best best"] {
            let out = LexiconClassifier.classify(text);
            assert!((0.5..=1.0).contains(&out.confidence), "got {}", out.confidence);
        }
    }

    #[test]
    fn classify_comments_calls_classifier_once_per_comment() {
        let classifier = CountingClassifier {
            calls: Cell::new(0),
            confidence: 0.8,
        };
        let comments = [comment(1, "a"), comment(1, "b"), comment(2, "c")];
        let records = classify_comments(&classifier, &comments).unwrap();
        assert_eq!(classifier.calls.get(), 3);
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].candidate_id(), 2);
    }

    #[test]
    fn classify_comments_rejects_out_of_range_confidence() {
        let classifier = CountingClassifier {
            calls: Cell::new(0),
            confidence: 1.5,
        };
        let err = classify_comments(&classifier, &[comment(4, "x")]).unwrap_err();
        assert!(matches!(
            err,
            SentimentError::InvalidRecord { candidate_id: 4, .. }
        ));
    }
}
