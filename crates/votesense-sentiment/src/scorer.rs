//! Word-weight lexicon for campaign comments.

/// Campaign-comment word weights.
///
/// Keys are lowercase single words (apostrophes kept). Values in `(0.0, 1.0]`
/// are positive, in `[-1.0, 0.0)` are negative. The final score is clamped
/// to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("support", 0.4),
    ("supporting", 0.4),
    ("trust", 0.4),
    ("honest", 0.5),
    ("great", 0.4),
    ("good", 0.3),
    ("best", 0.5),
    ("like", 0.3),
    ("love", 0.5),
    ("agree", 0.3),
    ("hope", 0.3),
    ("progress", 0.4),
    ("strong", 0.3),
    ("capable", 0.4),
    ("deliver", 0.3),
    ("fair", 0.3),
    ("transparent", 0.4),
    ("inspiring", 0.5),
    ("deserves", 0.4),
    ("win", 0.4),
    // Negative signals
    ("corrupt", -0.7),
    ("liar", -0.7),
    ("lies", -0.6),
    ("fraud", -0.7),
    ("scam", -0.6),
    ("criminal", -0.7),
    ("scandal", -0.5),
    ("dishonest", -0.6),
    ("incompetent", -0.6),
    ("bad", -0.4),
    ("worst", -0.6),
    ("terrible", -0.6),
    ("weak", -0.3),
    ("failed", -0.4),
    ("hate", -0.6),
    ("dislike", -0.5),
    ("against", -0.3),
    ("not", -0.4),
    ("don't", -0.5),
    ("dont", -0.5),
];

/// Score a text string using the campaign lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f64 {
    let mut score = 0.0_f64;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if let Some(&(_, weight)) = LEXICON.iter().find(|&&(lex_word, _)| lex_word == w) {
            score += weight;
        }
    }
    score.clamp(-1.0, 1.0)
}
