//! Cross-candidate normalization.

/// Softmax over `scores`: `e^s / Σ e^s` for each entry, in input order.
///
/// The maximum is subtracted before exponentiating; the result is identical
/// but cannot overflow. The denominator is always positive, so no guard is
/// needed. Returns an empty vector for empty input.
#[must_use]
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let Some(max) = scores.iter().copied().reduce(f64::max) else {
        return Vec::new();
    };

    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let z: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / z).collect()
}
