//! Aggregation of raw valence into the four sentiment scores

use super::RawValence;
use crate::config::ScoringConfig;
use crate::models::SentimentScore;

/// Map an unbounded valence sum into (-1, 1).
///
/// `x / sqrt(x² + alpha)` approaches ±1 as the sum grows, so long texts do
/// not saturate the scale linearly.
pub fn normalize_compound(sum: f64, alpha: f64) -> f64 {
    let norm = sum / (sum * sum + alpha).sqrt();
    if norm.is_nan() {
        return 0.0;
    }
    norm.clamp(-1.0, 1.0)
}

/// Convert raw valence into a [`SentimentScore`]. Never fails.
pub fn normalize(raw: &RawValence, config: &ScoringConfig) -> SentimentScore {
    if raw.is_empty() {
        return SentimentScore::neutral();
    }

    let amp = raw.amplifier;

    // Emphasis strengthens whatever direction the text already has
    let mut sum = raw.sum;
    if sum > 0.0 {
        sum += amp;
    } else if sum < 0.0 {
        sum -= amp;
    }
    let compound = normalize_compound(sum, config.alpha);

    let mut pos_sum = raw.positive_sum;
    let mut neg_sum = raw.negative_sum;
    if pos_sum > neg_sum.abs() {
        pos_sum += amp;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= amp;
    }

    let neutral_count = raw.neutral_count as f64;
    let total = pos_sum + neg_sum.abs() + neutral_count;
    if total <= 0.0 {
        return SentimentScore::neutral();
    }

    SentimentScore {
        positive: (pos_sum / total).abs(),
        negative: (neg_sum / total).abs(),
        neutral: (neutral_count / total).abs(),
        compound,
    }
}
