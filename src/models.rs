//! Core data models for Valence
//!
//! These are the values the engine hands to its callers: the four-number
//! score, its polarity label, and the shapes the front end reports.

use serde::{Deserialize, Serialize};

/// Compound at or beyond ±this is labelled positive/negative
pub const POLARITY_THRESHOLD: f64 = 0.05;

/// Sentiment of one text.
///
/// `positive + negative + neutral` is 1.0 (within floating tolerance);
/// `compound` is the normalized summary in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

impl SentimentScore {
    /// Score of a text with nothing sentiment-bearing in it
    pub const fn neutral() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            compound: 0.0,
        }
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::from_compound(self.compound)
    }

    /// Display rounding: proportions to 3 decimals, compound to 4
    pub fn rounded(&self) -> Self {
        Self {
            positive: round_to(self.positive, 3),
            negative: round_to(self.negative, 3),
            neutral: round_to(self.neutral, 3),
            compound: round_to(self.compound, 4),
        }
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::neutral()
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Sentiment label derived from the compound score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POLARITY_THRESHOLD {
            Polarity::Positive
        } else if compound <= -POLARITY_THRESHOLD {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
        }
    }
}

/// A text together with its score (the `{message, sentiment}` response shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredText {
    pub message: String,
    pub sentiment: SentimentScore,
}

/// Aggregate over a batch of scored texts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub mean_compound: f64,
}

impl BatchSummary {
    pub fn from_scores<'a>(scores: impl IntoIterator<Item = &'a SentimentScore>) -> Self {
        let mut summary = BatchSummary::default();
        let mut compound_sum = 0.0;

        for score in scores {
            summary.total += 1;
            compound_sum += score.compound;
            match score.polarity() {
                Polarity::Positive => summary.positive += 1,
                Polarity::Negative => summary.negative += 1,
                Polarity::Neutral => summary.neutral += 1,
            }
        }

        if summary.total > 0 {
            summary.mean_compound = compound_sum / summary.total as f64;
        }
        summary
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} texts: {} positive, {} negative, {} neutral (mean compound {:.4})",
            self.total, self.positive, self.negative, self.neutral, self.mean_compound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_thresholds() {
        assert_eq!(Polarity::from_compound(0.05), Polarity::Positive);
        assert_eq!(Polarity::from_compound(0.049), Polarity::Neutral);
        assert_eq!(Polarity::from_compound(-0.05), Polarity::Negative);
        assert_eq!(Polarity::from_compound(0.0), Polarity::Neutral);
    }

    #[test]
    fn test_rounding() {
        let score = SentimentScore {
            positive: 0.123456,
            negative: 0.0,
            neutral: 0.876544,
            compound: 0.44043,
        };
        let rounded = score.rounded();
        assert_eq!(rounded.positive, 0.123);
        assert_eq!(rounded.neutral, 0.877);
        assert_eq!(rounded.compound, 0.4404);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(SentimentScore::neutral()).expect("serialize");
        assert_eq!(json["positive"], 0.0);
        assert_eq!(json["negative"], 0.0);
        assert_eq!(json["neutral"], 1.0);
        assert_eq!(json["compound"], 0.0);
    }

    #[test]
    fn test_batch_summary() {
        let scores = [
            SentimentScore { compound: 0.6, ..SentimentScore::neutral() },
            SentimentScore { compound: -0.4, ..SentimentScore::neutral() },
            SentimentScore::neutral(),
        ];
        let summary = BatchSummary::from_scores(&scores);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.positive, 1);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.neutral, 1);
        assert!((summary.mean_compound - 0.2 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_batch_summary() {
        let summary = BatchSummary::from_scores(&Vec::<SentimentScore>::new());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.mean_compound, 0.0);
    }
}
