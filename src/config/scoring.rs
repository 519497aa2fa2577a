//! Scoring constants
//!
//! Defaults are the VADER rule-set values. They can be overridden from the
//! `[scoring]` table of `valence.toml`.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Tunable constants for the context scorer and normalizer
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Multiplier applied to a negated valence (sign flip with damping)
    pub negation_scalar: f64,
    /// Magnitude added or removed by a booster/dampener word
    pub booster_increment: f64,
    /// Emphasis added by an ALL CAPS word in mixed-case text
    pub caps_increment: f64,
    /// Emphasis added per `!`
    pub exclamation_increment: f64,
    /// Maximum number of `!` that count
    pub exclamation_cap: usize,
    /// Emphasis added per `?` when two or three are present
    pub question_increment: f64,
    /// Beyond this many `?` the flat maximum applies
    pub question_cap: usize,
    /// Flat `?` emphasis for more than `question_cap` marks
    pub question_max: f64,
    /// Normalization constant for the compound score
    pub alpha: f64,
    /// Contributions with magnitude strictly below this count as neutral
    pub neutral_band: f64,
    /// Weight of contributions before a contrastive conjunction
    pub contrastive_before: f64,
    /// Weight of contributions after a contrastive conjunction
    pub contrastive_after: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            negation_scalar: -0.74,
            booster_increment: 0.293,
            caps_increment: 0.733,
            exclamation_increment: 0.292,
            exclamation_cap: 4,
            question_increment: 0.18,
            question_cap: 3,
            question_max: 0.96,
            alpha: 15.0,
            neutral_band: 0.05,
            contrastive_before: 0.5,
            contrastive_after: 1.5,
        }
    }
}

impl ScoringConfig {
    /// Reject values that would break the score invariants
    pub fn validate(&self) -> Result<()> {
        let floats = [
            ("negation_scalar", self.negation_scalar),
            ("booster_increment", self.booster_increment),
            ("caps_increment", self.caps_increment),
            ("exclamation_increment", self.exclamation_increment),
            ("question_increment", self.question_increment),
            ("question_max", self.question_max),
            ("alpha", self.alpha),
            ("neutral_band", self.neutral_band),
            ("contrastive_before", self.contrastive_before),
            ("contrastive_after", self.contrastive_after),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                bail!("scoring.{} must be a finite number, got {}", name, value);
            }
        }

        if self.alpha <= 0.0 {
            bail!("scoring.alpha must be positive, got {}", self.alpha);
        }
        if self.neutral_band < 0.0 {
            bail!("scoring.neutral_band cannot be negative, got {}", self.neutral_band);
        }
        // Emphasis only ever grows magnitude
        for (name, value) in [
            ("booster_increment", self.booster_increment),
            ("caps_increment", self.caps_increment),
            ("exclamation_increment", self.exclamation_increment),
            ("question_increment", self.question_increment),
            ("question_max", self.question_max),
            ("contrastive_before", self.contrastive_before),
            ("contrastive_after", self.contrastive_after),
        ] {
            if value < 0.0 {
                bail!("scoring.{} cannot be negative, got {}", name, value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        ScoringConfig::default().validate().expect("defaults validate");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ScoringConfig = toml::from_str("alpha = 20.0").expect("parse scoring");
        assert_eq!(config.alpha, 20.0);
        assert_eq!(config.negation_scalar, -0.74);
        assert_eq!(config.exclamation_cap, 4);
    }

    #[test]
    fn test_rejects_bad_alpha() {
        let config = ScoringConfig {
            alpha: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_band_and_nan() {
        let config = ScoringConfig {
            neutral_band: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ScoringConfig {
            caps_increment: f64::NAN,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("caps_increment"));
    }
}
