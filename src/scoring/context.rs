//! Context-aware valence scoring
//!
//! Walks the token sequence, looks up each word in the lexicon and adjusts
//! the hit for its neighbours: "no" handling, caps emphasis, then for each
//! of the three preceding tokens an intensifier boost and a negation check,
//! then the "least" rule. The contrastive "but" reweighting and the
//! punctuation amplifier are applied across the whole text afterwards.

use crate::config::ScoringConfig;
use crate::lexicon::Lexicon;
use crate::modifiers::{ModifierResolver, LOOKBACK};
use crate::tokenizer::TokenizedText;
use tracing::trace;

/// Per-text accumulation of adjusted valences
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawValence {
    /// Adjusted contribution of every token, in token order (0 for non-hits)
    pub contributions: Vec<f64>,
    /// Sum of contributions
    pub sum: f64,
    /// Sum of positive contributions, each offset by +1
    pub positive_sum: f64,
    /// Sum of negative contributions, each offset by -1
    pub negative_sum: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    /// Contributions with magnitude below the neutral band (including every non-hit)
    pub neutral_count: usize,
    /// Punctuation emphasis for the whole text
    pub amplifier: f64,
}

impl RawValence {
    /// Bucket contributions by sign around the neutral band
    pub fn collect(contributions: Vec<f64>, amplifier: f64, neutral_band: f64) -> Self {
        let mut raw = RawValence {
            amplifier,
            ..Default::default()
        };

        for &c in &contributions {
            raw.sum += c;
            if c >= neutral_band {
                // +1 compensates for neutral words being counted as 1
                raw.positive_sum += c + 1.0;
                raw.positive_count += 1;
            } else if c <= -neutral_band {
                raw.negative_sum += c - 1.0;
                raw.negative_count += 1;
            } else {
                raw.neutral_count += 1;
            }
        }

        raw.contributions = contributions;
        raw
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }
}

/// Scores a tokenized text against a lexicon
#[derive(Debug, Clone, Copy)]
pub struct ContextScorer<'a> {
    lexicon: &'a Lexicon,
    resolver: &'a ModifierResolver,
    config: &'a ScoringConfig,
}

impl<'a> ContextScorer<'a> {
    pub fn new(lexicon: &'a Lexicon, resolver: &'a ModifierResolver, config: &'a ScoringConfig) -> Self {
        Self {
            lexicon,
            resolver,
            config,
        }
    }

    pub fn score(&self, text: &TokenizedText) -> RawValence {
        let mut contributions = Vec::with_capacity(text.len());

        for (i, token) in text.tokens().iter().enumerate() {
            if self.resolver.is_booster(&token.lower) {
                contributions.push(0.0);
                continue;
            }
            // "kind of" is a dampener, not kindness
            if token.lower == "kind" && text.lower(i + 1) == Some("of") {
                contributions.push(0.0);
                continue;
            }
            contributions.push(self.token_valence(text, i));
        }

        self.resolver.apply_contrastive(text, &mut contributions);
        let amplifier = self.resolver.punctuation_emphasis(text);

        trace!(
            "Scored {} tokens, amplifier {:.3}",
            contributions.len(),
            amplifier
        );
        RawValence::collect(contributions, amplifier, self.config.neutral_band)
    }

    /// Adjusted valence of the token at `i`; 0 when it is not a lexicon word
    /// or `i` is out of range
    pub fn token_valence(&self, text: &TokenizedText, i: usize) -> f64 {
        let tokens = text.tokens();
        let Some(token) = tokens.get(i) else {
            return 0.0;
        };
        let Some(base) = self.lexicon.lookup(&token.lower) else {
            return 0.0;
        };

        let mut valence = self.resolver.no_check(base, base, text, i, self.lexicon);

        if token.is_all_caps() && text.cap_differential() {
            valence += self.resolver.caps_emphasis(valence);
        }

        for distance in 1..=LOOKBACK {
            if i < distance {
                break;
            }
            let prev = &tokens[i - distance];
            // A sentiment word is not a modifier of its neighbour
            if self.lexicon.contains(&prev.lower) {
                continue;
            }

            let boost = self.resolver.scalar_inc_dec(prev, valence, text.cap_differential());
            valence += boost * ModifierResolver::distance_decay(distance);
            valence = self.resolver.negation_check(valence, text, distance, i);
            if distance == LOOKBACK {
                valence = self.resolver.idiom_check(valence, text, i);
            }
        }

        self.resolver.least_check(valence, text, i, self.lexicon)
    }
}
