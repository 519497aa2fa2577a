//! Sentiment analyzer entry point
//!
//! Owns the lexicon and the scoring constants. Scoring borrows both
//! immutably, so one analyzer can serve any number of threads without
//! locking: share it by reference or wrap it in an `Arc`.

use crate::config::ScoringConfig;
use crate::lexicon::{Lexicon, LoadError};
use crate::models::SentimentScore;
use crate::modifiers::{ModifierFlag, ModifierResolver};
use crate::scoring::{normalize, ContextScorer};
use crate::tokenizer::tokenize;
use rayon::prelude::*;
use serde::Serialize;
use tracing::trace;

/// Rule-based sentiment analyzer
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Lexicon,
    resolver: ModifierResolver,
    config: ScoringConfig,
}

impl SentimentAnalyzer {
    /// Analyzer with the default (VADER) constants
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(lexicon, ScoringConfig::default())
    }

    pub fn with_config(lexicon: Lexicon, config: ScoringConfig) -> Self {
        Self {
            lexicon,
            resolver: ModifierResolver::new(config),
            config,
        }
    }

    /// Analyzer over the embedded English word list
    pub fn embedded() -> Result<Self, LoadError> {
        Ok(Self::new(Lexicon::embedded()?))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn resolver(&self) -> &ModifierResolver {
        &self.resolver
    }

    /// Score one text. Total: any input, including empty, yields a score.
    pub fn analyze(&self, text: &str) -> SentimentScore {
        let tokens = tokenize(text);
        let raw = self.scorer().score(&tokens);
        let score = normalize(&raw, &self.config);
        trace!("compound {:.4} for {} tokens", score.compound, tokens.len());
        score
    }

    /// Compound score alone
    pub fn analyze_compound(&self, text: &str) -> f64 {
        self.analyze(text).compound
    }

    /// Score many texts in parallel; results keep input order.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<SentimentScore>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.analyze(t.as_ref())).collect()
    }

    /// Per-token breakdown of how a score was reached
    pub fn explain(&self, text: &str) -> Explanation {
        let tokens = tokenize(text);
        let raw = self.scorer().score(&tokens);
        let score = normalize(&raw, &self.config);

        let tokens = tokens
            .tokens()
            .iter()
            .zip(&raw.contributions)
            .map(|(token, &contribution)| TokenExplanation {
                token: token.surface.clone(),
                base: self.lexicon.lookup(&token.lower),
                modifier: self.resolver.classify(&token.lower),
                contribution,
            })
            .collect();

        Explanation {
            tokens,
            sum: raw.sum,
            amplifier: raw.amplifier,
            score,
        }
    }

    fn scorer(&self) -> ContextScorer<'_> {
        ContextScorer::new(&self.lexicon, &self.resolver, &self.config)
    }
}

/// How one token contributed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenExplanation {
    pub token: String,
    /// Lexicon valence, if the token is a lexicon word
    pub base: Option<f64>,
    #[serde(serialize_with = "serialize_flag")]
    pub modifier: ModifierFlag,
    /// Adjusted valence after all context rules
    pub contribution: f64,
}

fn serialize_flag<S: serde::Serializer>(flag: &ModifierFlag, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&flag.to_string())
}

/// Score plus the per-token trail that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub tokens: Vec<TokenExplanation>,
    pub sum: f64,
    pub amplifier: f64,
    pub score: SentimentScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::embedded().expect("embedded lexicon loads")
    }

    #[test]
    fn test_positive_and_negative() {
        let a = analyzer();
        assert!(a.analyze("This is good").compound > 0.0);
        assert!(a.analyze("This is not good").compound < 0.0);
        assert!(a.analyze("What a horrible day").compound < 0.0);
    }

    #[test]
    fn test_empty_is_neutral_default() {
        let a = analyzer();
        assert_eq!(a.analyze(""), SentimentScore::neutral());
        assert_eq!(a.analyze("  \n\t "), SentimentScore::neutral());
    }

    #[test]
    fn test_compound_matches_full_score() {
        let a = analyzer();
        let text = "The plot was dull but the acting was brilliant";
        assert_eq!(a.analyze_compound(text), a.analyze(text).compound);
    }

    #[test]
    fn test_batch_keeps_order() {
        let a = analyzer();
        let texts = ["I love it", "I hate it", "It is a chair"];
        let scores = a.analyze_batch(&texts);
        assert_eq!(scores.len(), 3);
        for (text, score) in texts.iter().zip(&scores) {
            assert_eq!(*score, a.analyze(text));
        }
    }

    #[test]
    fn test_custom_config_changes_result() {
        let lexicon = Lexicon::embedded().expect("lexicon");
        let loud = SentimentAnalyzer::with_config(
            lexicon.clone(),
            ScoringConfig {
                exclamation_increment: 1.0,
                ..Default::default()
            },
        );
        let plain = SentimentAnalyzer::new(lexicon);
        assert!(loud.analyze_compound("good!") > plain.analyze_compound("good!"));
    }

    #[test]
    fn test_explain() {
        let a = analyzer();
        let explanation = a.explain("not very good!");
        assert_eq!(explanation.tokens.len(), 3);
        assert_eq!(explanation.tokens[0].modifier, ModifierFlag::Negation);
        assert!(matches!(explanation.tokens[1].modifier, ModifierFlag::Intensifier(_)));
        assert_eq!(explanation.tokens[2].base, Some(1.9));
        assert!(explanation.tokens[2].contribution < 0.0);
        assert_eq!(explanation.score, a.analyze("not very good!"));

        let json = serde_json::to_value(&explanation).expect("serialize");
        assert_eq!(json["tokens"][0]["modifier"], "negation");
    }
}
