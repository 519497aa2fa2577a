//! Valence - rule-based lexicon sentiment scoring
//!
//! Scores free text with a dictionary of human-rated word valences and a
//! fixed set of grammatical rules (negation, intensifiers, contrastive
//! "but", punctuation and capitalisation emphasis), in the style of VADER.
//! No model inference is involved: the same text always gets the same score.
//!
//! # Pipeline
//!
//! ```text
//! text ─► tokenizer ─► ContextScorer ─► normalize ─► SentimentScore
//!                        │        │
//!                     Lexicon  ModifierResolver
//! ```
//!
//! # Example
//!
//! ```rust
//! use valence::{Lexicon, SentimentAnalyzer};
//!
//! let lexicon = Lexicon::embedded().expect("embedded lexicon loads");
//! let analyzer = SentimentAnalyzer::new(lexicon);
//!
//! let score = analyzer.analyze("The food was good, but the service was GREAT!");
//! assert!(score.compound > 0.5);
//! ```

pub mod analyzer;
pub mod config;
pub mod lexicon;
pub mod models;
pub mod modifiers;
pub mod reporters;
pub mod scoring;
pub mod tokenizer;

pub use analyzer::{Explanation, SentimentAnalyzer, TokenExplanation};
pub use config::ScoringConfig;
pub use lexicon::{Lexicon, LoadError};
pub use models::{BatchSummary, Polarity, ScoredText, SentimentScore};
pub use modifiers::{ModifierFlag, ModifierResolver};
pub use scoring::{normalize, ContextScorer, RawValence};
pub use tokenizer::{tokenize, Token, TokenizedText};
