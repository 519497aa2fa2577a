//! Sentiment scoring
//!
//! Two stages turn tokens into scores:
//!
//! ```text
//! TokenizedText ─► ContextScorer::score ─► RawValence ─► normalize ─► SentimentScore
//! ```
//!
//! # Scoring Formula
//!
//! ```text
//! compound = s / sqrt(s² + α)            s = Σ contributions ± amplifier, α = 15
//!
//! positive = P / (P + |N| + n)           P = Σ (c + 1) over c >  band
//! negative = |N| / (P + |N| + n)         N = Σ (c - 1) over c < -band
//! neutral  = n / (P + |N| + n)           n = count of |c| <= band
//! ```
//!
//! The amplifier (punctuation emphasis) is added to the dominant of P and |N|.

mod context;
mod normalize;

pub use context::{ContextScorer, RawValence};
pub use normalize::{normalize, normalize_compound};
