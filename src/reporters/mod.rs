//! Output reporters for Valence results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON (`{message, sentiment}`)
//! - `jsonl` - One JSON object per line, for batch output

mod json;
mod text;

use crate::analyzer::Explanation;
use crate::models::{BatchSummary, ScoredText};
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Jsonl,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, jsonl",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Render one scored text. `compound_only` reports just the compound value.
pub fn render_scored(item: &ScoredText, format: OutputFormat, compound_only: bool) -> Result<String> {
    match (format, compound_only) {
        (OutputFormat::Text, false) => Ok(text::render_scored(item)),
        (OutputFormat::Text, true) => Ok(text::render_compound(item)),
        (OutputFormat::Json, false) => json::render_scored(item),
        (OutputFormat::Json, true) => json::render_compound(item),
        (OutputFormat::Jsonl, false) => json::render_scored_compact(item),
        (OutputFormat::Jsonl, true) => json::render_compound_compact(item),
    }
}

/// Render a batch of scored texts with its summary
pub fn render_batch(items: &[ScoredText], summary: &BatchSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_batch(items, summary)),
        OutputFormat::Json => json::render_batch(items, summary),
        OutputFormat::Jsonl => json::render_lines(items),
    }
}

/// Render a per-token explanation
pub fn render_explanation(message: &str, explanation: &Explanation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render_explanation(message, explanation)),
        OutputFormat::Json | OutputFormat::Jsonl => json::render_explanation(message, explanation),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::SentimentScore;

    /// A scored text for reporter tests
    pub(crate) fn test_item() -> ScoredText {
        ScoredText {
            message: "I love this!".into(),
            sentiment: SentimentScore {
                positive: 0.692,
                negative: 0.0,
                neutral: 0.308,
                compound: 0.6696,
            },
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("ndjson").unwrap(), OutputFormat::Jsonl);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Jsonl] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_compound_only_text() {
        let out = render_scored(&test_item(), OutputFormat::Text, true).expect("render");
        assert_eq!(out.trim(), "0.6696");
    }
}
