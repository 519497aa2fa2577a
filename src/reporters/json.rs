//! JSON reporter
//!
//! Mirrors the HTTP response shapes: `{"message", "sentiment"}` where
//! sentiment is either the four scores or the compound value alone.

use crate::analyzer::Explanation;
use crate::models::{BatchSummary, ScoredText};
use anyhow::Result;
use serde_json::json;

pub fn render_scored(item: &ScoredText) -> Result<String> {
    Ok(serde_json::to_string_pretty(&rounded(item))?)
}

pub fn render_scored_compact(item: &ScoredText) -> Result<String> {
    Ok(serde_json::to_string(&rounded(item))?)
}

pub fn render_compound(item: &ScoredText) -> Result<String> {
    Ok(serde_json::to_string_pretty(&compound_value(item))?)
}

pub fn render_compound_compact(item: &ScoredText) -> Result<String> {
    Ok(serde_json::to_string(&compound_value(item))?)
}

pub fn render_batch(items: &[ScoredText], summary: &BatchSummary) -> Result<String> {
    let results: Vec<ScoredText> = items.iter().map(rounded).collect();
    Ok(serde_json::to_string_pretty(&json!({
        "results": results,
        "summary": summary,
    }))?)
}

/// One compact object per line
pub fn render_lines(items: &[ScoredText]) -> Result<String> {
    let mut out = String::new();
    for item in items {
        out.push_str(&render_scored_compact(item)?);
        out.push('\n');
    }
    Ok(out)
}

pub fn render_explanation(message: &str, explanation: &Explanation) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json!({
        "message": message,
        "tokens": explanation.tokens,
        "sum": explanation.sum,
        "amplifier": explanation.amplifier,
        "sentiment": explanation.score.rounded(),
    }))?)
}

fn rounded(item: &ScoredText) -> ScoredText {
    ScoredText {
        message: item.message.clone(),
        sentiment: item.sentiment.rounded(),
    }
}

fn compound_value(item: &ScoredText) -> serde_json::Value {
    json!({
        "message": item.message,
        "sentiment": item.sentiment.rounded().compound,
    })
}
