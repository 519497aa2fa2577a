//! Text (terminal) reporter with colors and formatting

use crate::analyzer::Explanation;
use crate::models::{BatchSummary, Polarity, ScoredText};
use console::style;

/// Polarity label, colored
fn polarity_label(polarity: Polarity) -> String {
    match polarity {
        Polarity::Positive => style("positive").green().bold().to_string(),
        Polarity::Negative => style("negative").red().bold().to_string(),
        Polarity::Neutral => style("neutral").dim().to_string(),
    }
}

pub fn render_scored(item: &ScoredText) -> String {
    let s = item.sentiment.rounded();
    let mut out = String::new();
    out.push_str(&format!("{}\n", style(&item.message).italic()));
    out.push_str(&format!(
        "  compound {:>7.4}  ({})\n",
        s.compound,
        polarity_label(item.sentiment.polarity())
    ));
    out.push_str(&format!(
        "  positive {:>7.3}  negative {:>7.3}  neutral {:>7.3}\n",
        s.positive, s.negative, s.neutral
    ));
    out
}

pub fn render_compound(item: &ScoredText) -> String {
    format!("{:.4}\n", item.sentiment.rounded().compound)
}

pub fn render_batch(items: &[ScoredText], summary: &BatchSummary) -> String {
    let mut out = String::new();
    for item in items {
        let s = item.sentiment.rounded();
        out.push_str(&format!(
            "{:>7.4}  {:<8}  {}\n",
            s.compound,
            item.sentiment.polarity().to_string(),
            truncate(&item.message, 70)
        ));
    }
    out.push_str(&format!("\n{}\n", style(summary).bold()));
    out
}

pub fn render_explanation(message: &str, explanation: &Explanation) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", style(message).italic()));
    out.push_str(&format!(
        "  {:<20} {:>7} {:<18} {:>9}\n",
        "token", "base", "modifier", "adjusted"
    ));
    for t in &explanation.tokens {
        let base = t
            .base
            .map(|b| format!("{:.3}", b))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "  {:<20} {:>7} {:<18} {:>9.3}\n",
            truncate(&t.token, 20),
            base,
            t.modifier.to_string(),
            t.contribution
        ));
    }
    out.push_str(&format!(
        "\n  sum {:.3}  punctuation {:+.3}\n\n",
        explanation.sum, explanation.amplifier
    ));
    let item = ScoredText {
        message: String::new(),
        sentiment: explanation.score,
    };
    let scored = render_scored(&item);
    // skip the empty message line
    out.push_str(scored.split_once('\n').map(|(_, rest)| rest).unwrap_or(""));
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}
