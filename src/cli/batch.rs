//! Batch command - score one text per line, in parallel

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};
use valence::reporters::{self, OutputFormat};
use valence::{BatchSummary, ScoredText, SentimentAnalyzer};

/// Run the batch command
pub fn run(analyzer: &SentimentAnalyzer, input: &Path, format: OutputFormat) -> Result<()> {
    let content = read_input(input)?;
    let lines = non_blank_lines(&content);
    if lines.is_empty() {
        warn!("No text found in {}", input.display());
    }

    let bar = ProgressBar::new(lines.len() as u64);
    bar.set_style(create_bar_style());
    bar.set_message("Scoring...");

    let items: Vec<ScoredText> = lines
        .par_iter()
        .map(|line| {
            let item = ScoredText {
                message: (*line).to_string(),
                sentiment: analyzer.analyze(line),
            };
            bar.inc(1);
            item
        })
        .collect();
    bar.finish_and_clear();

    let summary = BatchSummary::from_scores(items.iter().map(|i| &i.sentiment));
    info!("{}", summary);

    let output = reporters::render_batch(&items, &summary, format)?;
    print!("{}", output);

    if format == OutputFormat::Text {
        eprintln!("{} Scored {} texts", style("✓").green(), items.len());
    }
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("Failed to read texts from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

/// Lines with surrounding whitespace removed, blanks dropped
fn non_blank_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn create_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_lines() {
        let lines = non_blank_lines("good\n\n  \nbad  \r\n\tok\n");
        assert_eq!(lines, vec!["good", "bad", "ok"]);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_input(Path::new("/nonexistent/texts.txt")).expect_err("missing file");
        assert!(err.to_string().contains("Failed to read"));
    }
}
