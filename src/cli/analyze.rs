//! Analyze command - score a single text

use anyhow::{bail, Context, Result};
use std::io::{IsTerminal, Read};
use valence::reporters::{self, OutputFormat};
use valence::{ScoredText, SentimentAnalyzer};

/// Run the analyze command
pub fn run(
    analyzer: &SentimentAnalyzer,
    text: &[String],
    format: OutputFormat,
    compound: bool,
    explain: bool,
) -> Result<()> {
    let message = read_message(text)?;

    let output = if explain {
        let explanation = analyzer.explain(&message);
        reporters::render_explanation(&message, &explanation, format)?
    } else {
        let item = ScoredText {
            sentiment: analyzer.analyze(&message),
            message,
        };
        reporters::render_scored(&item, format, compound)?
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Arguments joined with spaces, or all of stdin when there are none
fn read_message(text: &[String]) -> Result<String> {
    let message = if text.is_empty() {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            bail!("No text provided for sentiment analysis");
        }
        let mut buf = String::new();
        stdin
            .lock()
            .read_to_string(&mut buf)
            .context("Failed to read text from stdin")?;
        buf
    } else {
        text.join(" ")
    };

    check_message(message)
}

/// Blank input is rejected here; the engine itself would score it neutral
fn check_message(message: String) -> Result<String> {
    if message.trim().is_empty() {
        bail!("No text provided for sentiment analysis");
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments_are_joined() {
        let args = vec!["not".to_string(), "bad".to_string()];
        assert_eq!(read_message(&args).expect("message"), "not bad");
    }

    #[test]
    fn test_blank_message_rejected() {
        let err = check_message("  \n ".to_string()).expect_err("blank must fail");
        assert_eq!(err.to_string(), "No text provided for sentiment analysis");
        assert!(read_message(&["".to_string()]).is_err());
    }
}
