//! Lookup command - inspect how words are treated

use anyhow::Result;
use console::style;
use valence::{ModifierFlag, SentimentAnalyzer};

pub fn run(analyzer: &SentimentAnalyzer, words: &[String]) -> Result<()> {
    for word in words {
        let lower = word.to_lowercase();
        let valence = analyzer
            .lexicon()
            .lookup(&lower)
            .map(|v| format!("{:+.2}", v))
            .unwrap_or_else(|| "-".to_string());
        let flag = analyzer.resolver().classify(&lower);
        println!(
            "{:<20} {:>6}  {}",
            style(word).bold(),
            valence,
            describe(flag)
        );
    }
    Ok(())
}

fn describe(flag: ModifierFlag) -> String {
    match flag {
        ModifierFlag::None => style("-").dim().to_string(),
        _ => style(flag).cyan().to_string(),
    }
}
