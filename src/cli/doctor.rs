//! Doctor command - check configuration and lexicon

use anyhow::{bail, Result};
use console::style;
use std::path::Path;

pub fn run(config_path: Option<&Path>, lexicon_override: Option<&Path>) -> Result<()> {
    println!("🩺 Valence Doctor\n");
    let mut failures = 0;

    let config = match super::load_config(config_path) {
        Ok(config) => {
            match config_path {
                Some(path) => println!("{} Config: {}", style("✓").green(), path.display()),
                None => println!("{} Config: OK (discovered or defaults)", style("✓").green()),
            }
            config
        }
        Err(e) => {
            println!("{} Config: {:#}", style("✗").red(), e);
            failures += 1;
            Default::default()
        }
    };

    match config.lexicon_path(lexicon_override) {
        Some(path) => println!("  Lexicon source: {}", path.display()),
        None => println!("  Lexicon source: embedded"),
    }
    match super::build_analyzer(&config, lexicon_override) {
        Ok(analyzer) => {
            println!(
                "{} Lexicon: {} entries",
                style("✓").green(),
                analyzer.lexicon().len()
            );
            let score = analyzer.analyze("This is good");
            if score.compound > 0.0 {
                println!("{} Scoring: OK", style("✓").green());
            } else {
                println!(
                    "{} Scoring: \"This is good\" scored {:.4} (lexicon may lack common words)",
                    style("○").yellow(),
                    score.compound
                );
            }
        }
        Err(e) => {
            println!("{} Lexicon: {:#}", style("✗").red(), e);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} check(s) failed", failures);
    }
    println!("\n✅ All checks passed!");
    Ok(())
}
