//! CLI command definitions and handlers

mod analyze;
mod batch;
mod doctor;
mod init;
mod lookup;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use valence::config::{load_config_file, load_project_config, ProjectConfig, LEXICON_ENV};
use valence::reporters::OutputFormat;
use valence::{Lexicon, SentimentAnalyzer};

/// Valence - rule-based sentiment scoring
///
/// Scores text with a word-valence lexicon and grammatical rules
/// (negation, intensifiers, "but", caps and punctuation emphasis).
#[derive(Parser, Debug)]
#[command(name = "valence")]
#[command(
    version,
    about = "Rule-based lexicon sentiment scoring: positive, negative, neutral and compound scores for any text",
    after_help = "\
Examples:
  valence analyze \"I love this!\"          Score one text
  echo \"not bad at all\" | valence analyze   Score text from stdin
  valence analyze --compound \"meh\"        Print only the compound score
  valence analyze --explain \"not VERY good\"  Show how each word contributed
  valence batch reviews.txt --format jsonl  Score one text per line
  valence lookup good very not            Inspect lexicon and modifier words"
)]
pub struct Cli {
    /// Config file (default: valence.toml or .valencerc.json in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Lexicon file, overriding the config file
    #[arg(long, global = true, env = LEXICON_ENV)]
    pub lexicon: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a text (from arguments, or stdin when none are given)
    #[command(after_help = "\
Examples:
  valence analyze \"The food was good, but the service was GREAT!\"
  valence analyze --format json \"I hate mondays\"
  valence analyze --compound \"kind of ok\"")]
    Analyze {
        /// Text to score; multiple arguments are joined with spaces
        text: Vec<String>,

        /// Output format: text, json, jsonl (default: config or text)
        #[arg(long, short = 'f', value_parser = ["text", "json", "jsonl"])]
        format: Option<String>,

        /// Report only the compound score
        #[arg(long, conflicts_with = "explain")]
        compound: bool,

        /// Show the per-token breakdown
        #[arg(long)]
        explain: bool,
    },

    /// Score every non-blank line of a file in parallel
    Batch {
        /// Input file, or - for stdin
        input: PathBuf,

        /// Output format: text, json, jsonl (default: config or text)
        #[arg(long, short = 'f', value_parser = ["text", "json", "jsonl"])]
        format: Option<String>,
    },

    /// Show lexicon valence and modifier class of words
    Lookup {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Write an example valence.toml to the current directory
    Init {
        /// Overwrite an existing valence.toml
        #[arg(long)]
        force: bool,
    },

    /// Check that configuration and lexicon load
    Doctor,

    /// Show version information
    Version,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Analyze {
            text,
            format,
            compound,
            explain,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let format = resolve_format(format.as_deref(), &config)?;
            let analyzer = build_analyzer(&config, cli.lexicon.as_deref())?;
            analyze::run(&analyzer, text, format, *compound, *explain)
        }

        Commands::Batch { input, format } => {
            let config = load_config(cli.config.as_deref())?;
            let format = resolve_format(format.as_deref(), &config)?;
            let analyzer = build_analyzer(&config, cli.lexicon.as_deref())?;
            batch::run(&analyzer, input, format)
        }

        Commands::Lookup { words } => {
            let config = load_config(cli.config.as_deref())?;
            let analyzer = build_analyzer(&config, cli.lexicon.as_deref())?;
            lookup::run(&analyzer, words)
        }

        Commands::Init { force } => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            init::run(&cwd, *force)
        }

        Commands::Doctor => doctor::run(cli.config.as_deref(), cli.lexicon.as_deref()),

        Commands::Version => {
            println!("valence {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Explicit `--config` must load; otherwise discover in the current directory
fn load_config(explicit: Option<&Path>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            Ok(load_project_config(&cwd))
        }
    }
}

/// `--format` flag, then `[output].format`, then text
fn resolve_format(flag: Option<&str>, config: &ProjectConfig) -> Result<OutputFormat> {
    flag.or(config.output.format.as_deref())
        .unwrap_or("text")
        .parse()
}

fn load_lexicon(config: &ProjectConfig, cli_override: Option<&Path>) -> Result<Lexicon> {
    match config.lexicon_path(cli_override) {
        Some(path) => {
            let lexicon = Lexicon::from_path(&path)
                .with_context(|| format!("Failed to load lexicon {}", path.display()))?;
            debug!("Loaded {} lexicon entries from {}", lexicon.len(), path.display());
            Ok(lexicon)
        }
        None => Lexicon::embedded().context("Failed to load embedded lexicon"),
    }
}

fn build_analyzer(config: &ProjectConfig, cli_override: Option<&Path>) -> Result<SentimentAnalyzer> {
    let lexicon = load_lexicon(config, cli_override)?;
    Ok(SentimentAnalyzer::with_config(lexicon, config.scoring))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from(["valence", "analyze", "--compound", "I", "love", "it"])
            .expect("parse args");
        match cli.command {
            Commands::Analyze { text, compound, explain, .. } => {
                assert_eq!(text, vec!["I", "love", "it"]);
                assert!(compound);
                assert!(!explain);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_lexicon_flag_reads_environment() {
        use clap::CommandFactory;

        let cmd = Cli::command();
        let lexicon = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "lexicon")
            .expect("lexicon argument");
        assert_eq!(lexicon.get_env(), Some(std::ffi::OsStr::new(LEXICON_ENV)));
    }

    #[test]
    fn test_compound_conflicts_with_explain() {
        let result = Cli::try_parse_from(["valence", "analyze", "--compound", "--explain", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_format_precedence() {
        let mut config = ProjectConfig::default();
        assert_eq!(resolve_format(None, &config).expect("default"), OutputFormat::Text);

        config.output.format = Some("json".into());
        assert_eq!(resolve_format(None, &config).expect("config"), OutputFormat::Json);
        assert_eq!(
            resolve_format(Some("jsonl"), &config).expect("flag"),
            OutputFormat::Jsonl
        );

        config.output.format = Some("yaml".into());
        assert!(resolve_format(None, &config).is_err());
    }

    #[test]
    fn test_build_analyzer_missing_lexicon() {
        let config = ProjectConfig::default();
        let err = build_analyzer(&config, Some(Path::new("/nonexistent/words.tsv")))
            .expect_err("missing lexicon must fail");
        assert!(format!("{:#}", err).contains("Failed to load lexicon"));
    }
}
