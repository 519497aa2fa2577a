//! Project-level configuration support
//!
//! Loads configuration from `valence.toml` or `.valencerc.json` in the
//! working directory, or from an explicitly named file.
//!
//! # Configuration Format
//!
//! ```toml
//! # valence.toml
//!
//! [lexicon]
//! path = "vader_lexicon.txt"  # omit to use the embedded word list
//!
//! [scoring]
//! negation_scalar = -0.74
//! alpha = 15.0
//!
//! [output]
//! format = "json"
//! ```

use super::ScoringConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming a lexicon file (read by the `--lexicon` flag)
pub const LEXICON_ENV: &str = "VALENCE_LEXICON";

/// Config file names searched in order
const TOML_NAME: &str = "valence.toml";
const JSON_NAME: &str = ".valencerc.json";

/// Full project configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub lexicon: LexiconConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

/// Where to load the lexicon from
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Lexicon file; relative paths resolve against the config file's directory
    pub path: Option<PathBuf>,
}

/// CLI output defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (text, json, jsonl)
    pub format: Option<String>,
}

impl ProjectConfig {
    /// Resolve the lexicon file: an explicit override (the `--lexicon` flag,
    /// which also reads `VALENCE_LEXICON`) wins over `[lexicon].path`.
    ///
    /// `None` means the embedded word list.
    pub fn lexicon_path(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.lexicon.path.clone())
    }

    fn resolve_relative(mut self, base: &Path) -> Self {
        if let Some(path) = self.lexicon.path.take() {
            self.lexicon.path = Some(if path.is_relative() {
                base.join(path)
            } else {
                path
            });
        }
        self
    }
}

/// Load configuration from an explicit file. Errors are fatal.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig> {
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json_config(path),
        _ => load_toml_config(path),
    }
    .with_context(|| format!("Failed to load config {}", path.display()))?;

    config
        .scoring
        .validate()
        .with_context(|| format!("Invalid [scoring] in {}", path.display()))?;

    debug!("Loaded config from {}", path.display());
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(config.resolve_relative(base))
}

/// Discover configuration in `dir`. Unreadable files are skipped with a warning.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    for name in [TOML_NAME, JSON_NAME] {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => return config,
            Err(e) => warn!("Ignoring {}: {:#}", path.display(), e),
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

fn load_toml_config(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

fn load_json_config(path: &Path) -> Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Example file written by `valence init`
pub const EXAMPLE_CONFIG: &str = r#"# Valence configuration

[lexicon]
# Word list to score against (token<TAB>valence, or the four-column VADER file).
# Omit to use the embedded English list.
# path = "vader_lexicon.txt"

[scoring]
# Multiplier for negated words ("not good")
negation_scalar = -0.74
# Booster/dampener strength ("very", "slightly")
booster_increment = 0.293
# Emphasis for ALL CAPS words in mixed-case text
caps_increment = 0.733
# Emphasis per "!" (at most exclamation_cap count)
exclamation_increment = 0.292
exclamation_cap = 4
# Emphasis for "??" and more
question_increment = 0.18
question_cap = 3
question_max = 0.96
# Compound normalization constant
alpha = 15.0
# Contributions this close to zero count as neutral
neutral_band = 0.05
# Weights around "but"
contrastive_before = 0.5
contrastive_after = 1.5

[output]
# Default output format (text, json, jsonl)
format = "text"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_parses() {
        let config: ProjectConfig = toml::from_str(EXAMPLE_CONFIG).expect("parse example");
        assert_eq!(config.scoring, ScoringConfig::default());
        assert_eq!(config.output.format.as_deref(), Some("text"));
        assert!(config.lexicon.path.is_none());
    }

    #[test]
    fn test_discover_toml() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            dir.path().join("valence.toml"),
            "[lexicon]\npath = \"words.tsv\"\n\n[scoring]\nalpha = 10.0\n",
        )
        .expect("write config");

        let config = load_project_config(dir.path());
        assert_eq!(config.scoring.alpha, 10.0);
        assert_eq!(config.lexicon.path, Some(dir.path().join("words.tsv")));
    }

    #[test]
    fn test_discover_json() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            dir.path().join(".valencerc.json"),
            r#"{"scoring": {"neutral_band": 0.1}, "output": {"format": "json"}}"#,
        )
        .expect("write config");

        let config = load_project_config(dir.path());
        assert_eq!(config.scoring.neutral_band, 0.1);
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = load_project_config(dir.path());
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_broken_discovered_config_falls_back() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("valence.toml"), "[scoring\nalpha =").expect("write");
        let config = load_project_config(dir.path());
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_explicit_config_errors_propagate() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[scoring]\nalpha = -1.0\n").expect("write");
        let err = load_config_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("alpha"));
    }

    #[test]
    fn test_cli_override_wins() {
        let config = ProjectConfig {
            lexicon: LexiconConfig {
                path: Some(PathBuf::from("from-config.tsv")),
            },
            ..Default::default()
        };
        let path = config.lexicon_path(Some(Path::new("from-flag.tsv")));
        assert_eq!(path, Some(PathBuf::from("from-flag.tsv")));
        assert_eq!(config.lexicon_path(None), Some(PathBuf::from("from-config.tsv")));
        assert_eq!(ProjectConfig::default().lexicon_path(None), None);
    }
}
