//! Configuration module for Valence
//!
//! This module handles:
//! - Scoring constants (negation damping, emphasis increments, normalization)
//! - Project-level configuration (valence.toml / .valencerc.json)
//! - Lexicon source selection

mod project_config;
mod scoring;

pub use project_config::{
    load_config_file, load_project_config, LexiconConfig, OutputConfig, ProjectConfig,
    EXAMPLE_CONFIG, LEXICON_ENV,
};
pub use scoring::ScoringConfig;
