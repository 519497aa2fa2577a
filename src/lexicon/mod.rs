//! Valence lexicon
//!
//! Maps words and phrases to a human-rated base valence on roughly the
//! [-4, +4] scale. Keys are stored lowercase and lookups are case-insensitive
//! exact matches: no stemming, no fuzzy matching.
//!
//! # Source Format
//!
//! One record per line, tab-separated. Two layouts are accepted:
//!
//! ```text
//! good	1.9
//! good	1.9	0.9434	[2, 1, 1, 3, 2, 4, 2, 2, 1, 1]
//! ```
//!
//! The second is the published VADER layout (mean, standard deviation, raw
//! ratings); only the mean is used. Blank lines and `#` comments are skipped.

use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// English word list compiled into the binary
const EMBEDDED_SOURCE: &str = include_str!("../../data/lexicon.tsv");

/// Errors that can occur while building a lexicon
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Lexicon source contains no entries")]
    Empty,

    #[error("Line {line}: expected 2 or 4 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("Line {line}: invalid valence '{value}'")]
    InvalidValence { line: usize, value: String },

    #[error("Line {line}: empty word")]
    EmptyWord { line: usize },

    #[error("Failed to read lexicon {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable word -> valence dictionary.
///
/// Built once, then shared read-only by every scoring call.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: FxHashMap<String, f64>,
}

impl Lexicon {
    /// Parse a lexicon from its line-oriented text form.
    pub fn load(source: &str) -> Result<Self, LoadError> {
        let mut entries = FxHashMap::default();

        for (idx, raw) in source.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = trimmed.split('\t').collect();
            if fields.len() != 2 && fields.len() != 4 {
                return Err(LoadError::FieldCount {
                    line,
                    found: fields.len(),
                });
            }

            let word = fields[0].trim();
            if word.is_empty() {
                return Err(LoadError::EmptyWord { line });
            }
            let value = fields[1].trim();
            let valence = parse_valence(value).ok_or_else(|| LoadError::InvalidValence {
                line,
                value: value.to_string(),
            })?;

            insert_entry(&mut entries, word, valence);
        }

        if entries.is_empty() {
            return Err(LoadError::Empty);
        }

        debug!("Loaded lexicon with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Read and parse a lexicon file.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Reading lexicon from {}", path.display());
        Self::load(&content)
    }

    /// Build a lexicon from in-memory `(word, valence)` records.
    pub fn from_records<I, S>(records: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut entries = FxHashMap::default();
        for (idx, (word, valence)) in records.into_iter().enumerate() {
            let line = idx + 1;
            let word = word.as_ref().trim();
            if word.is_empty() {
                return Err(LoadError::EmptyWord { line });
            }
            if !valence.is_finite() {
                return Err(LoadError::InvalidValence {
                    line,
                    value: valence.to_string(),
                });
            }
            insert_entry(&mut entries, word, valence);
        }

        if entries.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(Self { entries })
    }

    /// The English word list shipped with the crate.
    ///
    /// Each call builds a new value; there is no process-wide instance.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::load(EMBEDDED_SOURCE)
    }

    /// Case-insensitive exact lookup.
    pub fn lookup(&self, word: &str) -> Option<f64> {
        self.entries.get(lowercase(word).as_ref()).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

fn parse_valence(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn insert_entry(entries: &mut FxHashMap<String, f64>, word: &str, valence: f64) {
    let key = word.to_lowercase();
    if let Some(previous) = entries.insert(key, valence) {
        warn!(
            "Duplicate lexicon entry '{}' ({} replaced by {})",
            word, previous, valence
        );
    }
}

/// Avoid allocating when the key is already lowercase (the scoring hot path).
fn lowercase(word: &str) -> Cow<'_, str> {
    if word.chars().any(char::is_uppercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}
