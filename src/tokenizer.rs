//! Text tokenizer for sentiment scoring
//!
//! Splits on whitespace and strips surrounding punctuation for lexicon
//! lookup, while keeping what the scorer needs for emphasis: original casing
//! and the `!` / `?` counts. Emoticon-shaped chunks (`:)`, `:D`, `<3`) are
//! kept intact so they can be looked up as words.

/// A single whitespace-delimited token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Position in the token sequence
    pub index: usize,
    /// Chunk as it appeared in the input, punctuation attached
    pub surface: String,
    /// Punctuation-stripped form, original casing
    pub word: String,
    /// Lowercase lookup key
    pub lower: String,
    /// `!` characters attached to this chunk
    pub exclamations: usize,
    /// `?` characters attached to this chunk
    pub questions: usize,
}

impl Token {
    /// ALL CAPS: at least one uppercase letter and no lowercase letters.
    pub fn is_all_caps(&self) -> bool {
        is_all_caps(&self.word)
    }
}

/// Token sequence plus the text-wide facts emphasis rules depend on
#[derive(Debug, Clone, Default)]
pub struct TokenizedText {
    tokens: Vec<Token>,
    cap_differential: bool,
    exclamations: usize,
    questions: usize,
}

impl TokenizedText {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Lowercase key of the token at `index`, if any
    pub fn lower(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|t| t.lower.as_str())
    }

    /// True when some, but not all, tokens are ALL CAPS.
    /// Shouting only stands out against non-shouted words.
    pub fn cap_differential(&self) -> bool {
        self.cap_differential
    }

    pub fn exclamations(&self) -> usize {
        self.exclamations
    }

    pub fn questions(&self) -> usize {
        self.questions
    }
}

/// Split `text` into tokens.
pub fn tokenize(text: &str) -> TokenizedText {
    let tokens: Vec<Token> = text
        .split_whitespace()
        .enumerate()
        .map(|(index, chunk)| {
            let word = strip_punctuation(chunk).to_string();
            Token {
                index,
                surface: chunk.to_string(),
                lower: word.to_lowercase(),
                word,
                exclamations: chunk.matches('!').count(),
                questions: chunk.matches('?').count(),
            }
        })
        .collect();

    let caps = tokens.iter().filter(|t| t.is_all_caps()).count();
    let cap_differential = caps > 0 && caps < tokens.len();
    let exclamations = tokens.iter().map(|t| t.exclamations).sum();
    let questions = tokens.iter().map(|t| t.questions).sum();

    TokenizedText {
        tokens,
        cap_differential,
        exclamations,
        questions,
    }
}

/// Strip leading/trailing ASCII punctuation unless the chunk is an emoticon.
fn strip_punctuation(chunk: &str) -> &str {
    let stripped = chunk.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.is_empty() {
        return chunk;
    }
    if stripped.chars().count() < 3 && is_emoticon_shaped(chunk) {
        return chunk;
    }
    stripped
}

fn is_emoticon_shaped(chunk: &str) -> bool {
    let total = chunk.chars().count();
    let punct = chunk.chars().filter(|c| c.is_ascii_punctuation()).count();
    total >= 2 && punct * 2 >= total
}

pub(crate) fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}
