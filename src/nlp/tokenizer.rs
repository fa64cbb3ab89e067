//! Unicode-aware default tokenizer
//!
//! UAX #29 compliant word segmentation with support for CJK, contractions,
//! and other Unicode scripts. This is the default [`Tokenize`]
//! implementation; language-specific tokenizers (morphological analyzers,
//! stemmers) are injected by the caller instead.

use super::Tokenize;
use unicode_segmentation::UnicodeSegmentation;

/// A Unicode-aware word tokenizer following UAX #29
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    /// Lowercase tokens so surface variants collapse to one graph node
    lowercase: bool,
    /// Minimum token length in characters
    min_token_length: usize,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_token_length: 1,
        }
    }
}

impl WordTokenizer {
    /// Create a tokenizer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether tokens are lowercased
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }
}

impl Tokenize for WordTokenizer {
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence
            .unicode_words()
            .filter(|word| word.chars().count() >= self.min_token_length)
            .filter(|word| word.chars().any(char::is_alphanumeric))
            .map(|word| {
                if self.lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                }
            })
            .collect()
    }
}
