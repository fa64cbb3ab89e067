//! Tokenization seam
//!
//! Tokenization is an injected collaborator: the summarizers accept any
//! [`Tokenize`] implementation, including plain closures. The built-in
//! [`WordTokenizer`] covers the common case.

pub mod tokenizer;

pub use tokenizer::WordTokenizer;

/// A sentence tokenizer.
///
/// Must be deterministic and pure; tokens are opaque strings compared by
/// exact equality.
pub trait Tokenize {
    /// Split a sentence into tokens
    fn tokenize(&self, sentence: &str) -> Vec<String>;
}

impl<F> Tokenize for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, sentence: &str) -> Vec<String> {
        self(sentence)
    }
}
