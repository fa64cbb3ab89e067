//! Vocabulary indexing
//!
//! Counts token frequencies across a tokenized corpus and assigns a dense
//! integer index to every token meeting a minimum-frequency threshold.
//! Index assignment follows first occurrence in corpus order so repeated
//! runs over identical input produce identical indices.

use crate::errors::{Result, TextRankError};
use rustc_hash::FxHashMap;

/// A frequency-filtered, bijective token-to-index mapping.
///
/// Built once per training call and immutable afterward. Every token that
/// appears in a graph has an index; tokens below `min_count` are excluded
/// entirely and never become graph nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    token_to_idx: FxHashMap<String, u32>,
    idx_to_token: Vec<Option<String>>,
}

impl Vocabulary {
    /// Build a vocabulary from tokenized sentences.
    ///
    /// Tokens are counted across the full corpus; a token qualifies iff its
    /// total count is at least `min_count`. Fails with
    /// [`TextRankError::EmptyVocabulary`] when zero tokens qualify.
    pub fn from_sentences(sentences: &[Vec<String>], min_count: usize) -> Result<Self> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for sentence in sentences {
            for token in sentence {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        // Assign indices in first-occurrence order, not hash order.
        let mut token_to_idx = FxHashMap::default();
        let mut idx_to_token = Vec::new();
        for sentence in sentences {
            for token in sentence {
                if token_to_idx.contains_key(token.as_str()) {
                    continue;
                }
                if counts[token.as_str()] >= min_count {
                    token_to_idx.insert(token.clone(), idx_to_token.len() as u32);
                    idx_to_token.push(Some(token.clone()));
                }
            }
        }

        if idx_to_token.is_empty() {
            return Err(TextRankError::empty_vocabulary(min_count));
        }

        Ok(Self {
            token_to_idx,
            idx_to_token,
        })
    }

    /// Build a vocabulary from a caller-supplied mapping, used verbatim.
    ///
    /// Frequency filtering is skipped; this pins the vocabulary across
    /// repeated calls for reproducibility. Indices need not be dense:
    /// [`token`](Self::token) returns `None` for unmapped gap indices.
    pub fn from_mapping(mapping: FxHashMap<String, u32>) -> Self {
        let size = mapping
            .values()
            .map(|&idx| idx as usize + 1)
            .max()
            .unwrap_or(0);
        let mut idx_to_token = vec![None; size];
        for (token, &idx) in &mapping {
            idx_to_token[idx as usize] = Some(token.clone());
        }
        Self {
            token_to_idx: mapping,
            idx_to_token,
        }
    }

    /// Look up the index for a token
    pub fn index_of(&self, token: &str) -> Option<u32> {
        self.token_to_idx.get(token).copied()
    }

    /// Look up the token for an index
    pub fn token(&self, index: u32) -> Option<&str> {
        self.idx_to_token.get(index as usize)?.as_deref()
    }

    /// Number of indexed tokens
    pub fn len(&self) -> usize {
        self.idx_to_token.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.idx_to_token.is_empty()
    }

    /// Borrow the token-to-index mapping, e.g. to pin it for a later call
    pub fn mapping(&self) -> &FxHashMap<String, u32> {
        &self.token_to_idx
    }
}
