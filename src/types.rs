//! Core types for textrank
//!
//! This module defines the configuration structs for the two summarization
//! modes together with the record types returned to callers.

use crate::errors::{Result, TextRankError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Co-occurrence Window
// ============================================================================

/// Co-occurrence window for the word graph.
///
/// `Unbounded` means any two tokens in the same sentence co-occur.
/// `Bounded(w)` means two tokens at filtered positions `p < q` co-occur
/// iff `q - p <= w`. The window bound trades recall (wide context) against
/// sparsity and solver runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Window {
    /// Any two tokens in the same sentence co-occur
    #[default]
    Unbounded,
    /// Tokens co-occur when their positions differ by at most this many
    Bounded(usize),
}

// ============================================================================
// Similarity strategy selector
// ============================================================================

/// Built-in sentence similarity strategies.
///
/// Custom similarity functions are injected via
/// [`KeysentenceSummarizer::with_similarity`](crate::summarizer::KeysentenceSummarizer::with_similarity)
/// and bypass this selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityKind {
    /// Cosine similarity over term-frequency vectors
    Cosine,
    /// Normalized token overlap from the TextRank literature
    #[default]
    TextRank,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for keyword extraction (word graph mode)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Minimum corpus frequency for a token to become a graph node
    pub min_count: usize,
    /// Co-occurrence window within a sentence
    #[serde(default)]
    pub window: Window,
    /// Minimum co-occurrence count for a pair to become an edge
    pub min_cooccurrence: usize,
    /// PageRank damping factor, must lie strictly in (0, 1)
    pub damping: f64,
    /// Number of power iterations (fixed, no early exit)
    pub max_iterations: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            min_count: 2,
            window: Window::Unbounded,
            min_cooccurrence: 2,
            damping: 0.85,
            max_iterations: 30,
        }
    }
}

impl KeywordConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// The damping factor is the only hard constraint; it is checked
    /// eagerly before any graph construction.
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)
    }

    /// Builder method: set minimum token frequency
    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }

    /// Builder method: set the co-occurrence window
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    /// Builder method: set minimum co-occurrence count
    pub fn with_min_cooccurrence(mut self, min_cooccurrence: usize) -> Self {
        self.min_cooccurrence = min_cooccurrence;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set iteration count
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Configuration for key-sentence extraction (sentence graph mode)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceConfig {
    /// Minimum corpus frequency for a token to participate in similarity
    pub min_count: usize,
    /// Minimum similarity for a sentence pair to become an edge
    pub min_sim: f64,
    /// Built-in similarity strategy
    #[serde(default)]
    pub similarity: SimilarityKind,
    /// PageRank damping factor, must lie strictly in (0, 1)
    pub damping: f64,
    /// Number of power iterations (fixed, no early exit)
    pub max_iterations: usize,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            min_count: 2,
            min_sim: 0.3,
            similarity: SimilarityKind::TextRank,
            damping: 0.85,
            max_iterations: 30,
        }
    }
}

impl SentenceConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)
    }

    /// Builder method: set minimum token frequency
    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }

    /// Builder method: set the minimum edge similarity
    pub fn with_min_sim(mut self, min_sim: f64) -> Self {
        self.min_sim = min_sim;
        self
    }

    /// Builder method: set the built-in similarity strategy
    pub fn with_similarity(mut self, similarity: SimilarityKind) -> Self {
        self.similarity = similarity;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set iteration count
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(TextRankError::invalid_damping_factor(damping))
    }
}

// ============================================================================
// Output records
// ============================================================================

/// A ranked keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// The token text
    pub word: String,
    /// The stationary importance score
    pub score: f64,
}

/// A ranked key sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeySentence {
    /// Position of the sentence in the original input list
    pub index: usize,
    /// The stationary importance score
    pub score: f64,
    /// The original sentence text
    pub sentence: String,
}
