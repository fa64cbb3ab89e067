//! Error types for textrank
//!
//! This module defines the error types used throughout the library.
//! All errors are fatal to the current call: computation is deterministic
//! and pure, so retrying with identical inputs reproduces the identical
//! error. The caller decides whether to adjust thresholds and retry.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TextRankError>;

/// Main error type for textrank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextRankError {
    /// No token survived `min_count` filtering (degenerate corpus or
    /// threshold too strict)
    #[error("Empty vocabulary: no token reached min_count={min_count}")]
    EmptyVocabulary { min_count: usize },

    /// Zero nodes reached the solver (e.g., zero sentences supplied)
    #[error("Empty graph: the rank solver requires at least one node")]
    EmptyGraph,

    /// Damping factor outside the open interval (0, 1)
    #[error("Invalid damping factor {value}: must lie strictly between 0 and 1")]
    InvalidDampingFactor { value: f64 },

    /// Bias vector length does not match the graph size
    #[error("Bias length mismatch: graph has {expected} nodes, bias has {found} entries")]
    BiasLengthMismatch { expected: usize, found: usize },

    /// Key-sentence `summarize` called with a sentence count that does not
    /// match the trained score vector
    #[error("Stale state: trained on {trained} sentences, called with {supplied}")]
    StaleState { trained: usize, supplied: usize },

    /// A method that requires a trained score vector was called before
    /// any `train`/`summarize` call
    #[error("Untrained: call train or summarize first")]
    Untrained,
}

impl TextRankError {
    /// Create an empty vocabulary error
    pub fn empty_vocabulary(min_count: usize) -> Self {
        Self::EmptyVocabulary { min_count }
    }

    /// Create an invalid damping factor error
    pub fn invalid_damping_factor(value: f64) -> Self {
        Self::InvalidDampingFactor { value }
    }

    /// Create a bias length mismatch error
    pub fn bias_length_mismatch(expected: usize, found: usize) -> Self {
        Self::BiasLengthMismatch { expected, found }
    }

    /// Create a stale state error
    pub fn stale_state(trained: usize, supplied: usize) -> Self {
        Self::StaleState { trained, supplied }
    }

    /// Check if this error indicates a configuration problem rather than
    /// degenerate input
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDampingFactor { .. } | Self::BiasLengthMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextRankError::empty_vocabulary(5);
        assert!(err.to_string().contains("Empty vocabulary"));
        assert!(err.to_string().contains("min_count=5"));

        let err = TextRankError::invalid_damping_factor(1.5);
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("between 0 and 1"));

        let err = TextRankError::stale_state(10, 7);
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn test_is_config_error() {
        assert!(TextRankError::invalid_damping_factor(0.0).is_config_error());
        assert!(TextRankError::bias_length_mismatch(3, 5).is_config_error());
        assert!(!TextRankError::EmptyGraph.is_config_error());
        assert!(!TextRankError::Untrained.is_config_error());
    }
}
