//! # textrank
//!
//! Unsupervised keyword and key-sentence extraction by ranking text units
//! with a PageRank-style stationary distribution over a weighted graph.
//!
//! Given a tokenizer and a list of raw sentences, the library builds
//! either a word co-occurrence graph (keyword mode) or a sentence
//! similarity graph (key-sentence mode) and ranks the nodes with biased,
//! damped power iteration. No trained model or external corpus is needed,
//! and the pipeline is language-agnostic: tokenization and sentence
//! similarity are injected collaborators.
//!
//! ## Quick start
//!
//! ```
//! use textrank::{KeywordConfig, KeywordSummarizer};
//!
//! let sentences = [
//!     "the quick brown fox jumps over the lazy dog",
//!     "the lazy dog sleeps while the quick fox runs",
//! ];
//! let mut summarizer = KeywordSummarizer::new()
//!     .with_config(KeywordConfig::default().with_min_count(1).with_min_cooccurrence(1));
//! let keywords = summarizer.summarize(&sentences, 5).unwrap();
//! assert!(!keywords.is_empty());
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod similarity;
pub mod summarizer;
pub mod types;
pub mod vocab;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{
    KeySentence, Keyword, KeywordConfig, SentenceConfig, SimilarityKind, Window,
};

// Re-export main functionality
pub use graph::{csr::CsrGraph, sentence::SentenceGraphBuilder, word::WordGraphBuilder};
pub use nlp::{tokenizer::WordTokenizer, Tokenize};
pub use pagerank::{solver::PageRank, RankScores};
pub use similarity::{CosineSimilarity, Similarity, TextRankSimilarity};
pub use summarizer::{keyword::KeywordSummarizer, sentence::KeysentenceSummarizer};
pub use vocab::Vocabulary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
