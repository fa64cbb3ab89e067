//! Summarization facades
//!
//! Orchestration per mode: keyword mode runs vocabulary indexing, word
//! graph construction, and the rank solver; key-sentence mode runs
//! sentence graph construction and the solver. Each facade owns the
//! trained score vector and the mapping needed to translate node indices
//! back to human-readable output; that state is replaced, never merged,
//! on retraining.

pub mod keyword;
pub mod sentence;

pub use keyword::KeywordSummarizer;
pub use sentence::KeysentenceSummarizer;
