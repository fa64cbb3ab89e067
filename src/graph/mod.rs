//! Weighted, symmetric sparse graphs over node indices
//!
//! Word graphs span vocabulary indices; sentence graphs span original
//! sentence positions. Both are materialized as CSR for the solver.

pub mod csr;
pub mod sentence;
pub mod word;

pub use csr::CsrGraph;
pub use sentence::SentenceGraphBuilder;
pub use word::WordGraphBuilder;
