//! Biased, damped PageRank over sparse graphs
//!
//! The solver is a pure function from (graph, damping, iteration budget,
//! bias) to a score vector; it owns no persistent state.

pub mod solver;

pub use solver::PageRank;

/// Stationary importance scores, one per graph node.
///
/// Values are comparable only within one solver run: treat them as a
/// ranking signal, not a calibrated probability distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct RankScores {
    scores: Vec<f64>,
}

impl RankScores {
    pub(crate) fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Number of scored nodes
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if there are no scored nodes
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Borrow the raw score vector
    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }

    /// Top `k` nodes sorted by descending score, ties broken by ascending
    /// node index. Returns `min(k, len)` entries.
    pub fn top_n(&self, k: usize) -> Vec<(usize, f64)> {
        let mut indexed: Vec<(usize, f64)> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        indexed.truncate(k);
        indexed
    }
}
