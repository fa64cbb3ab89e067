//! Power iteration with damping, bias, and dangling-node handling
//!
//! Runs exactly `max_iterations` steps with no convergence early-exit,
//! making the cost fixed and the output deterministic for a given graph
//! and configuration.

use super::RankScores;
use crate::errors::{Result, TextRankError};
use crate::graph::csr::CsrGraph;
use crate::types::validate_damping;

/// Biased PageRank solver
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Damping factor, must lie strictly in (0, 1)
    pub damping: f64,
    /// Number of power iterations performed
    pub max_iterations: usize,
    /// Optional teleport distribution; uniform when absent
    bias: Option<Vec<f64>>,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 30,
            bias: None,
        }
    }
}

impl PageRank {
    /// Create a solver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the iteration count
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the bias (teleport) vector.
    ///
    /// One non-negative entry per node, aligned positionally with graph
    /// nodes; it is normalized to sum to 1 internally and need not be
    /// pre-normalized.
    pub fn with_bias(mut self, bias: Vec<f64>) -> Self {
        self.bias = Some(bias);
        self
    }

    /// Compute the stationary score vector for a graph.
    ///
    /// Starting from the uniform distribution, each step moves `damping`
    /// of the mass along normalized edge transitions (dangling-node mass
    /// is redistributed through the bias) and teleports the remaining
    /// `1 - damping` according to the bias. Total mass stays 1 throughout.
    pub fn run(&self, graph: &CsrGraph) -> Result<RankScores> {
        validate_damping(self.damping)?;
        let n = graph.num_nodes;
        if n == 0 {
            return Err(TextRankError::EmptyGraph);
        }
        let bias = self.prepare_bias(n)?;

        let dangling = graph.dangling_nodes();
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        for _ in 0..self.max_iterations {
            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();

            for (j, slot) in next.iter_mut().enumerate() {
                *slot = (1.0 - self.damping) * bias[j] + self.damping * dangling_mass * bias[j];
            }

            for node in 0..n {
                let out_weight = graph.node_total_weight(node as u32);
                if out_weight > 0.0 {
                    let share = self.damping * scores[node] / out_weight;
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        next[neighbor as usize] += share * weight;
                    }
                }
            }

            std::mem::swap(&mut scores, &mut next);
        }

        Ok(RankScores::new(scores))
    }

    /// Normalize the bias to a probability distribution.
    ///
    /// A missing bias, or one that sums to zero, becomes the uniform
    /// distribution. A length mismatch is a configuration error.
    fn prepare_bias(&self, n: usize) -> Result<Vec<f64>> {
        match &self.bias {
            None => Ok(vec![1.0 / n as f64; n]),
            Some(bias) if bias.len() != n => {
                Err(TextRankError::bias_length_mismatch(n, bias.len()))
            }
            Some(bias) => {
                let sum: f64 = bias.iter().sum();
                if sum > 0.0 {
                    Ok(bias.iter().map(|&b| b / sum).collect())
                } else {
                    Ok(vec![1.0 / n as f64; n])
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn graph(num_nodes: usize, edges: &[((u32, u32), f64)]) -> CsrGraph {
        let map: FxHashMap<(u32, u32), f64> = edges.iter().copied().collect();
        CsrGraph::from_edges(num_nodes, &map)
    }

    fn triangle() -> CsrGraph {
        graph(3, &[((0, 1), 1.0), ((1, 2), 1.0), ((0, 2), 1.0)])
    }

    #[test]
    fn test_triangle_equal_scores() {
        let result = PageRank::new().run(&triangle()).unwrap();
        let expected = 1.0 / 3.0;
        for &score in result.as_slice() {
            assert!((score - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_star_hub_highest() {
        let star = graph(4, &[((0, 1), 1.0), ((0, 2), 1.0), ((0, 3), 1.0)]);
        let result = PageRank::new().run(&star).unwrap();
        for node in 1..4 {
            assert!(result.score(0) > result.score(node));
        }
    }

    #[test]
    fn test_mass_conserved() {
        let result = PageRank::new().run(&triangle()).unwrap();
        let sum: f64 = result.as_slice().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_dangling_mass_conserved() {
        // Node 2 is isolated; its mass must be redistributed, not lost.
        let g = graph(3, &[((0, 1), 1.0)]);
        let result = PageRank::new().run(&g).unwrap();
        let sum: f64 = result.as_slice().iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(result.score(2) > 0.0);
    }

    #[test]
    fn test_isolated_node_near_pure_teleport() {
        // With uniform bias, an isolated node's score stays close to the
        // teleport floor plus its own recycled dangling share.
        let g = graph(3, &[((0, 1), 1.0)]);
        let result = PageRank::new().run(&g).unwrap();
        let floor = (1.0 - 0.85) / 3.0;
        assert!(result.score(2) >= floor);
        assert!(result.score(2) < result.score(0));
    }

    #[test]
    fn test_bias_skews_ranking() {
        let uniform = PageRank::new().run(&triangle()).unwrap();
        let biased = PageRank::new()
            .with_bias(vec![10.0, 1.0, 1.0])
            .run(&triangle())
            .unwrap();
        assert!(biased.score(0) > uniform.score(0));
        assert!(biased.score(0) > biased.score(1));
    }

    #[test]
    fn test_bias_need_not_be_normalized() {
        let a = PageRank::new()
            .with_bias(vec![2.0, 4.0, 6.0])
            .run(&triangle())
            .unwrap();
        let b = PageRank::new()
            .with_bias(vec![1.0, 2.0, 3.0])
            .run(&triangle())
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_bias_falls_back_to_uniform() {
        let zeroed = PageRank::new()
            .with_bias(vec![0.0, 0.0, 0.0])
            .run(&triangle())
            .unwrap();
        let uniform = PageRank::new().run(&triangle()).unwrap();
        assert_eq!(zeroed, uniform);
    }

    #[test]
    fn test_bias_length_mismatch() {
        let err = PageRank::new()
            .with_bias(vec![1.0, 2.0])
            .run(&triangle())
            .unwrap_err();
        assert_eq!(err, TextRankError::bias_length_mismatch(3, 2));
    }

    #[test]
    fn test_invalid_damping_checked_eagerly() {
        for bad in [0.0, 1.0, -0.5, 2.0] {
            let err = PageRank::new().with_damping(bad).run(&triangle()).unwrap_err();
            assert_eq!(err, TextRankError::invalid_damping_factor(bad));
        }
    }

    #[test]
    fn test_empty_graph_error() {
        let err = PageRank::new().run(&CsrGraph::default()).unwrap_err();
        assert_eq!(err, TextRankError::EmptyGraph);
    }

    #[test]
    fn test_fixed_iteration_count_is_deterministic() {
        let a = PageRank::new().run(&triangle()).unwrap();
        let b = PageRank::new().run(&triangle()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_iterations_returns_uniform_start() {
        let result = PageRank::new()
            .with_max_iterations(0)
            .run(&triangle())
            .unwrap();
        for &score in result.as_slice() {
            assert!((score - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_weighted_edges_matter() {
        // Node 1 is pulled harder toward node 0 than node 2 is.
        let g = graph(3, &[((0, 1), 10.0), ((1, 2), 1.0)]);
        let result = PageRank::new().run(&g).unwrap();
        assert!(result.score(0) > result.score(2));
    }
}
