//! Sentence similarity graph construction
//!
//! Turns a tokenized sentence list into a weighted similarity graph over
//! sentence positions. Pairs below `min_sim` produce no edge at all, which
//! keeps the graph sparse and lets absent edges reduce the out-weight used
//! for transition normalization.

use crate::graph::csr::CsrGraph;
use crate::similarity::Similarity;
use rustc_hash::FxHashMap;

/// Above this many sentences the all-pairs pass runs on the rayon pool.
const PARALLEL_THRESHOLD: usize = 256;

/// Builder for the sentence similarity graph
#[derive(Debug, Clone, Copy)]
pub struct SentenceGraphBuilder {
    min_sim: f64,
}

impl Default for SentenceGraphBuilder {
    fn default() -> Self {
        Self { min_sim: 0.3 }
    }
}

impl SentenceGraphBuilder {
    /// Create a builder with the given minimum edge similarity
    pub fn new(min_sim: f64) -> Self {
        Self { min_sim }
    }

    /// Build the similarity graph over `[0, sentences.len())`.
    ///
    /// `sentences` are tokenized and already vocabulary-filtered; the
    /// sentence index is the node label. Similarities are computed pairwise
    /// and only kept edges are materialized, so no dense N x N structure is
    /// allocated.
    pub fn build(&self, sentences: &[Vec<String>], similarity: &dyn Similarity) -> CsrGraph {
        let n = sentences.len();
        let edges: FxHashMap<(u32, u32), f64> = if n < PARALLEL_THRESHOLD {
            self.pairwise_rows(sentences, similarity, 0, n)
        } else {
            use rayon::prelude::*;
            (0..n)
                .into_par_iter()
                .map(|i| self.pairwise_rows(sentences, similarity, i, i + 1))
                .reduce(FxHashMap::default, |mut acc, row| {
                    acc.extend(row);
                    acc
                })
        };

        CsrGraph::from_edges(n, &edges)
    }

    /// Compute kept edges for rows `[start, end)` against all later columns.
    fn pairwise_rows(
        &self,
        sentences: &[Vec<String>],
        similarity: &dyn Similarity,
        start: usize,
        end: usize,
    ) -> FxHashMap<(u32, u32), f64> {
        let mut edges = FxHashMap::default();
        for i in start..end {
            for j in (i + 1)..sentences.len() {
                let sim = similarity.similarity(&sentences[i], &sentences[j]);
                if sim >= self.min_sim {
                    edges.insert((i as u32, j as u32), sim);
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::{CosineSimilarity, TextRankSimilarity};

    fn tokenized(sents: &[&str]) -> Vec<Vec<String>> {
        sents
            .iter()
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_shared_tokens_form_edge() {
        // A and B share everything, C shares nothing.
        let sents = tokenized(&["the cat sat", "the cat sat", "red dog ran"]);
        let graph = SentenceGraphBuilder::new(0.1).build(&sents, &CosineSimilarity);

        assert_eq!(graph.edge_weight(0, 1), Some(1.0));
        assert_eq!(graph.edge_weight(0, 2), None);
        assert_eq!(graph.edge_weight(1, 2), None);
        assert_eq!(graph.dangling_nodes(), vec![2]);
    }

    #[test]
    fn test_min_sim_threshold() {
        let sents = tokenized(&["a b c d", "a x y z"]);
        let sim = CosineSimilarity.similarity(&sents[0], &sents[1]);

        let kept = SentenceGraphBuilder::new(sim - 1e-6).build(&sents, &CosineSimilarity);
        assert!(kept.edge_weight(0, 1).is_some());

        let pruned = SentenceGraphBuilder::new(sim + 1e-6).build(&sents, &CosineSimilarity);
        assert!(pruned.edge_weight(0, 1).is_none());
    }

    #[test]
    fn test_no_self_edges() {
        let sents = tokenized(&["a b c", "a b c"]);
        let graph = SentenceGraphBuilder::new(0.0).build(&sents, &TextRankSimilarity);
        assert_eq!(graph.edge_weight(0, 0), None);
        assert_eq!(graph.edge_weight(1, 1), None);
    }

    #[test]
    fn test_custom_similarity_function() {
        let sents = tokenized(&["a", "b", "c"]);
        let never = |_: &[String], _: &[String]| 0.0;
        let graph = SentenceGraphBuilder::new(0.5).build(&sents, &never);
        assert_eq!(graph.num_edges(), 0);

        let constant = |_: &[String], _: &[String]| 1.0;
        let graph = SentenceGraphBuilder::new(0.5).build(&sents, &constant);
        // Complete graph on 3 nodes: 3 undirected edges, 6 CSR entries.
        assert_eq!(graph.num_edges(), 6);
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        // Enough sentences to cross the rayon threshold, cyclic content so
        // some pairs match and some do not.
        let texts: Vec<String> = (0..PARALLEL_THRESHOLD + 8)
            .map(|i| format!("tok{} tok{} shared word", i % 7, (i + 1) % 7))
            .collect();
        let sents: Vec<Vec<String>> = texts
            .iter()
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .collect();

        let builder = SentenceGraphBuilder::new(0.4);
        let parallel = builder.build(&sents, &TextRankSimilarity);
        let sequential = builder.pairwise_rows(&sents, &TextRankSimilarity, 0, sents.len());
        let expected = CsrGraph::from_edges(sents.len(), &sequential);

        assert_eq!(parallel, expected);
    }

    #[test]
    fn test_empty_input() {
        let graph = SentenceGraphBuilder::default().build(&[], &CosineSimilarity);
        assert!(graph.is_empty());
    }
}
