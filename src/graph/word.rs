//! Word co-occurrence graph construction
//!
//! Turns tokenized sentences into a symmetric word graph: two vocabulary
//! entries are connected with the number of times they co-occurred within
//! the configured window, after pruning pairs below `min_cooccurrence`.

use crate::graph::csr::CsrGraph;
use crate::types::Window;
use crate::vocab::Vocabulary;
use rustc_hash::FxHashMap;

/// Builder for the word co-occurrence graph
#[derive(Debug, Clone, Copy)]
pub struct WordGraphBuilder {
    window: Window,
    min_cooccurrence: usize,
}

impl Default for WordGraphBuilder {
    fn default() -> Self {
        Self {
            window: Window::Unbounded,
            min_cooccurrence: 2,
        }
    }
}

impl WordGraphBuilder {
    /// Create a builder with the given window and co-occurrence threshold
    pub fn new(window: Window, min_cooccurrence: usize) -> Self {
        Self {
            window,
            min_cooccurrence,
        }
    }

    /// Build the co-occurrence graph over `[0, vocab.len())`.
    ///
    /// Tokens outside the vocabulary are dropped before windowing, so
    /// window distances are measured over the filtered positions. A token
    /// repeated within the window of itself produces a retained self-loop;
    /// the weight of each kept edge is its raw co-occurrence count.
    pub fn build(&self, sentences: &[Vec<String>], vocab: &Vocabulary) -> CsrGraph {
        let mut counts: FxHashMap<(u32, u32), u64> = FxHashMap::default();

        for sentence in sentences {
            let ids: Vec<u32> = sentence
                .iter()
                .filter_map(|token| vocab.index_of(token))
                .collect();

            for (p, &a) in ids.iter().enumerate() {
                let limit = match self.window {
                    Window::Unbounded => ids.len(),
                    Window::Bounded(w) => (p + w + 1).min(ids.len()),
                };
                for &b in &ids[p + 1..limit] {
                    let key = if a <= b { (a, b) } else { (b, a) };
                    *counts.entry(key).or_insert(0) += 1;
                }
            }
        }

        let edges: FxHashMap<(u32, u32), f64> = counts
            .into_iter()
            .filter(|&(_, count)| count as usize >= self.min_cooccurrence)
            .map(|(pair, count)| (pair, count as f64))
            .collect();

        CsrGraph::from_edges(vocab.len(), &edges)
    }
}
