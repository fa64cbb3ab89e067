//! Sentence similarity strategies
//!
//! Similarity functions are the pluggable seam of the sentence graph
//! builder: any implementation of [`Similarity`] can be injected, including
//! plain closures. Implementations are trusted to be symmetric in their two
//! arguments; violating symmetry breaks the adjacency structure's symmetric
//! invariant.

use rustc_hash::FxHashMap;

/// A sentence-pair similarity function.
///
/// Returns a non-negative real. `Send + Sync` so the all-pairs pass can be
/// parallelized for large inputs.
pub trait Similarity: Send + Sync {
    /// Compute the similarity between two tokenized sentences
    fn similarity(&self, a: &[String], b: &[String]) -> f64;
}

impl<F> Similarity for F
where
    F: Fn(&[String], &[String]) -> f64 + Send + Sync,
{
    fn similarity(&self, a: &[String], b: &[String]) -> f64 {
        self(a, b)
    }
}

/// Cosine similarity over term-frequency vectors.
///
/// Token duplicates count: each sentence becomes a sparse TF vector and
/// the result is the cosine of the angle between the two vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineSimilarity;

impl Similarity for CosineSimilarity {
    fn similarity(&self, a: &[String], b: &[String]) -> f64 {
        let tf_a = term_frequencies(a);
        let tf_b = term_frequencies(b);
        if tf_a.is_empty() || tf_b.is_empty() {
            return 0.0;
        }

        let dot: f64 = tf_a
            .iter()
            .filter_map(|(token, &fa)| tf_b.get(token).map(|&fb| fa * fb))
            .sum();
        if dot == 0.0 {
            return 0.0;
        }

        let norm_a: f64 = tf_a.values().map(|v| v * v).sum::<f64>().sqrt();
        let norm_b: f64 = tf_b.values().map(|v| v * v).sum::<f64>().sqrt();
        dot / (norm_a * norm_b)
    }
}

/// Normalized token-overlap similarity from the TextRank literature:
/// `|shared tokens| / (ln|a| + ln|b|)` over distinct tokens.
///
/// Sentences with fewer than two distinct tokens contribute zero
/// similarity, which guards the logarithms against zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRankSimilarity;

impl Similarity for TextRankSimilarity {
    fn similarity(&self, a: &[String], b: &[String]) -> f64 {
        let set_a: rustc_hash::FxHashSet<&str> = a.iter().map(String::as_str).collect();
        let set_b: rustc_hash::FxHashSet<&str> = b.iter().map(String::as_str).collect();
        if set_a.len() < 2 || set_b.len() < 2 {
            return 0.0;
        }

        let common = set_a.intersection(&set_b).count();
        common as f64 / ((set_a.len() as f64).ln() + (set_b.len() as f64).ln())
    }
}

fn term_frequencies(tokens: &[String]) -> FxHashMap<&str, f64> {
    let mut tf = FxHashMap::default();
    for token in tokens {
        *tf.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    tf
}
