//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR stores edges contiguously, making iteration over neighbors very
//! fast. This is ideal for power iteration, which repeatedly sweeps over
//! all edges.

use rustc_hash::FxHashMap;

/// A symmetric weighted graph in Compressed Sparse Row format.
///
/// Node indices run over `[0, num_nodes)`; what an index labels (a
/// vocabulary entry or a sentence position) is the caller's concern.
/// Absent edges are truly absent, not zero-weight: they do not contribute
/// to the out-weight used for transition normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Build a CSR graph from an accumulated edge map.
    ///
    /// Each key `(i, j)` with `i <= j` describes one undirected edge; it is
    /// materialized in both row i and row j (once for a self-loop). Rows
    /// are sorted by target so the layout is identical regardless of hash
    /// iteration order.
    pub fn from_edges(num_nodes: usize, edges: &FxHashMap<(u32, u32), f64>) -> Self {
        let mut adjacency: Vec<Vec<(u32, f64)>> = vec![Vec::new(); num_nodes];
        for (&(i, j), &weight) in edges {
            adjacency[i as usize].push((j, weight));
            if i != j {
                adjacency[j as usize].push((i, weight));
            }
        }
        for row in &mut adjacency {
            row.sort_unstable_by_key(|&(target, _)| target);
        }

        let num_edges: usize = adjacency.iter().map(Vec::len).sum();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::with_capacity(num_edges);
        let mut weights = Vec::with_capacity(num_edges);
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);
        for row in &adjacency {
            total_weight.push(row.iter().map(|&(_, w)| w).sum());
            for &(target, weight) in row {
                col_idx.push(target);
                weights.push(weight);
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Get the weight of an edge, or `None` if absent
    pub fn edge_weight(&self, from: u32, to: u32) -> Option<f64> {
        let start = self.row_ptr[from as usize];
        let end = self.row_ptr[from as usize + 1];
        let row = &self.col_idx[start..end];
        row.binary_search(&to)
            .ok()
            .map(|offset| self.weights[start + offset])
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of stored edge entries (each undirected edge
    /// counts twice, self-loops once)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find dangling nodes (nodes with zero outgoing weight)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.total_weight[n as usize] == 0.0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_map(edges: &[((u32, u32), f64)]) -> FxHashMap<(u32, u32), f64> {
        edges.iter().copied().collect()
    }

    #[test]
    fn test_from_edges_symmetric() {
        let graph = CsrGraph::from_edges(3, &edge_map(&[((0, 1), 2.0), ((1, 2), 1.0)]));

        assert_eq!(graph.num_nodes, 3);
        assert_eq!(graph.edge_weight(0, 1), Some(2.0));
        assert_eq!(graph.edge_weight(1, 0), Some(2.0));
        assert_eq!(graph.edge_weight(2, 1), Some(1.0));
        assert_eq!(graph.edge_weight(0, 2), None);
    }

    #[test]
    fn test_neighbor_iteration_sorted() {
        let graph = CsrGraph::from_edges(
            4,
            &edge_map(&[((1, 3), 1.0), ((0, 1), 1.0), ((1, 2), 1.0)]),
        );

        let neighbors: Vec<u32> = graph.neighbors(1).map(|(n, _)| n).collect();
        assert_eq!(neighbors, vec![0, 2, 3]);
    }

    #[test]
    fn test_total_weight() {
        let graph = CsrGraph::from_edges(3, &edge_map(&[((0, 1), 1.5), ((0, 2), 2.5)]));
        assert!((graph.node_total_weight(0) - 4.0).abs() < 1e-10);
        assert!((graph.node_total_weight(1) - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_self_loop_stored_once() {
        let graph = CsrGraph::from_edges(2, &edge_map(&[((0, 0), 3.0), ((0, 1), 1.0)]));

        assert_eq!(graph.edge_weight(0, 0), Some(3.0));
        let row: Vec<_> = graph.neighbors(0).collect();
        assert_eq!(row.len(), 2);
        assert!((graph.node_total_weight(0) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_dangling_nodes() {
        // Node 2 has no edges at all.
        let graph = CsrGraph::from_edges(3, &edge_map(&[((0, 1), 1.0)]));
        assert_eq!(graph.dangling_nodes(), vec![2]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = CsrGraph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph, CsrGraph::from_edges(0, &FxHashMap::default()));
    }

    #[test]
    fn test_deterministic_layout() {
        let edges = edge_map(&[((0, 1), 1.0), ((0, 2), 2.0), ((1, 2), 3.0), ((2, 3), 4.0)]);
        let a = CsrGraph::from_edges(4, &edges);
        let b = CsrGraph::from_edges(4, &edges);
        assert_eq!(a, b);
    }
}
