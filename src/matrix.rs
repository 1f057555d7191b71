//! Dense distance matrix construction from weighted edge lists.
//!
//! All solvers in this crate work against a [`DistanceMatrix`]: a symmetric
//! `n × n` cost table with a zero diagonal and `f64::INFINITY` for vertex
//! pairs that no edge connects. The matrix is built once per solver
//! invocation and never mutated afterwards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::hash::Hash;

/// An undirected weighted edge `(u, v, weight)`.
///
/// Weights are expected to be non-negative. The edge list may contain
/// duplicates; the last occurrence wins.
pub type Edge = (usize, usize, f64);

/// Symmetric dense cost matrix in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix from an edge list over integer vertex ids.
    ///
    /// The vertex set is `[0, n)` with `n = 1 + max vertex id`, so ids never
    /// named by an edge still occupy a row (with all-infinite costs). An
    /// empty edge list yields an empty matrix. Self-loops are accepted but
    /// cannot dirty the diagonal: it is forced to zero after all edge
    /// writes.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let dim = edges
            .iter()
            .map(|&(u, v, _)| u.max(v) + 1)
            .max()
            .unwrap_or(0);

        let mut data = vec![f64::INFINITY; dim * dim];
        for &(u, v, w) in edges {
            data[u * dim + v] = w;
            data[v * dim + u] = w;
        }
        for i in 0..dim {
            data[i * dim + i] = 0.0;
        }

        Self { dim, data }
    }

    /// Builds the matrix from edges over arbitrary vertex labels.
    ///
    /// Labels are mapped to indices in `[0, n)` in first-seen order; the
    /// returned table translates an index back to its label. The mapping is
    /// created once here and never changes.
    pub fn from_labeled_edges<L>(edges: &[(L, L, f64)]) -> (Self, Vec<L>)
    where
        L: Eq + Hash + Clone,
    {
        let mut index: HashMap<L, usize> = HashMap::new();
        let mut labels: Vec<L> = Vec::new();
        let mut resolve = |label: &L, labels: &mut Vec<L>| -> usize {
            *index.entry(label.clone()).or_insert_with(|| {
                labels.push(label.clone());
                labels.len() - 1
            })
        };

        let mut indexed = Vec::with_capacity(edges.len());
        for (u, v, w) in edges {
            let i = resolve(u, &mut labels);
            let j = resolve(v, &mut labels);
            indexed.push((i, j, *w));
        }

        let dim = labels.len();
        let mut data = vec![f64::INFINITY; dim * dim];
        for &(i, j, w) in &indexed {
            data[i * dim + j] = w;
            data[j * dim + i] = w;
        }
        for i in 0..dim {
            data[i * dim + i] = 0.0;
        }

        (Self { dim, data }, labels)
    }

    /// Generates a complete graph with uniform random weights in
    /// `[1.0, max_weight]`, symmetric with a zero diagonal.
    ///
    /// Deterministic for a fixed seed; intended for benchmarks and
    /// randomized tests.
    pub fn random_complete(n: usize, max_weight: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let w = rng.random_range(1.0..=max_weight);
                data[i * n + j] = w;
                data[j * n + i] = w;
            }
        }
        Self { dim: n, data }
    }

    /// Number of vertices.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Whether the matrix has no vertices.
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Cost of traveling from `i` to `j`. Infinite when no edge connects
    /// the pair.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.dim + j]
    }
}
