//! Brute-force enumeration loop.

use crate::matrix::{DistanceMatrix, Edge};
use crate::tour::SolveStatus;

/// Result of an exhaustive search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactResult {
    /// Outcome classification.
    pub status: SolveStatus,
    /// The optimal tour, starting at vertex 0. Empty for `n ≤ 1` and for
    /// infeasible instances.
    pub tour: Vec<usize>,
    /// Cost of the optimal tour (infinite when infeasible, 0 when
    /// degenerate).
    pub cost: f64,
    /// Number of candidate cycles evaluated: `(n-1)!` for `n ≥ 2`.
    pub tours_evaluated: usize,
}

/// Executes exhaustive permutation search.
pub struct ExactRunner;

impl ExactRunner {
    /// Solves the instance described by an edge list.
    ///
    /// Builds a fresh [`DistanceMatrix`] and delegates to [`Self::run_matrix`].
    pub fn run(edges: &[Edge]) -> ExactResult {
        Self::run_matrix(&DistanceMatrix::from_edges(edges))
    }

    /// Solves over an already-built matrix.
    pub fn run_matrix(matrix: &DistanceMatrix) -> ExactResult {
        let n = matrix.dim();
        if n <= 1 {
            return ExactResult {
                status: SolveStatus::Optimal,
                tour: Vec::new(),
                cost: 0.0,
                tours_evaluated: 0,
            };
        }

        // Permutations of 1..n in lexicographic order; vertex 0 is the
        // fixed start.
        let mut perm: Vec<usize> = (1..n).collect();
        let mut best: Vec<usize> = Vec::new();
        let mut best_cost = f64::INFINITY;
        let mut tours_evaluated = 0usize;

        loop {
            tours_evaluated += 1;
            let cost = cycle_cost(matrix, &perm);
            if cost < best_cost {
                best_cost = cost;
                best.clear();
                best.push(0);
                best.extend_from_slice(&perm);
            }
            if !next_permutation(&mut perm) {
                break;
            }
        }

        if best_cost.is_finite() {
            ExactResult {
                status: SolveStatus::Optimal,
                tour: best,
                cost: best_cost,
                tours_evaluated,
            }
        } else {
            ExactResult {
                status: SolveStatus::Infeasible,
                tour: Vec::new(),
                cost: f64::INFINITY,
                tours_evaluated,
            }
        }
    }
}

/// Cost of the cycle `0 → perm[0] → … → perm[last] → 0`.
///
/// Returns infinity as soon as a missing edge is touched; a candidate
/// crossing an absent pair can never be selected over a finite tour.
fn cycle_cost(matrix: &DistanceMatrix, perm: &[usize]) -> f64 {
    let mut total = matrix.get(0, perm[0]);
    if total.is_infinite() {
        return f64::INFINITY;
    }
    for w in perm.windows(2) {
        let d = matrix.get(w[0], w[1]);
        if d.is_infinite() {
            return f64::INFINITY;
        }
        total += d;
    }
    total + matrix.get(perm[perm.len() - 1], 0)
}

/// Advances `perm` to its lexicographic successor in place.
///
/// Returns `false` when `perm` is already the last permutation.
fn next_permutation(perm: &mut [usize]) -> bool {
    let len = perm.len();
    if len < 2 {
        return false;
    }
    let mut i = len - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = len - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}
