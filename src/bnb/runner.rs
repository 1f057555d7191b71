//! Branch-and-bound execution loop and lower bound.

use super::types::{MinBound, SearchNode};
use crate::matrix::{DistanceMatrix, Edge};
use crate::tour::SolveStatus;
use std::collections::BinaryHeap;

/// Result of a branch-and-bound run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbResult {
    /// Outcome classification.
    pub status: SolveStatus,
    /// The optimal tour, starting at vertex 0. Empty for `n ≤ 1` and for
    /// infeasible instances.
    pub tour: Vec<usize>,
    /// Cost of the optimal tour.
    pub cost: f64,
    /// Internal nodes whose children were generated.
    pub nodes_expanded: usize,
    /// Nodes discarded because their bound could not beat the incumbent.
    pub nodes_pruned: usize,
    /// Largest frontier size observed.
    pub max_frontier_len: usize,
}

/// Executes best-first branch-and-bound.
pub struct BnbRunner;

impl BnbRunner {
    /// Solves the instance described by an edge list.
    ///
    /// Builds a fresh [`DistanceMatrix`] and delegates to [`Self::run_matrix`].
    pub fn run(edges: &[Edge]) -> BnbResult {
        Self::run_matrix(&DistanceMatrix::from_edges(edges))
    }

    /// Solves over an already-built matrix.
    pub fn run_matrix(matrix: &DistanceMatrix) -> BnbResult {
        let n = matrix.dim();
        if n <= 1 {
            return BnbResult {
                status: SolveStatus::Optimal,
                tour: Vec::new(),
                cost: 0.0,
                nodes_expanded: 0,
                nodes_pruned: 0,
                max_frontier_len: 0,
            };
        }

        let root_remaining: Vec<usize> = (1..n).collect();
        let root = SearchNode {
            bound: lower_bound(matrix, &[0], 0.0, &root_remaining),
            path: vec![0],
            cost: 0.0,
            remaining: root_remaining,
        };

        let mut frontier = BinaryHeap::new();
        frontier.push(MinBound(root));

        let mut best: Vec<usize> = Vec::new();
        let mut best_cost = f64::INFINITY;
        let mut nodes_expanded = 0usize;
        let mut nodes_pruned = 0usize;
        let mut max_frontier_len = 1usize;

        while let Some(MinBound(node)) = frontier.pop() {
            if node.path.len() == n {
                // Complete path: close the cycle back to the start.
                let total = node.cost + matrix.get(node.path[n - 1], 0);
                if total < best_cost {
                    best_cost = total;
                    best = node.path;
                }
                continue;
            }

            if node.bound >= best_cost {
                nodes_pruned += 1;
                continue;
            }

            nodes_expanded += 1;
            let last = node.path[node.path.len() - 1];
            for &next in &node.remaining {
                let mut path = node.path.clone();
                path.push(next);
                let cost = node.cost + matrix.get(last, next);
                let remaining: Vec<usize> = node
                    .remaining
                    .iter()
                    .copied()
                    .filter(|&v| v != next)
                    .collect();
                let bound = lower_bound(matrix, &path, cost, &remaining);
                frontier.push(MinBound(SearchNode {
                    path,
                    cost,
                    bound,
                    remaining,
                }));
            }
            max_frontier_len = max_frontier_len.max(frontier.len());
        }

        if best_cost.is_finite() {
            BnbResult {
                status: SolveStatus::Optimal,
                tour: best,
                cost: best_cost,
                nodes_expanded,
                nodes_pruned,
                max_frontier_len,
            }
        } else {
            BnbResult {
                status: SolveStatus::Infeasible,
                tour: Vec::new(),
                cost: f64::INFINITY,
                nodes_expanded,
                nodes_pruned,
                max_frontier_len,
            }
        }
    }
}

/// Lower bound on any completion of `path`.
///
/// Every completion is a walk from the path tail through all unvisited
/// vertices back to the start, so its edges touch exactly the open
/// endpoints: two per unvisited vertex, one each at the tail and the start
/// (both at the start while the path is still a single vertex). The bound
/// charges every open endpoint half the sum of its cheapest still-usable
/// incident edges — a 1-tree style relaxation that admits crossing edges
/// and therefore never exceeds the true completion cost; pruning against it
/// stays sound. Missing connectivity shows up as an infinite bound rather
/// than an error.
fn lower_bound(matrix: &DistanceMatrix, path: &[usize], cost: f64, remaining: &[usize]) -> f64 {
    let start = path[0];
    let tail = path[path.len() - 1];

    if remaining.is_empty() {
        // Only the closing edge is still open.
        return if path.len() > 1 {
            cost + matrix.get(tail, start)
        } else {
            cost
        };
    }

    let mut half_sum = 0.0;

    for &v in remaining {
        let mut mins = TwoSmallest::new();
        for &u in remaining {
            if u != v {
                mins.push(matrix.get(v, u));
            }
        }
        mins.push(matrix.get(v, tail));
        if start != tail {
            mins.push(matrix.get(v, start));
        }
        half_sum += mins.sum();
    }

    if start == tail {
        // Single-vertex path: both cycle edges at the start are open.
        let mut mins = TwoSmallest::new();
        for &u in remaining {
            mins.push(matrix.get(start, u));
        }
        half_sum += mins.sum();
    } else {
        let mut tail_min = matrix.get(tail, start);
        let mut start_min = matrix.get(start, tail);
        for &u in remaining {
            tail_min = tail_min.min(matrix.get(tail, u));
            start_min = start_min.min(matrix.get(start, u));
        }
        half_sum += tail_min + start_min;
    }

    cost + 0.5 * half_sum
}

/// Running minimum and second minimum of the values pushed so far.
struct TwoSmallest {
    min1: f64,
    min2: f64,
    count: usize,
}

impl TwoSmallest {
    fn new() -> Self {
        Self {
            min1: f64::INFINITY,
            min2: f64::INFINITY,
            count: 0,
        }
    }

    fn push(&mut self, d: f64) {
        self.count += 1;
        if d < self.min1 {
            self.min2 = self.min1;
            self.min1 = d;
        } else if d < self.min2 {
            self.min2 = d;
        }
    }

    /// Sum of the two smallest values, or of everything pushed when fewer
    /// than two values arrived.
    fn sum(&self) -> f64 {
        match self.count {
            0 => 0.0,
            1 => self.min1,
            _ => self.min1 + self.min2,
        }
    }
}
