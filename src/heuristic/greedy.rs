//! Nearest-neighbor tour construction.

use crate::matrix::DistanceMatrix;
use crate::tour::SolveStatus;

/// Result of a greedy construction run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyResult {
    /// `Feasible` when the closed tour has finite cost, `Infeasible`
    /// otherwise. The constructed permutation is returned either way.
    pub status: SolveStatus,
    /// The constructed tour, beginning at the requested start vertex.
    pub tour: Vec<usize>,
    /// Total cost of the closed tour.
    pub cost: f64,
}

/// Builds a tour by always moving to the nearest unvisited vertex.
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs nearest-neighbor construction from `start`.
    ///
    /// Candidates are scanned in ascending index order with strict `<`
    /// comparison, so ties resolve to the smallest vertex index and the
    /// result is fully deterministic for a fixed matrix and start.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a vertex of a non-empty matrix.
    pub fn run(matrix: &DistanceMatrix, start: usize) -> GreedyResult {
        let n = matrix.dim();
        if n == 0 {
            return GreedyResult {
                status: SolveStatus::Feasible,
                tour: Vec::new(),
                cost: 0.0,
            };
        }
        assert!(start < n, "start vertex {start} out of range for {n} vertices");

        let mut visited = vec![false; n];
        visited[start] = true;
        let mut tour = Vec::with_capacity(n);
        tour.push(start);

        let mut total = 0.0;
        let mut current = start;

        for _ in 1..n {
            // First unvisited vertex is taken as the running choice, then
            // replaced only on strict improvement. An all-infinite row thus
            // falls back to the smallest unvisited index and the walk still
            // completes.
            let mut chosen: Option<(usize, f64)> = None;
            for v in 0..n {
                if visited[v] {
                    continue;
                }
                let d = matrix.get(current, v);
                match chosen {
                    Some((_, best)) if d >= best => {}
                    _ => chosen = Some((v, d)),
                }
            }

            let (next, step) = match chosen {
                Some(pair) => pair,
                None => break, // unreachable: the loop leaves at least one vertex unvisited
            };

            visited[next] = true;
            tour.push(next);
            total += step;
            current = next;
        }

        total += matrix.get(current, start);

        let status = if total.is_finite() {
            SolveStatus::Feasible
        } else {
            SolveStatus::Infeasible
        };
        GreedyResult {
            status,
            tour,
            cost: total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::{is_tour, tour_cost};
    use proptest::prelude::*;

    #[test]
    fn test_empty_matrix() {
        let m = DistanceMatrix::from_edges(&[]);
        let result = GreedyRunner::run(&m, 0);
        assert_eq!(result.status, SolveStatus::Feasible);
        assert!(result.tour.is_empty());
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_single_vertex() {
        let m = DistanceMatrix::from_edges(&[(0, 0, 4.0)]);
        let result = GreedyRunner::run(&m, 0);
        assert_eq!(result.tour, vec![0]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_one_edge() {
        let m = DistanceMatrix::from_edges(&[(0, 1, 2.5)]);
        let result = GreedyRunner::run(&m, 0);
        assert_eq!(result.tour, vec![0, 1]);
        assert!((result.cost - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_triangle_follows_nearest() {
        let m = DistanceMatrix::from_edges(&[(0, 1, 2.5), (0, 2, 0.5), (1, 2, 1.0)]);
        let result = GreedyRunner::run(&m, 0);
        // 0 → 2 (0.5) → 1 (1.0) → back to 0 (2.5)
        assert_eq!(result.tour, vec![0, 2, 1]);
        assert!((result.cost - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_start_vertex_respected() {
        let m = DistanceMatrix::from_edges(&[(0, 1, 2.5), (0, 2, 0.5), (1, 2, 1.0)]);
        let result = GreedyRunner::run(&m, 2);
        assert_eq!(result.tour[0], 2);
        // 2 → 0 (0.5) → 1 (2.5) → back to 2 (1.0)
        assert_eq!(result.tour, vec![2, 0, 1]);
        assert!((result.cost - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_tie_breaks_to_smallest_index() {
        let m = DistanceMatrix::from_edges(&[
            (0, 1, 1.0),
            (0, 2, 1.0),
            (0, 3, 1.0),
            (1, 2, 1.0),
            (1, 3, 1.0),
            (2, 3, 1.0),
        ]);
        let result = GreedyRunner::run(&m, 0);
        assert_eq!(result.tour, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_disconnected_graph_reports_infeasible() {
        let m = DistanceMatrix::from_edges(&[(0, 1, 1.0), (2, 3, 1.0)]);
        let result = GreedyRunner::run(&m, 0);
        assert_eq!(result.status, SolveStatus::Infeasible);
        assert!(result.cost.is_infinite());
        // The walk still visits every vertex exactly once.
        assert!(is_tour(&result.tour, 4));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_start_out_of_range_panics() {
        let m = DistanceMatrix::from_edges(&[(0, 1, 1.0)]);
        GreedyRunner::run(&m, 5);
    }

    proptest! {
        #[test]
        fn prop_greedy_tour_is_valid(n in 1usize..12, seed in any::<u64>()) {
            let m = DistanceMatrix::random_complete(n, 100.0, seed);
            let start = (seed % n as u64) as usize;
            let result = GreedyRunner::run(&m, start);

            prop_assert_eq!(result.status, SolveStatus::Feasible);
            prop_assert!(is_tour(&result.tour, n));
            prop_assert_eq!(result.tour[0], start);
            prop_assert!((result.cost - tour_cost(&m, &result.tour)).abs() < 1e-9);
        }
    }
}
