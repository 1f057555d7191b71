//! Traveling salesman solver core.
//!
//! Provides three interchangeable solution strategies over a shared dense
//! distance-matrix representation:
//!
//! - **Exact (permutation search)**: Enumerates every Hamiltonian cycle
//!   from a fixed start vertex and returns the global optimum. `O((n-1)!)`,
//!   intended for small instances.
//! - **Branch-and-Bound**: Best-first search over partial tours with
//!   lower-bound pruning. Same optimum as the exact solver, typically far
//!   fewer nodes explored.
//! - **Heuristic (greedy + 2-opt)**: Nearest-neighbor construction followed
//!   by first-improvement segment reversal. Fast, deterministic, locally
//!   optimal only.
//!
//! # Architecture
//!
//! Every solver is a pure function of its inputs: the caller supplies a
//! weighted edge list (or a prebuilt [`matrix::DistanceMatrix`]), and the
//! solver returns a result struct carrying the tour, its cost, an explicit
//! [`tour::SolveStatus`], and search statistics. Missing connectivity is
//! represented as infinite cost and propagates harmlessly through sums;
//! instances without a finite Hamiltonian cycle come back `Infeasible`.
//! Nothing is shared across invocations, so independent calls are safe to
//! run from separate threads.

pub mod bnb;
pub mod exact;
pub mod heuristic;
pub mod matrix;
pub mod tour;
