//! Approximate solvers: nearest-neighbor construction and 2-opt
//! local search.
//!
//! For sizes where exhaustive or bounded search is infeasible, a greedy
//! tour is built in `O(n²)` and then improved by first-improvement segment
//! reversal until no improving move remains. The combination is fast and
//! deterministic but only locally optimal — it carries no guarantee of
//! matching [`crate::exact`] or [`crate::bnb`].
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems",
//!   *Operations Research* 6(6), 791-812
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//!   Heuristics for the Traveling Salesman Problem", *SIAM J. Comput.* 6(3)

mod greedy;
mod two_opt;

pub use greedy::{GreedyResult, GreedyRunner};
pub use two_opt::{TwoOptConfig, TwoOptResult, TwoOptRunner};
