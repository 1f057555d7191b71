//! Best-first branch-and-bound search.
//!
//! Returns the same optimum as [`crate::exact`] while exploring far fewer
//! tours on typical instances. Partial tours are kept in a priority frontier
//! ordered by a lower-bound estimate; a subtree is discarded as soon as its
//! bound cannot beat the best complete tour found so far.
//!
//! # Algorithm
//!
//! 1. Seed the frontier with the single-vertex path `[0]`
//! 2. Pop the node with the smallest bound
//! 3. If its path spans all vertices, close the cycle and record a strict
//!    improvement over the incumbent
//! 4. Otherwise discard it when `bound >= incumbent`, or expand it by every
//!    unvisited vertex, each child carrying a freshly computed bound
//! 5. Stop when the frontier is empty
//!
//! The bound never exceeds the cost of the best completion of a partial
//! tour, so pruning is sound: the search always returns the same optimal
//! cost as exhaustive enumeration. Worst case remains exponential.
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//!   Salesman Problem", *Operations Research* 11(6), 972-989
//! - Lawler & Wood (1966), "Branch-and-Bound Methods: A Survey",
//!   *Operations Research* 14(4), 699-719
//! - Held & Karp (1970), "The Traveling-Salesman Problem and Minimum
//!   Spanning Trees", *Operations Research* 18(6), 1138-1162

mod runner;
mod types;

pub use runner::{BnbResult, BnbRunner};
