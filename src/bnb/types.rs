//! Search tree nodes and frontier ordering.

use std::cmp::Ordering;

/// One partial tour in the search tree.
///
/// Nodes are immutable once created: extending a path always allocates a
/// child node, so a node popped from the frontier can be expanded or
/// discarded without touching its siblings.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    /// Vertices visited so far, starting at the tour start.
    pub path: Vec<usize>,
    /// Accumulated cost of `path`.
    pub cost: f64,
    /// Lower bound on any completion of `path`.
    pub bound: f64,
    /// Vertices not yet on `path`, in ascending index order.
    pub remaining: Vec<usize>,
}

/// Frontier entry ordered by bound, ascending.
///
/// `BinaryHeap` is a max-heap, so the comparison is inverted here: the
/// "greatest" entry is the one with the smallest bound. Ordering uses
/// `f64::total_cmp`; nodes with equal bounds compare equal and pop in
/// whatever order the heap yields.
#[derive(Debug)]
pub(crate) struct MinBound(pub SearchNode);

impl PartialEq for MinBound {
    fn eq(&self, other: &Self) -> bool {
        self.0.bound.total_cmp(&other.0.bound) == Ordering::Equal
    }
}

impl Eq for MinBound {}

impl PartialOrd for MinBound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinBound {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.bound.total_cmp(&self.0.bound)
    }
}
