//! Core traits for generic state-space search.

use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

/// Successor list returned by domain adapters. Each entry is
/// `(action, next_state, step_cost)`.
pub type SuccessorList<A, S> = SmallVec<[(A, S, f64); 8]>;

/// A single-query search problem over an abstract state space.
///
/// States must compare equal iff they are semantically identical, since the
/// closed set deduplicates on value equality. Successor generation must be
/// pure: it may not mutate shared data that other states alias.
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    /// Returns the initial state of the search.
    fn start_state(&self) -> Self::State;

    /// Returns true if the given state satisfies the goal predicate.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Generates all successors of the given state. Step costs must be
    /// nonnegative; unweighted domains use a uniform cost of 1.
    fn successors(&self, state: &Self::State) -> SuccessorList<Self::Action, Self::State>;
}

/// Estimates the remaining cost from a state to the goal. The goal is
/// captured at construction.
///
/// A* is optimal only if the estimate is admissible (never overestimates the
/// true remaining cost), and avoids re-expansion churn only if it is also
/// consistent. The engine does not verify either property.
pub trait Heuristic<S> {
    fn estimate(&self, state: &S) -> f64;
}

/// The zero heuristic. Degrades greedy best-first and A* to uninformed
/// orderings (A* with this heuristic behaves like uniform-cost search).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<S> Heuristic<S> for NullHeuristic {
    #[inline]
    fn estimate(&self, _state: &S) -> f64 {
        0.0
    }
}
