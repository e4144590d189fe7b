//! Passive counters consumed by external reporting.

use std::fmt;
use std::time::Duration;

/// Read-only snapshot of a completed run. No search behavior depends on
/// these counters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchMetrics {
    /// States expanded (moved to the closed set and had successors
    /// generated). The start node does not count when it is already a goal.
    pub nodes_expanded: usize,
    /// Number of states on the returned path, zero when no path was found.
    pub path_length: usize,
    /// Cumulative cost of the returned path.
    pub path_cost: f64,
    /// Wall-clock time of the run, stamped by the run-to-completion wrapper.
    /// Zero when the caller drives `step()` directly.
    pub elapsed: Duration,
}

impl fmt::Display for SearchMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded: {}, path length: {}, path cost: {:.2}, elapsed: {:?}",
            self.nodes_expanded, self.path_length, self.path_cost, self.elapsed
        )
    }
}
