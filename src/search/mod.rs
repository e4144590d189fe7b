//! Generic state-space search: five exploration strategies over one
//! frontier/closed-set protocol, with path reconstruction and passive
//! metrics.

use std::fmt;
use std::str::FromStr;

mod engine;
mod frontier;
mod metrics;
mod node;
mod traits;


pub use engine::{run, SearchContext, SearchReport, StepResult};
pub use metrics::SearchMetrics;
pub use traits::{Heuristic, NullHeuristic, SearchProblem, SuccessorList};

/// The five exploration orderings.
///
/// Optimality guarantees: breadth-first is shortest in edge count on
/// uniform-cost domains; uniform-cost is optimal w.r.t. cost; A* is optimal
/// iff its heuristic is admissible; depth-first and greedy best-first
/// guarantee nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    GreedyBestFirst,
    AStar,
}

pub const ALL_STRATEGIES: [Strategy; 5] = [
    Strategy::BreadthFirst,
    Strategy::DepthFirst,
    Strategy::UniformCost,
    Strategy::GreedyBestFirst,
    Strategy::AStar,
];

impl Strategy {
    /// True for the strategies that order by cumulative cost and apply the
    /// update-on-improvement rule.
    pub(crate) fn uses_cost(self) -> bool {
        matches!(self, Strategy::UniformCost | Strategy::AStar)
    }

    /// True for the informed strategies.
    pub(crate) fn uses_heuristic(self) -> bool {
        matches!(self, Strategy::GreedyBestFirst | Strategy::AStar)
    }

    /// Frontier ordering key; ignored by the FIFO and LIFO frontiers.
    pub(crate) fn priority(self, g: f64, h: f64) -> f64 {
        match self {
            Strategy::UniformCost => g,
            Strategy::GreedyBestFirst => h,
            Strategy::AStar => g + h,
            Strategy::BreadthFirst | Strategy::DepthFirst => 0.0,
        }
    }
}

impl FromStr for Strategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Strategy::BreadthFirst),
            "dfs" => Ok(Strategy::DepthFirst),
            "ucs" => Ok(Strategy::UniformCost),
            "greedy" => Ok(Strategy::GreedyBestFirst),
            "a-star" => Ok(Strategy::AStar),
            _ => Err("invalid strategy; options are: bfs, dfs, ucs, greedy, a-star"),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::DepthFirst => "depth-first",
            Strategy::UniformCost => "uniform-cost",
            Strategy::GreedyBestFirst => "greedy best-first",
            Strategy::AStar => "a-star",
        };
        write!(f, "{}", name)
    }
}
