//! Weighted undirected graph with positioned nodes.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::search::{Heuristic, SearchProblem, SuccessorList};

#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("node `{0}` is already present")]
    DuplicateNode(String),
    #[error("edge endpoint `{0}` is not in the graph")]
    UnknownNode(String),
    #[error("edge weight {0} must be nonnegative")]
    NegativeWeight(f64),
    #[error("endpoint `{0}` is not in the graph")]
    MissingEndpoint(String),
}

/// Nodes carry (x, y) coordinates so the straight-line heuristic can
/// estimate remaining distance. Edges are undirected and weighted.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    positions: FxHashMap<String, (f64, f64)>,
    /// Adjacency in insertion order, for deterministic successor ordering.
    adjacency: FxHashMap<String, Vec<(String, f64)>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: &str, x: f64, y: f64) -> Result<(), GraphError> {
        if self.positions.contains_key(id) {
            return Err(GraphError::DuplicateNode(id.to_string()));
        }
        self.positions.insert(id.to_string(), (x, y));
        self.adjacency.insert(id.to_string(), Vec::new());
        Ok(())
    }

    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<(), GraphError> {
        if weight < 0.0 {
            return Err(GraphError::NegativeWeight(weight));
        }
        for id in [from, to] {
            if !self.positions.contains_key(id) {
                return Err(GraphError::UnknownNode(id.to_string()));
            }
        }
        self.adjacency
            .get_mut(from)
            .unwrap()
            .push((to.to_string(), weight));
        self.adjacency
            .get_mut(to)
            .unwrap()
            .push((from.to_string(), weight));
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Binds the graph to a start/goal pair, validating both endpoints.
    pub fn problem(&self, start: &str, goal: &str) -> Result<GraphProblem<'_>, GraphError> {
        for id in [start, goal] {
            if !self.contains(id) {
                return Err(GraphError::MissingEndpoint(id.to_string()));
            }
        }
        Ok(GraphProblem {
            graph: self,
            start: start.to_string(),
            goal: goal.to_string(),
        })
    }
}

/// A validated shortest-path query over a [`WeightedGraph`].
#[derive(Debug, Clone)]
pub struct GraphProblem<'a> {
    graph: &'a WeightedGraph,
    start: String,
    goal: String,
}

impl GraphProblem<'_> {
    /// Straight-line distance to the goal's coordinates. Admissible when
    /// edge weights are at least the distance between their endpoints.
    pub fn straight_line(&self) -> StraightLine<'_> {
        StraightLine {
            graph: self.graph,
            goal: self.graph.positions[&self.goal],
        }
    }
}

impl SearchProblem for GraphProblem<'_> {
    type State = String;
    type Action = String;

    fn start_state(&self) -> String {
        self.start.clone()
    }

    fn is_goal(&self, state: &String) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &String) -> SuccessorList<String, String> {
        self.graph.adjacency[state]
            .iter()
            .map(|(to, weight)| (to.clone(), to.clone(), *weight))
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StraightLine<'a> {
    graph: &'a WeightedGraph,
    goal: (f64, f64),
}

impl Heuristic<String> for StraightLine<'_> {
    fn estimate(&self, state: &String) -> f64 {
        let (x, y) = self.graph.positions[state];
        let (gx, gy) = self.goal;
        ((x - gx).powi(2) + (y - gy).powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        graph.add_node("a", 0.0, 0.0).unwrap();
        graph.add_node("b", 0.0, 5.0).unwrap();
        graph.add_node("c", 1.0, 0.0).unwrap();
        graph.add_edge("a", "b", 2.0).unwrap();
        graph.add_edge("b", "c", 3.0).unwrap();
        graph.add_edge("a", "c", 10.0).unwrap();
        graph
    }

    #[test]
    fn rejects_duplicate_nodes() {
        let mut graph = WeightedGraph::new();
        graph.add_node("a", 0.0, 0.0).unwrap();
        assert_eq!(
            graph.add_node("a", 1.0, 1.0).unwrap_err(),
            GraphError::DuplicateNode("a".to_string())
        );
    }

    #[test]
    fn rejects_bad_edges() {
        let mut graph = WeightedGraph::new();
        graph.add_node("a", 0.0, 0.0).unwrap();
        assert_eq!(
            graph.add_edge("a", "z", 1.0).unwrap_err(),
            GraphError::UnknownNode("z".to_string())
        );
        assert_eq!(
            graph.add_edge("a", "a", -1.0).unwrap_err(),
            GraphError::NegativeWeight(-1.0)
        );
    }

    #[test]
    fn rejects_missing_endpoints() {
        let graph = triangle();
        assert_eq!(
            graph.problem("a", "z").unwrap_err(),
            GraphError::MissingEndpoint("z".to_string())
        );
    }

    #[test]
    fn edges_are_undirected() {
        let graph = triangle();
        let problem = graph.problem("c", "a").unwrap();
        let successors = problem.successors(&"c".to_string());
        let mut targets: Vec<&str> = successors.iter().map(|(to, _, _)| to.as_str()).collect();
        targets.sort_unstable();
        assert_eq!(targets, vec!["a", "b"]);
    }

    #[test]
    fn straight_line_measures_to_goal() {
        let graph = triangle();
        let problem = graph.problem("a", "c").unwrap();
        let heuristic = problem.straight_line();
        assert!((heuristic.estimate(&"a".to_string()) - 1.0).abs() < 1e-9);
        assert_eq!(heuristic.estimate(&"c".to_string()), 0.0);
    }
}
