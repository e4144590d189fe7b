//! Solve graph command - shortest paths over a weighted undirected graph.

use std::str::FromStr;

use seeker::domains::graph::WeightedGraph;
use seeker::search::{run, NullHeuristic, Strategy};
use structopt::StructOpt;

use super::util::print_metrics;
use super::Command;

/// `id,x,y` node declaration.
#[derive(Debug, Clone)]
pub struct NodeSpec {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

impl FromStr for NodeSpec {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err("expected a node as `id,x,y`");
        }
        let x = parts[1].trim().parse().map_err(|_| "invalid x coordinate")?;
        let y = parts[2].trim().parse().map_err(|_| "invalid y coordinate")?;
        Ok(NodeSpec {
            id: parts[0].trim().to_string(),
            x,
            y,
        })
    }
}

/// `from,to,weight` edge declaration.
#[derive(Debug, Clone)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl FromStr for EdgeSpec {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err("expected an edge as `from,to,weight`");
        }
        let weight = parts[2].trim().parse().map_err(|_| "invalid edge weight")?;
        Ok(EdgeSpec {
            from: parts[0].trim().to_string(),
            to: parts[1].trim().to_string(),
            weight,
        })
    }
}

#[derive(StructOpt)]
pub struct SolveGraphArgs {
    #[structopt(long = "node")]
    pub nodes: Vec<NodeSpec>,
    #[structopt(long = "edge")]
    pub edges: Vec<EdgeSpec>,
    #[structopt(long)]
    pub start: String,
    #[structopt(long)]
    pub goal: String,
    #[structopt(short, long, default_value = "ucs")]
    pub strategy: Strategy,
    #[structopt(long)]
    pub straight_line: bool,
}

impl Command for SolveGraphArgs {
    fn execute(self) {
        let mut graph = WeightedGraph::new();
        for node in self.nodes.iter() {
            if let Err(err) = graph.add_node(&node.id, node.x, node.y) {
                eprintln!("invalid node: {}", err);
                return;
            }
        }
        for edge in self.edges.iter() {
            if let Err(err) = graph.add_edge(&edge.from, &edge.to, edge.weight) {
                eprintln!("invalid edge: {}", err);
                return;
            }
        }

        let problem = match graph.problem(&self.start, &self.goal) {
            Ok(problem) => problem,
            Err(err) => {
                eprintln!("invalid query: {}", err);
                return;
            }
        };

        let report = if self.straight_line {
            run(self.strategy, &problem, problem.straight_line())
        } else {
            run(self.strategy, &problem, NullHeuristic)
        };

        if !report.success {
            println!("no path found");
            print_metrics(&report.metrics);
            return;
        }

        println!("path: {}", report.path.join(" -> "));
        print_metrics(&report.metrics);
    }
}
