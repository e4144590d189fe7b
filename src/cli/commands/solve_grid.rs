//! Solve grid command - pathfinding across a 2-D occupancy grid.

use std::str::FromStr;

use seeker::domains::grid::{Cell, Connectivity, GridMap};
use seeker::search::{run, NullHeuristic, SearchReport, Strategy};
use structopt::StructOpt;

use super::util::print_metrics;
use super::Command;

#[derive(Debug, Clone, Copy)]
pub enum GridHeuristicChoice {
    Manhattan,
    Euclidean,
    None,
}

impl FromStr for GridHeuristicChoice {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manhattan" => Ok(GridHeuristicChoice::Manhattan),
            "euclidean" => Ok(GridHeuristicChoice::Euclidean),
            "none" => Ok(GridHeuristicChoice::None),
            _ => Err("invalid heuristic; options are: manhattan, euclidean, none"),
        }
    }
}

#[derive(StructOpt)]
pub struct SolveGridArgs {
    #[structopt(long, default_value = "5")]
    pub rows: usize,
    #[structopt(long, default_value = "5")]
    pub cols: usize,
    #[structopt(long, default_value = "0,0")]
    pub start: Cell,
    #[structopt(long)]
    pub goal: Cell,
    #[structopt(long = "obstacle")]
    pub obstacles: Vec<Cell>,
    #[structopt(long)]
    pub diagonal: bool,
    #[structopt(short, long, default_value = "a-star")]
    pub strategy: Strategy,
    #[structopt(long, default_value = "manhattan")]
    pub heuristic: GridHeuristicChoice,
}

impl Command for SolveGridArgs {
    fn execute(self) {
        let connectivity = if self.diagonal {
            Connectivity::Eight
        } else {
            Connectivity::Four
        };

        let mut map = match GridMap::new(self.rows, self.cols, connectivity) {
            Ok(map) => map,
            Err(err) => {
                eprintln!("invalid grid: {}", err);
                return;
            }
        };
        for &cell in self.obstacles.iter() {
            if let Err(err) = map.block(cell) {
                eprintln!("invalid obstacle: {}", err);
                return;
            }
        }

        let problem = match map.problem(self.start, self.goal) {
            Ok(problem) => problem,
            Err(err) => {
                eprintln!("invalid query: {}", err);
                return;
            }
        };

        let report = match self.heuristic {
            GridHeuristicChoice::Manhattan => run(self.strategy, &problem, problem.manhattan()),
            GridHeuristicChoice::Euclidean => run(self.strategy, &problem, problem.euclidean()),
            GridHeuristicChoice::None => run(self.strategy, &problem, NullHeuristic),
        };
        print_grid_report(&report);
    }
}

fn print_grid_report(report: &SearchReport<Cell, &'static str>) {
    if !report.success {
        println!("no path found");
        print_metrics(&report.metrics);
        return;
    }

    let cells: Vec<String> = report.path.iter().map(|cell| cell.to_string()).collect();
    println!("path: {}", cells.join(" -> "));
    println!("moves: {}", report.actions.join(", "));
    print_metrics(&report.metrics);
}
