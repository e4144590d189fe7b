//! Compare command - run every strategy against one grid instance and
//! report their metrics side by side.

use seeker::domains::grid::{Cell, Connectivity, GridMap};
use seeker::search::{run, NullHeuristic, Strategy, ALL_STRATEGIES};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CompareArgs {
    #[structopt(long, default_value = "10")]
    pub rows: usize,
    #[structopt(long, default_value = "10")]
    pub cols: usize,
    #[structopt(long, default_value = "0,0")]
    pub start: Cell,
    #[structopt(long)]
    pub goal: Option<Cell>,
    #[structopt(long = "obstacle")]
    pub obstacles: Vec<Cell>,
    #[structopt(long)]
    pub diagonal: bool,
}

impl Command for CompareArgs {
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

        let goal = self
            .goal
            .unwrap_or_else(|| Cell::new(self.rows - 1, self.cols - 1));
        let problem = match map.problem(self.start, goal) {
            Ok(problem) => problem,
            Err(err) => {
                eprintln!("invalid query: {}", err);
                return;
            }
        };

        println!(
            "{:<18} {:>8} {:>10} {:>10} {:>12}",
            "strategy", "found", "expanded", "cost", "elapsed"
        );
        for &strategy in ALL_STRATEGIES.iter() {
            // The uninformed strategies ignore the estimate, so Manhattan
            // is safe to supply across the board.
            let report = match strategy {
                Strategy::GreedyBestFirst | Strategy::AStar => {
                    run(strategy, &problem, problem.manhattan())
                }
                _ => run(strategy, &problem, NullHeuristic),
            };
            println!(
                "{:<18} {:>8} {:>10} {:>10.2} {:>12?}",
                strategy.to_string(),
                report.success,
                report.metrics.nodes_expanded,
                report.total_cost,
                report.metrics.elapsed
            );
        }
    }
}
