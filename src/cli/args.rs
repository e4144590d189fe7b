//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, compare::CompareArgs, solve_graph::SolveGraphArgs,
    solve_grid::SolveGridArgs, solve_puzzle::SolvePuzzleArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "seeker",
    about = "A search-and-decision engine: pathfinding, puzzle solving, and adversarial play"
)]
pub enum Seeker {
    #[structopt(
        name = "solve-grid",
        about = "Find a path across an occupancy grid. Obstacles are given as repeated `--obstacle row,col` args; pick a strategy with `--strategy` (default: a-star) and a heuristic with `--heuristic` (default: manhattan). Pass `--diagonal` for 8-connectivity."
    )]
    SolveGrid(SolveGridArgs),
    #[structopt(
        name = "solve-puzzle",
        about = "Solve an N x N sliding-tile puzzle. The start board is a comma-separated list of tiles with 0 as the blank, e.g. `--start 1,2,3,4,5,6,0,7,8`. The goal defaults to the solved board."
    )]
    SolvePuzzle(SolvePuzzleArgs),
    #[structopt(
        name = "solve-graph",
        about = "Find a path through a weighted undirected graph. Nodes are repeated `--node id,x,y` args and edges repeated `--edge from,to,weight` args; `--straight-line` enables the coordinate heuristic for the informed strategies."
    )]
    SolveGraph(SolveGraphArgs),
    #[structopt(
        name = "best-move",
        about = "Pick the minimax-optimal tic-tac-toe move for the side to move. The board is 9 characters, row-major, `X`/`O`/`.` per cell, e.g. `--board XO..X....`."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "compare",
        about = "Run every strategy against the same grid instance and print a metrics table (nodes expanded, path length, path cost, elapsed time)."
    )]
    Compare(CompareArgs),
}

impl crate::cli::commands::Command for Seeker {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            SolveGrid(cmd),
            SolvePuzzle(cmd),
            SolveGraph(cmd),
            BestMove(cmd),
            Compare(cmd),
        }
    }
}
