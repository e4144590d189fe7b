//! Solve puzzle command - sliding-tile puzzle solving.

use std::str::FromStr;

use seeker::domains::puzzle::{SlidingPuzzle, Tiles};
use seeker::search::{run, NullHeuristic, Strategy};
use structopt::StructOpt;

use super::util::print_metrics;
use super::Command;

#[derive(Debug, Clone, Copy)]
pub enum PuzzleHeuristicChoice {
    Misplaced,
    Manhattan,
    None,
}

impl FromStr for PuzzleHeuristicChoice {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "misplaced" => Ok(PuzzleHeuristicChoice::Misplaced),
            "manhattan" => Ok(PuzzleHeuristicChoice::Manhattan),
            "none" => Ok(PuzzleHeuristicChoice::None),
            _ => Err("invalid heuristic; options are: misplaced, manhattan, none"),
        }
    }
}

/// Comma-separated tile list, e.g. `1,2,3,4,5,6,0,7,8`.
#[derive(Debug, Clone)]
pub struct TileList(pub Tiles);

impl FromStr for TileList {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Tiles, _>>()
            .map(TileList)
            .map_err(|_| "tiles must be a comma-separated list of numbers")
    }
}

#[derive(StructOpt)]
pub struct SolvePuzzleArgs {
    #[structopt(long, default_value = "3")]
    pub size: usize,
    #[structopt(long)]
    pub start: TileList,
    #[structopt(long)]
    pub goal: Option<TileList>,
    #[structopt(short, long, default_value = "a-star")]
    pub strategy: Strategy,
    #[structopt(long, default_value = "manhattan")]
    pub heuristic: PuzzleHeuristicChoice,
}

impl Command for SolvePuzzleArgs {
    fn execute(self) {
        let puzzle = match self.goal {
            Some(goal) => SlidingPuzzle::new(self.size, self.start.0, goal.0),
            None => SlidingPuzzle::with_solved_goal(self.size, self.start.0),
        };
        let puzzle = match puzzle {
            Ok(puzzle) => puzzle,
            Err(err) => {
                eprintln!("invalid puzzle: {}", err);
                return;
            }
        };

        let report = match self.heuristic {
            PuzzleHeuristicChoice::Misplaced => {
                run(self.strategy, &puzzle, puzzle.misplaced_tiles())
            }
            PuzzleHeuristicChoice::Manhattan => {
                run(self.strategy, &puzzle, puzzle.tile_manhattan())
            }
            PuzzleHeuristicChoice::None => run(self.strategy, &puzzle, NullHeuristic),
        };

        if !report.success {
            println!("no solution found");
            print_metrics(&report.metrics);
            return;
        }

        println!("slides: {}", report.actions.join(", "));
        print_metrics(&report.metrics);
    }
}
