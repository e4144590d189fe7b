//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod best_move;
pub mod compare;
pub mod solve_graph;
pub mod solve_grid;
pub mod solve_puzzle;

// Shared utilities for commands
pub(crate) mod util;
