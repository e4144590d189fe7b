//! Adversarial search: minimax with alpha-beta pruning over a generic
//! two-player, zero-sum, perfect-information game.

mod search;
mod traits;

#[cfg(test)]
mod tests;

pub use search::{MinimaxError, MinimaxSearcher, WIN_SCORE};
pub use traits::{Game, MoveList, Outcome, Ply};
