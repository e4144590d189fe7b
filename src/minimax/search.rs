//! Full-depth minimax with alpha-beta pruning.

use log::debug;
use thiserror::Error;

use crate::minimax::traits::{Game, Outcome, Ply};

/// Base value of a won game. Wins score `WIN_SCORE - depth` and losses
/// `-WIN_SCORE + depth`, so the searcher prefers faster wins and slower
/// losses. Comfortably exceeds any achievable depth adjustment.
pub const WIN_SCORE: i16 = 10_000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MinimaxError {
    #[error("no available moves")]
    NoAvailableMoves,
}

/// Adversarial searcher. Runs to full terminal depth — game trees this
/// engine targets have small branching factors, so no cutoff evaluation is
/// needed.
#[derive(Debug, Default)]
pub struct MinimaxSearcher {
    searched_position_count: usize,
    termination_count: usize,
}

impl MinimaxSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions evaluated during the last `best_move` call.
    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    /// Alpha-beta cutoffs during the last `best_move` call.
    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
    }

    /// Selects the move whose child evaluation is extremal for the side to
    /// move. Ties break toward the first candidate in move-generation
    /// order, so repeated calls are deterministic.
    ///
    /// A terminal position (won, or completed with no winner) has no moves
    /// to choose from and returns `NoAvailableMoves`.
    pub fn best_move<G: Game>(&mut self, game: &G) -> Result<G::Move, MinimaxError> {
        self.reset_stats();

        if game.outcome().is_some() {
            return Err(MinimaxError::NoAvailableMoves);
        }
        let moves = game.legal_moves();
        if moves.is_empty() {
            return Err(MinimaxError::NoAvailableMoves);
        }

        let mut alpha = i16::MIN;
        let mut beta = i16::MAX;
        let mut best = moves[0];

        match game.to_move() {
            Ply::Max => {
                let mut best_score = i16::MIN;
                for &mv in moves.iter() {
                    let score = self.evaluate(&game.apply(mv), 1, alpha, beta);
                    debug!("candidate {:?} scores {}", mv, score);
                    if score > best_score {
                        best_score = score;
                        best = mv;
                    }
                    alpha = alpha.max(score);
                }
            }
            Ply::Min => {
                let mut best_score = i16::MAX;
                for &mv in moves.iter() {
                    let score = self.evaluate(&game.apply(mv), 1, alpha, beta);
                    debug!("candidate {:?} scores {}", mv, score);
                    if score < best_score {
                        best_score = score;
                        best = mv;
                    }
                    beta = beta.min(score);
                }
            }
        }

        Ok(best)
    }

    fn evaluate<G: Game>(&mut self, game: &G, depth: u8, mut alpha: i16, mut beta: i16) -> i16 {
        self.searched_position_count += 1;

        if let Some(outcome) = game.outcome() {
            return match outcome {
                Outcome::MaxWins => WIN_SCORE - depth as i16,
                Outcome::MinWins => -WIN_SCORE + depth as i16,
                Outcome::Draw => 0,
            };
        }

        let moves = game.legal_moves();
        if moves.is_empty() {
            // No legal moves and no terminal condition scores as a draw.
            return 0;
        }

        match game.to_move() {
            Ply::Max => {
                let mut best = i16::MIN;
                for &mv in moves.iter() {
                    let score = self.evaluate(&game.apply(mv), depth + 1, alpha, beta);
                    best = best.max(score);
                    alpha = alpha.max(score);
                    if beta <= alpha {
                        self.termination_count += 1;
                        break;
                    }
                }
                best
            }
            Ply::Min => {
                let mut best = i16::MAX;
                for &mv in moves.iter() {
                    let score = self.evaluate(&game.apply(mv), depth + 1, alpha, beta);
                    best = best.min(score);
                    beta = beta.min(score);
                    if beta <= alpha {
                        self.termination_count += 1;
                        break;
                    }
                }
                best
            }
        }
    }
}
