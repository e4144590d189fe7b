//! Core traits for generic minimax search.

use std::fmt::Debug;

use smallvec::SmallVec;

/// Legal-move list returned by game states. Generation order is the
/// tie-break order at the root, so it must be deterministic.
pub type MoveList<M> = SmallVec<[M; 9]>;

/// Which side a ply belongs to in a two-player zero-sum game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ply {
    Max,
    Min,
}

impl Ply {
    pub fn opponent(self) -> Ply {
        match self {
            Ply::Max => Ply::Min,
            Ply::Min => Ply::Max,
        }
    }
}

/// Terminal value of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    MaxWins,
    MinWins,
    Draw,
}

/// A two-player, zero-sum, perfect-information game state.
///
/// `apply` returns an immutable successor snapshot rather than mutating in
/// place, so recursive branches can never alias a shared board.
pub trait Game: Clone {
    type Move: Copy + PartialEq + Debug;

    /// The side to move in this position.
    fn to_move(&self) -> Ply;

    /// All legal moves for the side to move, in deterministic order.
    fn legal_moves(&self) -> MoveList<Self::Move>;

    /// The position after playing `mv`, as a fresh snapshot.
    fn apply(&self, mv: Self::Move) -> Self;

    /// `Some` when the game is over, `None` while play continues.
    fn outcome(&self) -> Option<Outcome>;
}
