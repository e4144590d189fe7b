//! Tic-tac-toe: a 3x3 two-player zero-sum game. X is the maximizing side
//! and moves first.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::minimax::{Game, MoveList, Outcome, Ply};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn ply(self) -> Ply {
        match self {
            Mark::X => Ply::Max,
            Mark::O => Ply::Min,
        }
    }

    fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// The eight winning lines: rows, columns, diagonals.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("board must be exactly 9 characters, got {0}")]
    WrongLength(usize),
    #[error("unrecognized cell character `{0}`; expected X, O, or .")]
    BadCell(char),
    #[error("impossible position: {x} X marks and {o} O marks")]
    Unbalanced { x: usize, o: usize },
}

/// Board cells are row-major indices 0..9. The side to move is derived
/// from the mark counts, since X always moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    cells: [Option<Mark>; 9],
}

impl TicTacToe {
    pub fn empty() -> Self {
        Self { cells: [None; 9] }
    }

    pub fn mark_at(&self, cell: usize) -> Option<Mark> {
        self.cells[cell]
    }

    pub fn winner(&self) -> Option<Mark> {
        for line in WIN_LINES.iter() {
            if let Some(mark) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(mark) && self.cells[line[2]] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    fn counts(&self) -> (usize, usize) {
        let x = self.cells.iter().filter(|&&c| c == Some(Mark::X)).count();
        let o = self.cells.iter().filter(|&&c| c == Some(Mark::O)).count();
        (x, o)
    }

    /// The mark whose turn it is. X moves first, so X is to move whenever
    /// the counts are equal.
    pub fn side_to_move(&self) -> Mark {
        let (x, o) = self.counts();
        if x == o {
            Mark::X
        } else {
            Mark::O
        }
    }
}

impl FromStr for TicTacToe {
    type Err = BoardParseError;

    /// Parses a 9-character row-major board, `X`/`O`/`.` per cell.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 {
            return Err(BoardParseError::WrongLength(chars.len()));
        }

        let mut cells = [None; 9];
        for (index, &c) in chars.iter().enumerate() {
            cells[index] = match c {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' => None,
                other => return Err(BoardParseError::BadCell(other)),
            };
        }

        let board = Self { cells };
        let (x, o) = board.counts();
        if x != o && x != o + 1 {
            return Err(BoardParseError::Unbalanced { x, o });
        }
        Ok(board)
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let c = match self.cells[row * 3 + col] {
                    Some(mark) => mark.as_char(),
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Game for TicTacToe {
    type Move = usize;

    fn to_move(&self) -> Ply {
        self.side_to_move().ply()
    }

    fn legal_moves(&self) -> MoveList<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    fn apply(&self, mv: usize) -> Self {
        let mut next = self.clone();
        next.cells[mv] = Some(self.side_to_move());
        next
    }

    fn outcome(&self) -> Option<Outcome> {
        if let Some(winner) = self.winner() {
            return Some(match winner {
                Mark::X => Outcome::MaxWins,
                Mark::O => Outcome::MinWins,
            });
        }
        if self.is_full() {
            return Some(Outcome::Draw);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_malformed_boards() {
        assert_eq!(
            "XO".parse::<TicTacToe>().unwrap_err(),
            BoardParseError::WrongLength(2)
        );
        assert_eq!(
            "XO?......".parse::<TicTacToe>().unwrap_err(),
            BoardParseError::BadCell('?')
        );
        assert_eq!(
            "XXX......".parse::<TicTacToe>().unwrap_err(),
            BoardParseError::Unbalanced { x: 3, o: 0 }
        );
        assert_eq!(
            "O........".parse::<TicTacToe>().unwrap_err(),
            BoardParseError::Unbalanced { x: 0, o: 1 }
        );
    }

    #[test]
    fn side_to_move_alternates_from_x() {
        let board = TicTacToe::empty();
        assert_eq!(board.side_to_move(), Mark::X);
        let board = board.apply(4);
        assert_eq!(board.side_to_move(), Mark::O);
        assert_eq!(board.mark_at(4), Some(Mark::X));
    }

    #[test]
    fn detects_row_column_and_diagonal_wins() {
        let row: TicTacToe = "XXXOO....".parse().unwrap();
        assert_eq!(row.outcome(), Some(Outcome::MaxWins));
        let column: TicTacToe = "OX.OX.O.X".parse().unwrap();
        assert_eq!(column.outcome(), Some(Outcome::MinWins));
        let diagonal: TicTacToe = "X.OOX..OX".parse().unwrap();
        assert_eq!(diagonal.outcome(), Some(Outcome::MaxWins));
    }

    #[test]
    fn full_board_without_winner_is_a_draw() {
        let board: TicTacToe = "XOXXOOOXX".parse().unwrap();
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), Some(Outcome::Draw));
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn legal_moves_are_the_empty_cells_in_order() {
        let board: TicTacToe = "X.O.X....".parse().unwrap();
        let moves: Vec<usize> = board.legal_moves().into_iter().collect();
        assert_eq!(moves, vec![1, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn apply_returns_a_fresh_snapshot() {
        let board = TicTacToe::empty();
        let next = board.apply(0);
        assert_eq!(board.mark_at(0), None);
        assert_eq!(next.mark_at(0), Some(Mark::X));
    }

    #[test]
    fn display_renders_three_rows() {
        let board: TicTacToe = "XO..X...O".parse().unwrap();
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
    }
}
