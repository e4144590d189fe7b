//! N x N sliding-tile puzzle. Tiles are stored as a flat row-major array
//! with 0 as the blank.

use thiserror::Error;

use crate::search::{Heuristic, SearchProblem, SuccessorList};

/// A board configuration: `size * size` tiles, row-major, blank = 0.
pub type Tiles = Vec<u8>;

/// Directions the blank can slide, as a fixed `(action, delta)` table.
const SLIDE_MOVES: [(&str, (i64, i64)); 4] = [
    ("up", (-1, 0)),
    ("down", (1, 0)),
    ("left", (0, -1)),
    ("right", (0, 1)),
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("puzzle size must be at least 2")]
    TooSmall,
    #[error("expected {expected} tiles, got {actual}")]
    WrongTileCount { expected: usize, actual: usize },
    #[error("tiles must be a permutation of 0..{0}")]
    NotAPermutation(usize),
}

/// A validated sliding-puzzle instance: board size, start configuration,
/// and goal configuration.
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    size: usize,
    start: Tiles,
    goal: Tiles,
}

impl SlidingPuzzle {
    pub fn new(size: usize, start: Tiles, goal: Tiles) -> Result<Self, PuzzleError> {
        if size < 2 {
            return Err(PuzzleError::TooSmall);
        }
        validate_tiles(size, &start)?;
        validate_tiles(size, &goal)?;
        Ok(Self { size, start, goal })
    }

    /// The conventional goal: tiles in order with the blank last.
    pub fn solved_tiles(size: usize) -> Tiles {
        let count = size * size;
        (1..count as u8).chain(std::iter::once(0)).collect()
    }

    pub fn with_solved_goal(size: usize, start: Tiles) -> Result<Self, PuzzleError> {
        let goal = Self::solved_tiles(size);
        Self::new(size, start, goal)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Counts tiles (excluding the blank) not on their goal square.
    /// Admissible: every misplaced tile needs at least one slide.
    pub fn misplaced_tiles(&self) -> MisplacedTiles {
        MisplacedTiles {
            goal: self.goal.clone(),
        }
    }

    /// Sum over tiles of Manhattan distance to their goal squares.
    /// Admissible and dominates the misplaced-tile count.
    pub fn tile_manhattan(&self) -> TileManhattan {
        let mut goal_positions = vec![(0usize, 0usize); self.size * self.size];
        for (index, &tile) in self.goal.iter().enumerate() {
            goal_positions[tile as usize] = (index / self.size, index % self.size);
        }
        TileManhattan {
            size: self.size,
            goal_positions,
        }
    }
}

fn validate_tiles(size: usize, tiles: &[u8]) -> Result<(), PuzzleError> {
    let count = size * size;
    if tiles.len() != count {
        return Err(PuzzleError::WrongTileCount {
            expected: count,
            actual: tiles.len(),
        });
    }
    let mut seen = vec![false; count];
    for &tile in tiles {
        let tile = tile as usize;
        if tile >= count || seen[tile] {
            return Err(PuzzleError::NotAPermutation(count));
        }
        seen[tile] = true;
    }
    Ok(())
}

impl SearchProblem for SlidingPuzzle {
    type State = Tiles;
    type Action = &'static str;

    fn start_state(&self) -> Tiles {
        self.start.clone()
    }

    fn is_goal(&self, state: &Tiles) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Tiles) -> SuccessorList<&'static str, Tiles> {
        let blank = state
            .iter()
            .position(|&tile| tile == 0)
            .expect("a validated board always has a blank");
        let (row, col) = (blank / self.size, blank % self.size);

        let mut successors = SuccessorList::new();
        for &(action, (dr, dc)) in SLIDE_MOVES.iter() {
            let next_row = row as i64 + dr;
            let next_col = col as i64 + dc;
            if next_row < 0
                || next_col < 0
                || next_row >= self.size as i64
                || next_col >= self.size as i64
            {
                continue;
            }
            let target = next_row as usize * self.size + next_col as usize;
            let mut next = state.clone();
            next.swap(blank, target);
            successors.push((action, next, 1.0));
        }
        successors
    }
}

#[derive(Debug, Clone)]
pub struct MisplacedTiles {
    goal: Tiles,
}

impl Heuristic<Tiles> for MisplacedTiles {
    fn estimate(&self, state: &Tiles) -> f64 {
        state
            .iter()
            .zip(self.goal.iter())
            .filter(|(&tile, &goal)| tile != 0 && tile != goal)
            .count() as f64
    }
}

#[derive(Debug, Clone)]
pub struct TileManhattan {
    size: usize,
    /// Goal (row, col) indexed by tile value.
    goal_positions: Vec<(usize, usize)>,
}

impl Heuristic<Tiles> for TileManhattan {
    fn estimate(&self, state: &Tiles) -> f64 {
        let mut total = 0i64;
        for (index, &tile) in state.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let (row, col) = (index / self.size, index % self.size);
            let (goal_row, goal_col) = self.goal_positions[tile as usize];
            total += (row as i64 - goal_row as i64).abs() + (col as i64 - goal_col as i64).abs();
        }
        total as f64
    }
}
