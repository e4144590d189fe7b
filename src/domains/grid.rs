//! 2-D occupancy grid with 4- or 8-connectivity.

use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use thiserror::Error;

use crate::search::{Heuristic, SearchProblem, SuccessorList};

/// One cell of the grid, row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let row = parts.next().and_then(|p| p.trim().parse().ok());
        let col = parts.next().and_then(|p| p.trim().parse().ok());
        match (row, col, parts.next()) {
            (Some(row), Some(col), None) => Ok(Cell::new(row, col)),
            _ => Err("expected a cell as `row,col`"),
        }
    }
}

/// Neighborhood of each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Four,
    Eight,
}

/// Fixed `(action, delta, cost)` successor table, iterated uniformly
/// instead of branching per direction.
const CARDINAL_MOVES: [(&str, (i64, i64), f64); 4] = [
    ("up", (-1, 0), 1.0),
    ("down", (1, 0), 1.0),
    ("left", (0, -1), 1.0),
    ("right", (0, 1), 1.0),
];

const DIAGONAL_MOVES: [(&str, (i64, i64), f64); 4] = [
    ("up-left", (-1, -1), SQRT_2),
    ("up-right", (-1, 1), SQRT_2),
    ("down-left", (1, -1), SQRT_2),
    ("down-right", (1, 1), SQRT_2),
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be nonzero")]
    EmptyGrid,
    #[error("cell {cell} is outside a {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
    #[error("{endpoint} cell {cell} is blocked")]
    BlockedEndpoint { endpoint: &'static str, cell: Cell },
}

/// A rows x cols grid of free and blocked cells.
#[derive(Debug, Clone)]
pub struct GridMap {
    rows: usize,
    cols: usize,
    connectivity: Connectivity,
    blocked: FxHashSet<Cell>,
}

impl GridMap {
    pub fn new(rows: usize, cols: usize, connectivity: Connectivity) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            rows,
            cols,
            connectivity,
            blocked: FxHashSet::default(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked.contains(&cell)
    }

    /// Marks a cell as an obstacle.
    pub fn block(&mut self, cell: Cell) -> Result<(), GridError> {
        if !self.in_bounds(cell) {
            return Err(GridError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.blocked.insert(cell);
        Ok(())
    }

    /// Binds the map to a start/goal pair, validating both endpoints before
    /// any search begins.
    pub fn problem(&self, start: Cell, goal: Cell) -> Result<GridProblem<'_>, GridError> {
        for (endpoint, cell) in [("start", start), ("goal", goal)] {
            if !self.in_bounds(cell) {
                return Err(GridError::OutOfBounds {
                    cell,
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            if self.is_blocked(cell) {
                return Err(GridError::BlockedEndpoint { endpoint, cell });
            }
        }
        Ok(GridProblem {
            map: self,
            start,
            goal,
        })
    }
}

/// A validated grid pathfinding query.
#[derive(Debug, Clone, Copy)]
pub struct GridProblem<'a> {
    map: &'a GridMap,
    start: Cell,
    goal: Cell,
}

impl GridProblem<'_> {
    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn manhattan(&self) -> ManhattanDistance {
        ManhattanDistance { goal: self.goal }
    }

    pub fn euclidean(&self) -> EuclideanDistance {
        EuclideanDistance { goal: self.goal }
    }
}

impl SearchProblem for GridProblem<'_> {
    type State = Cell;
    type Action = &'static str;

    fn start_state(&self) -> Cell {
        self.start
    }

    fn is_goal(&self, state: &Cell) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Cell) -> SuccessorList<&'static str, Cell> {
        let moves: SmallVec<[_; 8]> = match self.map.connectivity {
            Connectivity::Four => CARDINAL_MOVES.iter().collect(),
            Connectivity::Eight => CARDINAL_MOVES.iter().chain(DIAGONAL_MOVES.iter()).collect(),
        };

        let mut successors = SuccessorList::new();
        for &(action, (dr, dc), cost) in moves {
            let row = state.row as i64 + dr;
            let col = state.col as i64 + dc;
            if row < 0 || col < 0 {
                continue;
            }
            let next = Cell::new(row as usize, col as usize);
            if !self.map.in_bounds(next) || self.map.is_blocked(next) {
                continue;
            }
            successors.push((action, next, cost));
        }
        successors
    }
}

/// |Δrow| + |Δcol|. Admissible and consistent for 4-connectivity.
#[derive(Debug, Clone, Copy)]
pub struct ManhattanDistance {
    goal: Cell,
}

impl Heuristic<Cell> for ManhattanDistance {
    fn estimate(&self, state: &Cell) -> f64 {
        let dr = (state.row as i64 - self.goal.row as i64).abs();
        let dc = (state.col as i64 - self.goal.col as i64).abs();
        (dr + dc) as f64
    }
}

/// Straight-line distance. Admissible for both connectivities.
#[derive(Debug, Clone, Copy)]
pub struct EuclideanDistance {
    goal: Cell,
}

impl Heuristic<Cell> for EuclideanDistance {
    fn estimate(&self, state: &Cell) -> f64 {
        let dr = (state.row as f64 - self.goal.row as f64).powi(2);
        let dc = (state.col as f64 - self.goal.col as f64).powi(2);
        (dr + dc).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(
            GridMap::new(0, 5, Connectivity::Four).unwrap_err(),
            GridError::EmptyGrid
        );
    }

    #[test]
    fn rejects_out_of_bounds_obstacle() {
        let mut map = GridMap::new(3, 3, Connectivity::Four).unwrap();
        assert!(matches!(
            map.block(Cell::new(3, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn rejects_blocked_endpoints() {
        let mut map = GridMap::new(3, 3, Connectivity::Four).unwrap();
        map.block(Cell::new(0, 0)).unwrap();
        assert!(matches!(
            map.problem(Cell::new(0, 0), Cell::new(2, 2)),
            Err(GridError::BlockedEndpoint {
                endpoint: "start",
                ..
            })
        ));
        assert!(matches!(
            map.problem(Cell::new(2, 2), Cell::new(0, 0)),
            Err(GridError::BlockedEndpoint { endpoint: "goal", .. })
        ));
    }

    #[test]
    fn cardinal_successors_respect_bounds_and_obstacles() {
        let mut map = GridMap::new(3, 3, Connectivity::Four).unwrap();
        map.block(Cell::new(0, 1)).unwrap();
        let problem = map.problem(Cell::new(0, 0), Cell::new(2, 2)).unwrap();

        let successors = problem.successors(&Cell::new(0, 0));
        let cells: Vec<Cell> = successors.iter().map(|(_, cell, _)| *cell).collect();
        // (0,1) is blocked, up and left fall off the grid.
        assert_eq!(cells, vec![Cell::new(1, 0)]);
        assert!(successors.iter().all(|&(_, _, cost)| cost == 1.0));
    }

    #[test]
    fn diagonal_successors_cost_sqrt_two() {
        let map = GridMap::new(3, 3, Connectivity::Eight).unwrap();
        let problem = map.problem(Cell::new(1, 1), Cell::new(2, 2)).unwrap();

        let successors = problem.successors(&Cell::new(1, 1));
        assert_eq!(successors.len(), 8);
        let &(_, _, diagonal_cost) = successors
            .iter()
            .find(|(action, _, _)| *action == "down-right")
            .unwrap();
        assert!((diagonal_cost - SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn heuristics_measure_distance_to_goal() {
        let map = GridMap::new(5, 5, Connectivity::Four).unwrap();
        let problem = map.problem(Cell::new(0, 0), Cell::new(4, 4)).unwrap();

        assert_eq!(problem.manhattan().estimate(&Cell::new(0, 0)), 8.0);
        assert_eq!(problem.manhattan().estimate(&Cell::new(4, 4)), 0.0);
        let euclidean = problem.euclidean().estimate(&Cell::new(1, 1));
        assert!((euclidean - (18.0f64).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn cell_parses_from_row_col() {
        assert_eq!("2,3".parse::<Cell>().unwrap(), Cell::new(2, 3));
        assert!("2".parse::<Cell>().is_err());
        assert!("2,3,4".parse::<Cell>().is_err());
        assert!("a,b".parse::<Cell>().is_err());
    }
}
