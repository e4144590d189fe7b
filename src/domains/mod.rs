//! Domain adapters: the four state spaces supplied to the engine.

pub mod graph;
pub mod grid;
pub mod puzzle;
pub mod tictactoe;
