use super::*;
use crate::domains::tictactoe::{Mark, TicTacToe};

fn board(s: &str) -> TicTacToe {
    s.parse().unwrap()
}

/// Plays both sides with `best_move` until the game ends.
fn self_play(mut board: TicTacToe) -> Outcome {
    let mut searcher = MinimaxSearcher::new();
    while board.outcome().is_none() {
        let mv = searcher.best_move(&board).unwrap();
        board = board.apply(mv);
    }
    board.outcome().unwrap()
}

#[test]
fn takes_an_immediate_win() {
    // X completes the top row; the depth-sensitive scoring makes the
    // one-ply win beat any slower forced win.
    let mut searcher = MinimaxSearcher::new();
    assert_eq!(searcher.best_move(&board("XX.OO....")).unwrap(), 2);
}

#[test]
fn blocks_an_immediate_threat() {
    // X threatens the top row; every other O reply loses, and the block
    // holds a draw.
    let mut searcher = MinimaxSearcher::new();
    assert_eq!(searcher.best_move(&board("XX..O....")).unwrap(), 2);
}

#[test]
fn prefers_the_faster_win() {
    // X can win on the spot via the left column or grind out something
    // longer; the immediate win must be chosen.
    let mut searcher = MinimaxSearcher::new();
    assert_eq!(searcher.best_move(&board("X..XO..O.")).unwrap(), 6);
}

#[test]
fn self_play_from_the_empty_board_draws() {
    assert_eq!(self_play(TicTacToe::empty()), Outcome::Draw);
}

#[test]
fn self_play_from_every_opening_draws() {
    // Perfect play draws no matter which cell starts the game.
    for opening in 0..9 {
        let board = TicTacToe::empty().apply(opening);
        assert_eq!(
            self_play(board),
            Outcome::Draw,
            "opening at cell {} did not draw",
            opening
        );
    }
}

#[test]
fn completed_boards_reject_best_move() {
    let mut searcher = MinimaxSearcher::new();

    let drawn = board("XOXXOOOXX");
    assert_eq!(
        searcher.best_move(&drawn).unwrap_err(),
        MinimaxError::NoAvailableMoves
    );

    let won = board("XXXOO....");
    assert_eq!(
        searcher.best_move(&won).unwrap_err(),
        MinimaxError::NoAvailableMoves
    );
}

#[test]
fn chosen_move_converts_a_won_position() {
    let mut searcher = MinimaxSearcher::new();
    let position = board("XX.OO....");
    let mv = searcher.best_move(&position).unwrap();
    let next = position.apply(mv);
    assert_eq!(next.winner(), Some(Mark::X));
    assert_eq!(next.outcome(), Some(Outcome::MaxWins));
}

#[test]
fn pruning_cuts_the_game_tree() {
    let mut searcher = MinimaxSearcher::new();
    searcher.best_move(&TicTacToe::empty()).unwrap();

    // The full game tree from the empty board has over half a million
    // positions; alpha-beta must visit far fewer.
    assert!(searcher.searched_position_count() > 0);
    assert!(searcher.searched_position_count() < 100_000);
    assert!(searcher.termination_count() > 0);
}

#[test]
fn stats_reset_between_searches() {
    let mut searcher = MinimaxSearcher::new();
    searcher.best_move(&TicTacToe::empty()).unwrap();
    let first = searcher.searched_position_count();

    searcher.best_move(&board("XX.OO....")).unwrap();
    assert!(searcher.searched_position_count() < first);
}

#[test]
fn best_move_is_deterministic() {
    let mut searcher = MinimaxSearcher::new();
    let position = board("X...O....");
    let first = searcher.best_move(&position).unwrap();
    let second = searcher.best_move(&position).unwrap();
    assert_eq!(first, second);
}
