//! Best move command - minimax-optimal tic-tac-toe play.

use seeker::domains::tictactoe::TicTacToe;
use seeker::minimax::{Game, MinimaxSearcher};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    /// Row-major 9-character board, `X`/`O`/`.` per cell.
    #[structopt(long)]
    pub board: TicTacToe,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let side = self.board.side_to_move();
        let mut searcher = MinimaxSearcher::new();

        match searcher.best_move(&self.board) {
            Ok(cell) => {
                println!("{:?} plays row {}, col {} (cell {})", side, cell / 3, cell % 3, cell);
                println!("{}", self.board.apply(cell));
                println!(
                    "positions searched: {}, cutoffs: {}",
                    searcher.searched_position_count(),
                    searcher.termination_count()
                );
            }
            Err(err) => eprintln!("cannot pick a move: {}", err),
        }
    }
}
