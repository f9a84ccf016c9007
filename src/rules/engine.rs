//! Board rules: turn inference, move generation and application, win and
//! terminal detection, utility.
//!
//! All functions are pure over `&Board`. The search drives them
//! recursively; external callers use them to validate input and to decide
//! when a game is over.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Cell, Error, Move, MoveSet, Player, Result};

use super::lines::first_complete_line;

/// State of a game on a given board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and at least one empty cell.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Full board without a winner.
    Draw,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self == Outcome::Win(player)
    }
}

/// The canonical starting board: nine empty cells.
#[must_use]
pub const fn initial_board() -> Board {
    Board::new()
}

/// Player who moves next.
///
/// X moves whenever it has not placed more marks than O, which also makes
/// X the mover on the empty board.
#[must_use]
pub fn whose_turn(board: &Board) -> Player {
    let count = board.count();
    if count.x <= count.o {
        Player::X
    } else {
        Player::O
    }
}

/// Every empty cell, in row-major order.
///
/// Order is part of the contract only so that `search::best_move` breaks
/// ties deterministically; callers treating the result as a set may ignore it.
#[must_use]
pub fn legal_moves(board: &Board) -> MoveSet {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| Move::from_index(index))
        .collect()
}

/// Board after the side to move marks `mv`.
///
/// Fails with `Error::InvalidMove` when `mv` is off the board or targets an
/// occupied cell. The input board is left untouched.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board> {
    let index = match mv.index() {
        Some(index) if board.cells()[index].is_empty() => index,
        _ => {
            debug!(%mv, "rejected move");
            return Err(Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }
    };

    Ok(board.with_cell(index, whose_turn(board).cell()))
}

/// Owner of the first complete line (rows, columns, diagonals), if any.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    first_complete_line(board).map(|(_, owner)| owner)
}

/// Whether the game is over: somebody won or no empty cell remains.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Payoff from X's side: +1 if X won, -1 if O won, 0 otherwise.
///
/// Meaningful only on terminal boards. Terminality is not checked in
/// release builds; debug builds assert it.
#[must_use]
pub fn utility(board: &Board) -> i32 {
    debug_assert!(
        is_terminal(board),
        "utility called on a board still in progress:\n{board}"
    );
    winner(board).map_or(0, Player::win_utility)
}

/// Outcome of the game on this board.
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Win(player),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// Whether `mv` could be applied to `board`.
#[must_use]
pub fn is_legal(board: &Board, mv: Move) -> bool {
    board.cell_at(mv).is_some_and(Cell::is_empty)
}
