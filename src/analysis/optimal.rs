//! Per-move evaluation of a position.

use crate::core::{Board, Move, MoveSet, Player};
use crate::rules::whose_turn;
use crate::search::{MinimaxSearch, SearchConfig};

/// Minimax value of each legal move, in row-major order.
///
/// Empty on a terminal board.
#[must_use]
pub fn move_values(board: &Board) -> Vec<(Move, i32)> {
    MinimaxSearch::new(SearchConfig::new().with_memoize(true)).move_values(board)
}

/// Every move that reaches the best value for the side to move.
///
/// `search::best_move` always returns the first of these.
#[must_use]
pub fn optimal_moves(board: &Board) -> MoveSet {
    let values = move_values(board);
    let best = match whose_turn(board) {
        Player::X => values.iter().map(|&(_, v)| v).max(),
        Player::O => values.iter().map(|&(_, v)| v).min(),
    };

    match best {
        Some(best) => values
            .into_iter()
            .filter(|&(_, v)| v == best)
            .map(|(mv, _)| mv)
            .collect(),
        None => MoveSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::initial_board;
    use crate::search::best_move;

    #[test]
    fn test_every_opening_draws() {
        let values = move_values(&initial_board());
        assert_eq!(values.len(), 9);
        assert!(values.iter().all(|&(_, v)| v == 0));
        assert_eq!(optimal_moves(&initial_board()).len(), 9);
    }

    #[test]
    fn test_only_winning_move_is_optimal() {
        let board: Board = "XX. OO. X..".parse().unwrap();
        assert_eq!(optimal_moves(&board).as_slice(), &[Move::new(1, 2)]);
    }

    #[test]
    fn test_best_move_is_first_optimal() {
        let board: Board = "X.. .O. ...".parse().unwrap();
        let optimal = optimal_moves(&board);
        assert!(!optimal.is_empty());
        assert_eq!(best_move(&board), Some(optimal[0]));
    }

    #[test]
    fn test_terminal_board() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert!(move_values(&board).is_empty());
        assert!(optimal_moves(&board).is_empty());
    }
}
