//! Winning lines of the 3x3 board.

use crate::core::{Board, Cell, Player};

/// Row-major cell indices of every winning line, in checking order:
/// rows, then columns, then the main diagonal, then the anti-diagonal.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Owner of a complete line, if all three cells hold the same mark.
#[must_use]
pub fn line_owner(board: &Board, line: &[usize; 3]) -> Option<Player> {
    let cells = board.cells();
    match cells[line[0]] {
        Cell::X if line.iter().all(|&i| cells[i] == Cell::X) => Some(Player::X),
        Cell::O if line.iter().all(|&i| cells[i] == Cell::O) => Some(Player::O),
        _ => None,
    }
}

/// First complete line on the board, in checking order.
#[must_use]
pub fn first_complete_line(board: &Board) -> Option<(&'static [usize; 3], Player)> {
    WINNING_LINES
        .iter()
        .find_map(|line| line_owner(board, line).map(|owner| (line, owner)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_owner() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(line_owner(&board, &WINNING_LINES[0]), Some(Player::X));
        assert_eq!(line_owner(&board, &WINNING_LINES[1]), None);
        assert_eq!(line_owner(&board, &WINNING_LINES[2]), None);
    }

    #[test]
    fn test_anti_diagonal() {
        let board: Board = "..O .O. O..".parse().unwrap();
        assert_eq!(first_complete_line(&board), Some((&[2, 4, 6], Player::O)));
    }

    #[test]
    fn test_first_line_wins_on_unreachable_board() {
        // Both players own a row; rows are checked top to bottom.
        let board: Board = "OOO XXX ...".parse().unwrap();
        assert_eq!(first_complete_line(&board), Some((&[0, 1, 2], Player::O)));
    }

    #[test]
    fn test_every_line_detected() {
        for line in &WINNING_LINES {
            let mut cells = [Cell::Empty; 9];
            for &i in line {
                cells[i] = Cell::X;
            }
            let board = Board::from_cells(cells);
            assert_eq!(first_complete_line(&board), Some((line, Player::X)));
        }
    }
}
