//! Move representation: a `(row, col)` target cell.
//!
//! A `Move` is only meaningful relative to a board: it is legal when the
//! targeted cell exists and is empty. Coordinates are not range-checked on
//! construction so that callers can hand over raw input and let
//! `rules::apply_move` reject it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::SIZE;
use super::player::Player;

/// A placement on the board.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::Move;
///
/// let centre = Move::new(1, 1);
/// assert_eq!(centre.index(), Some(4));
/// assert_eq!(Move::new(3, 0).index(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

/// Legal moves of a position. At most nine, so it never allocates.
pub type MoveSet = SmallVec<[Move; 9]>;

impl Move {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Move targeting a row-major cell index. `index` must be below 9.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / SIZE) as u8,
            col: (index % SIZE) as u8,
        }
    }

    /// Row-major cell index, or `None` when either coordinate is off the board.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        let (row, col) = (self.row as usize, self.col as usize);
        if row < SIZE && col < SIZE {
            Some(row * SIZE + col)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move as played in a match.
///
/// Used for:
/// - Match history and replay
/// - Debug logging of finished games
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who made the move.
    pub player: Player,

    /// The move made.
    pub mv: Move,

    /// Zero-based ply number.
    pub ply: u8,
}

impl MoveRecord {
    #[must_use]
    pub const fn new(player: Player, mv: Move, ply: u8) -> Self {
        Self { player, mv, ply }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..9 {
            assert_eq!(Move::from_index(index).index(), Some(index));
        }
        assert_eq!(Move::from_index(5), Move::new(1, 2));
    }

    #[test]
    fn test_off_board_index() {
        assert_eq!(Move::new(0, 3).index(), None);
        assert_eq!(Move::new(3, 0).index(), None);
        assert_eq!(Move::new(255, 255).index(), None);
    }

    #[test]
    fn test_row_major_ordering() {
        let mut moves = vec![Move::new(2, 0), Move::new(0, 2), Move::new(1, 1)];
        moves.sort();
        assert_eq!(moves, vec![Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(2, 1).to_string(), "(2, 1)");
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Player::O, Move::new(1, 1), 3);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
