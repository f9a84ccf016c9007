//! The 3x3 board value.
//!
//! `Board` is a `Copy` array of nine cells in row-major order. Applying a
//! move always produces a fresh board (see `rules::apply_move`), so boards
//! held by callers or by ancestor search frames are never disturbed.
//!
//! ## Text form
//!
//! ```
//! use rust_ttt::core::{Board, Cell};
//!
//! let board: Board = "XX. / OO. / ...".parse().unwrap();
//! assert_eq!(board.get(0, 1), Cell::X);
//! assert_eq!(board.to_string(), "XX.\nOO.\n...");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::Error;
use super::moves::Move;

/// Board side length.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// Immutable 3x3 grid of cells.
///
/// Two boards with the same cells are interchangeable: equality, hashing
/// and serialization look at the cells only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

/// Tally of marks on a board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarkCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl Board {
    /// The all-empty starting board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from raw row-major cells.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Raw row-major cells.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Cell at `(row, col)`. Panics if either coordinate is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < SIZE && col < SIZE, "cell ({row}, {col}) is off the board");
        self.cells[row * SIZE + col]
    }

    /// Cell targeted by a move, or `None` if the move is off the board.
    #[must_use]
    pub fn cell_at(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|i| self.cells[i])
    }

    /// Copy of this board with one cell replaced.
    ///
    /// This is the only way to derive a new board; it performs no rule
    /// checks (use `rules::apply_move` for that).
    #[must_use]
    pub(crate) fn with_cell(&self, index: usize, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[index] = cell;
        next
    }

    /// Count X, O and empty cells.
    #[must_use]
    pub fn count(&self) -> MarkCount {
        self.cells.iter().fold(MarkCount::default(), |mut count, cell| {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
            count
        })
    }

    /// Whether every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of marks placed so far.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Whether the mark counts could arise from X-first alternating play.
    ///
    /// Only checks counts; a board may pass this and still show two
    /// winning lines.
    #[must_use]
    pub fn is_reachable_count(&self) -> bool {
        let count = self.count();
        count.x == count.o || count.x == count.o + 1
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cell characters, ignoring whitespace and `|` / `/`
    /// separators. Mark counts are not validated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if chars.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (position, (slot, &character)) in cells.iter_mut().zip(&chars).enumerate() {
            *slot = Cell::from_char(character)
                .ok_or(Error::InvalidCellCharacter { character, position })?;
        }

        Ok(Self { cells })
    }
}
