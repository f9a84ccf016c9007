//! Core types: players, cells, boards, moves, RNG, errors.
//!
//! Everything here is plain data. The rules that give it meaning live in
//! `rules`.

pub mod board;
pub mod error;
pub mod moves;
pub mod player;
pub mod rng;

pub use board::{Board, Cell, MarkCount, CELL_COUNT, SIZE};
pub use error::{Error, Result};
pub use moves::{Move, MoveRecord, MoveSet};
pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
