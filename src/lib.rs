//! # rust-ttt
//!
//! Tic-Tac-Toe rules and a perfect-play minimax solver.
//!
//! ## Design Principles
//!
//! 1. **Immutable boards**: `Board` is a small `Copy` value. Applying a move
//!    returns a new board; nothing is ever undone.
//!
//! 2. **Rules are the only oracle**: the search asks the rules whose turn it
//!    is, which moves exist and who has won. It never inspects cells itself.
//!
//! 3. **Deterministic answers**: legal moves are generated in row-major
//!    order and ties keep the first move, so every entry point agrees on
//!    the same best move for the same board.
//!
//! ## Modules
//!
//! - `core`: Players, cells, boards, moves, RNG, errors
//! - `rules`: Turn order, legal moves, winners, utility
//! - `search`: Minimax (`best_move`, `max_value`, `min_value`)
//! - `analysis`: Per-move values and the full game-tree census
//! - `play`: Policies, single matches and seeded arenas
//!
//! ## Example
//!
//! ```
//! use rust_ttt::{apply_move, best_move, initial_board, is_terminal, utility};
//!
//! let mut board = initial_board();
//! while !is_terminal(&board) {
//!     let mv = best_move(&board).unwrap();
//!     board = apply_move(&board, mv).unwrap();
//! }
//! assert_eq!(utility(&board), 0);
//! ```

pub mod analysis;
pub mod core;
pub mod play;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Error, GameRng, Move, MoveRecord, MoveSet, Player, Result};

pub use crate::rules::{
    apply_move, initial_board, is_terminal, legal_moves, outcome, utility, whose_turn, winner,
    Outcome,
};

pub use crate::search::{best_move, max_value, min_value, MinimaxSearch, SearchConfig, SearchStats};

pub use crate::analysis::{game_tree_stats, move_values, optimal_moves, GameTreeStats};

pub use crate::play::{play_match, Arena, ArenaConfig, MatchRecord, MatchTally, Policy};
