//! Minimax search for rust-ttt.
//!
//! ## Overview
//!
//! Exhaustive, full-depth minimax over the game tree below a board:
//!
//! - **Mutual recursion**: `max_value` (X to move) and `min_value` (O to move)
//! - **Deterministic**: ties keep the first row-major move
//! - **Optional memo table**: `SearchConfig::memoize`, same answers
//! - **Optional parallel root**: `SearchConfig::parallel_root`, same answers
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::Move;
//! use rust_ttt::rules::initial_board;
//! use rust_ttt::search::{best_move, MinimaxSearch, SearchConfig};
//!
//! // One-shot
//! assert_eq!(best_move(&initial_board()), Some(Move::new(0, 0)));
//!
//! // Reusable context with statistics
//! let mut search = MinimaxSearch::new(SearchConfig::new().with_memoize(true));
//! let (mv, value) = search.best_move_with_value(&initial_board()).unwrap();
//! assert_eq!((mv, value), (Move::new(0, 0), 0));
//! assert!(search.stats().nodes > 0);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

// Re-export main types
pub use config::SearchConfig;
pub use minimax::{best_move, max_value, min_value, MinimaxSearch};
pub use stats::SearchStats;
