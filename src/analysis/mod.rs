//! Whole-tree and per-position analysis built on the rules and the search.
//!
//! - `move_values` / `optimal_moves`: what every legal move is worth
//! - `game_tree_stats`: exhaustive count of games and positions

pub mod census;
pub mod optimal;

pub use census::{game_tree_stats, game_tree_stats_from, GameTreeStats};
pub use optimal::{move_values, optimal_moves};
