//! Playing full matches.
//!
//! A `Policy` picks moves; `play_match` runs one game between two of them
//! and `Arena` runs a seeded series.
//!
//! ```
//! use rust_ttt::play::{play_match, MinimaxPolicy, RandomPolicy};
//! use rust_ttt::Player;
//!
//! let record = play_match(&mut MinimaxPolicy::new(), &mut RandomPolicy::new(7)).unwrap();
//! assert_ne!(record.winner(), Some(Player::O));
//! ```

pub mod arena;
pub mod policy;

pub use arena::{play_match, Arena, ArenaConfig, MatchRecord, MatchTally};
pub use policy::{MinimaxPolicy, Policy, RandomPolicy};
