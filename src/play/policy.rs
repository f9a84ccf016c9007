//! Move-choosing policies.
//!
//! Policies are trait-based so drivers can mix them freely:
//! - `MinimaxPolicy`: always plays an optimal move
//! - `RandomPolicy`: uniform over legal moves, seeded

use crate::core::{Board, GameRng, GameRngState, Move};
use crate::rules::legal_moves;
use crate::search::{MinimaxSearch, SearchConfig};

/// Something that picks a move for the side to move.
pub trait Policy {
    /// Short name for logs and errors.
    fn name(&self) -> &str;

    /// Choose a move on `board`.
    ///
    /// Returns `None` only when the board has no legal move. A returned
    /// move is applied with `rules::apply_move`, so an illegal choice is
    /// reported as `Error::InvalidMove` rather than trusted.
    fn choose_move(&mut self, board: &Board) -> Option<Move>;
}

/// Optimal play via minimax.
///
/// Memoizes by default; the chosen moves are the same as the plain search.
#[derive(Clone, Debug)]
pub struct MinimaxPolicy {
    search: MinimaxSearch,
}

impl MinimaxPolicy {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::new().with_memoize(true))
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            search: MinimaxSearch::new(config),
        }
    }

    /// The underlying search context (for statistics).
    pub fn search(&self) -> &MinimaxSearch {
        &self.search
    }
}

impl Default for MinimaxPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for MinimaxPolicy {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.search.best_move(board)
    }
}

/// Uniformly random legal moves.
///
/// Deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Stream position, for resuming this policy later.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        self.rng.pick_move(&legal_moves(board))
    }
}
