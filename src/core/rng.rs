//! Seeded randomness for random play.
//!
//! A `GameRng` is a ChaCha8 stream identified by its seed. The stream
//! position can be captured as a `GameRngState` and resumed later, so a
//! random policy can be paused mid-match and continued exactly.
//!
//! ```
//! use rust_ttt::core::{GameRng, Move};
//!
//! let moves = [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)];
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.pick_move(&moves), b.pick_move(&moves));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Golden-ratio increment used to spread derived seeds.
const STREAM_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent generator for sub-stream `stream` of this seed.
    ///
    /// Depends only on the seed and `stream`, never on how far this
    /// generator has advanced.
    #[must_use]
    pub fn derive(&self, stream: u64) -> Self {
        Self::new(
            self.seed
                .wrapping_add(stream.wrapping_add(1).wrapping_mul(STREAM_STRIDE)),
        )
    }

    /// Uniform index in `0..n`. `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        self.inner.gen_range(0..n)
    }

    /// Uniformly chosen move, or `None` if `moves` is empty.
    pub fn pick_move(&mut self, moves: &[Move]) -> Option<Move> {
        if moves.is_empty() {
            None
        } else {
            Some(moves[self.below(moves.len())])
        }
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume from a captured position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable position of a `GameRng` stream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_moves() -> Vec<Move> {
        (0..9).map(Move::from_index).collect()
    }

    #[test]
    fn test_same_seed_same_moves() {
        let moves = all_moves();
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);

        for _ in 0..100 {
            assert_eq!(a.pick_move(&moves), b.pick_move(&moves));
        }
    }

    #[test]
    fn test_pick_covers_every_move() {
        let moves = all_moves();
        let mut rng = GameRng::new(1);
        let mut seen = [false; 9];

        for _ in 0..500 {
            let mv = rng.pick_move(&moves).unwrap();
            seen[mv.index().unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(rng.pick_move(&[]), None);
    }

    #[test]
    fn test_derive_ignores_progress() {
        let mut advanced = GameRng::new(42);
        for _ in 0..10 {
            advanced.below(9);
        }
        let fresh = GameRng::new(42);

        assert_eq!(advanced.derive(3).seed(), fresh.derive(3).seed());
        assert_ne!(fresh.derive(0).seed(), fresh.derive(1).seed());
        assert_ne!(fresh.derive(0).seed(), fresh.seed());
    }

    #[test]
    fn test_state_resumes_stream() {
        let mut rng = GameRng::new(42);
        for _ in 0..50 {
            rng.below(9);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.below(9)).collect();

        let json = serde_json::to_string(&state).unwrap();
        let restored_state: GameRngState = serde_json::from_str(&json).unwrap();
        let mut restored = GameRng::from_state(&restored_state);
        let actual: Vec<_> = (0..10).map(|_| restored.below(9)).collect();
        assert_eq!(expected, actual);
    }
}
