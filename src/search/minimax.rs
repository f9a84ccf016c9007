//! Exhaustive minimax search.
//!
//! `max_value` and `min_value` are mutually recursive and visit every
//! board below the one they are given. X maximizes, O minimizes. The root
//! driver `best_move` keeps the first move, in row-major order, whose value
//! is strictly better than everything seen before it.

use std::time::Instant;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument, trace};

use crate::core::{Board, Move, Player};
use crate::rules::{apply_move, is_terminal, legal_moves, utility, whose_turn};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Minimax search context.
///
/// Owns the configuration, the optional value cache and the statistics of
/// the most recent root search.
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch {
    /// Search configuration.
    config: SearchConfig,

    /// Values keyed by board and by the side whose operator (max for X,
    /// min for O) was applied to it. Empty unless `config.memoize`.
    cache: FxHashMap<(Board, Player), i32>,

    /// Search statistics.
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cache: FxHashMap::default(),
            stats: SearchStats::default(),
        }
    }

    /// Optimal move for the side to move, or `None` on a terminal board.
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        self.best_move_with_value(board).map(|(mv, _)| mv)
    }

    /// Optimal move together with the value it guarantees.
    #[instrument(level = "debug", skip(self), fields(memoize = self.config.memoize))]
    pub fn best_move_with_value(&mut self, board: &Board) -> Option<(Move, i32)> {
        if is_terminal(board) {
            return None;
        }

        let start = Instant::now();
        self.stats.reset();

        let mover = whose_turn(board);
        let values = self.root_values(board, mover);
        let best = select_best(mover, &values);

        self.stats.time_us = start.elapsed().as_micros() as u64;

        if let Some((mv, value)) = best {
            debug!(
                %mover,
                %mv,
                value,
                nodes = self.stats.nodes,
                time_us = self.stats.time_us,
                "best move"
            );
        }

        best
    }

    /// Minimax value of every legal move, in row-major order.
    ///
    /// Empty on a terminal board. Statistics accumulate across calls.
    pub fn move_values(&mut self, board: &Board) -> Vec<(Move, i32)> {
        if is_terminal(board) {
            return Vec::new();
        }
        self.root_values(board, whose_turn(board))
    }

    /// Value of the board for the side to move: `max_value` when X moves,
    /// `min_value` when O moves.
    pub fn value(&mut self, board: &Board) -> i32 {
        match whose_turn(board) {
            Player::X => self.max_value(board),
            Player::O => self.min_value(board),
        }
    }

    /// Utility X can guarantee when X is to move.
    pub fn max_value(&mut self, board: &Board) -> i32 {
        self.stats.nodes += 1;
        if let Some(value) = self.cached(board, Player::X) {
            return value;
        }

        let value = if is_terminal(board) {
            self.stats.terminal_nodes += 1;
            utility(board)
        } else {
            let mut value = i32::MIN;
            for mv in legal_moves(board) {
                let next = child(board, mv);
                value = value.max(self.min_value(&next));
            }
            value
        };

        self.store(board, Player::X, value);
        value
    }

    /// Utility O can hold X to when O is to move.
    pub fn min_value(&mut self, board: &Board) -> i32 {
        self.stats.nodes += 1;
        if let Some(value) = self.cached(board, Player::O) {
            return value;
        }

        let value = if is_terminal(board) {
            self.stats.terminal_nodes += 1;
            utility(board)
        } else {
            let mut value = i32::MAX;
            for mv in legal_moves(board) {
                let next = child(board, mv);
                value = value.min(self.max_value(&next));
            }
            value
        };

        self.store(board, Player::O, value);
        value
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of cached board values.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached value.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Value of each root move for `mover`, who picks among the replies.
    fn root_values(&mut self, board: &Board, mover: Player) -> Vec<(Move, i32)> {
        let moves = legal_moves(board);

        let values: Vec<(Move, i32)> = if self.config.parallel_root {
            let worker_config = self.config.clone().with_parallel_root(false);
            let results: Vec<(Move, i32, SearchStats)> = moves
                .as_slice()
                .par_iter()
                .map(|&mv| {
                    let mut worker = MinimaxSearch::new(worker_config.clone());
                    let value = worker.reply_value(&child(board, mv), mover);
                    (mv, value, worker.stats)
                })
                .collect();

            results
                .into_iter()
                .map(|(mv, value, stats)| {
                    self.stats.merge(&stats);
                    (mv, value)
                })
                .collect()
        } else {
            moves
                .into_iter()
                .map(|mv| (mv, self.reply_value(&child(board, mv), mover)))
                .collect()
        };

        for (mv, value) in &values {
            trace!(%mover, %mv, value, "root move");
        }

        values
    }

    /// Value of the board reached after `mover` played: the opponent's
    /// operator applies.
    fn reply_value(&mut self, board: &Board, mover: Player) -> i32 {
        match mover {
            Player::X => self.min_value(board),
            Player::O => self.max_value(board),
        }
    }

    fn cached(&mut self, board: &Board, operator: Player) -> Option<i32> {
        if !self.config.memoize {
            return None;
        }
        let hit = self.cache.get(&(*board, operator)).copied();
        if hit.is_some() {
            self.stats.cache_hits += 1;
        }
        hit
    }

    fn store(&mut self, board: &Board, operator: Player, value: i32) {
        if self.config.memoize {
            self.cache.insert((*board, operator), value);
        }
    }
}

/// Board after a move taken from `legal_moves(board)`.
fn child(board: &Board, mv: Move) -> Board {
    apply_move(board, mv)
        .unwrap_or_else(|err| unreachable!("generated move {mv} was rejected: {err}"))
}

/// First move with a strictly better value for `mover`, starting from the
/// worst possible bound.
fn select_best(mover: Player, values: &[(Move, i32)]) -> Option<(Move, i32)> {
    let mut best_value = match mover {
        Player::X => i32::MIN,
        Player::O => i32::MAX,
    };
    let mut best_move = None;

    for &(mv, value) in values {
        let improves = match mover {
            Player::X => value > best_value,
            Player::O => value < best_value,
        };
        if improves {
            best_value = value;
            best_move = Some(mv);
        }
    }

    best_move.map(|mv| (mv, best_value))
}

/// Optimal move for the side to move, or `None` on a terminal board.
///
/// Runs a fresh sequential, unmemoized search.
#[must_use]
pub fn best_move(board: &Board) -> Option<Move> {
    MinimaxSearch::default().best_move(board)
}

/// Utility X can guarantee from `board` with X to move.
#[must_use]
pub fn max_value(board: &Board) -> i32 {
    MinimaxSearch::default().max_value(board)
}

/// Utility O can hold X to from `board` with O to move.
#[must_use]
pub fn min_value(board: &Board) -> i32 {
    MinimaxSearch::default().min_value(board)
}
