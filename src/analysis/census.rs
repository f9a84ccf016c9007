//! Exhaustive census of the game tree.
//!
//! Walks every legal move sequence from the initial board and counts
//! finished games by result, plus the distinct boards met along the way.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Board, Player};
use crate::rules::{apply_move, initial_board, legal_moves, outcome, Outcome};

/// Counts over the full game tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTreeStats {
    /// Distinct move sequences that end on a terminal board.
    pub games: u64,

    /// Games won by X.
    pub x_wins: u64,

    /// Games won by O.
    pub o_wins: u64,

    /// Games ending in a draw.
    pub draws: u64,

    /// Distinct boards reachable by legal play, the empty board included.
    pub positions: usize,

    /// Distinct terminal boards.
    pub terminal_positions: usize,
}

impl GameTreeStats {
    /// Fraction of games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: Player) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        };
        wins as f64 / self.games as f64
    }
}

/// Census of the tree below `root`.
#[must_use]
pub fn game_tree_stats_from(root: &Board) -> GameTreeStats {
    let mut walker = Walker::default();
    walker.visit(root);

    let stats = GameTreeStats {
        positions: walker.positions.len(),
        terminal_positions: walker.terminals.len(),
        ..walker.stats
    };
    info!(
        games = stats.games,
        positions = stats.positions,
        terminal_positions = stats.terminal_positions,
        "game tree census"
    );
    stats
}

/// Census of the full game from the empty board.
#[must_use]
pub fn game_tree_stats() -> GameTreeStats {
    game_tree_stats_from(&initial_board())
}

#[derive(Default)]
struct Walker {
    stats: GameTreeStats,
    positions: FxHashSet<Board>,
    terminals: FxHashSet<Board>,
}

impl Walker {
    fn visit(&mut self, board: &Board) {
        self.positions.insert(*board);

        let result = outcome(board);
        if result.is_over() {
            self.terminals.insert(*board);
            self.stats.games += 1;
            match result {
                Outcome::Win(Player::X) => self.stats.x_wins += 1,
                Outcome::Win(Player::O) => self.stats.o_wins += 1,
                Outcome::Draw => self.stats.draws += 1,
                Outcome::InProgress => {}
            }
            return;
        }

        for mv in legal_moves(board) {
            // Moves come from legal_moves, so apply_move cannot fail here.
            if let Ok(next) = apply_move(board, mv) {
                self.visit(&next);
            }
        }
    }
}
