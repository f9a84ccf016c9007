//! Match play between two policies.
//!
//! `play_match` drives one game from the empty board; `Arena` repeats it
//! with per-match seeds and tallies the results.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{Board, Error, MoveRecord, Player, PlayerMap, Result};
use crate::rules::{apply_move, initial_board, is_terminal, outcome, whose_turn, Outcome};

use super::policy::Policy;

/// A finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Moves in the order they were played.
    pub moves: Vector<MoveRecord>,

    /// Board after the last move.
    pub final_board: Board,

    /// Result on the final board.
    pub outcome: Outcome,
}

impl MatchRecord {
    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether no move was played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Winner, if the match was not drawn.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }

    /// Every board of the match, starting with the empty board.
    ///
    /// Re-applies the recorded moves through the rules, so a tampered
    /// record fails with `Error::InvalidMove`.
    pub fn replay(&self) -> Result<Vec<Board>> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = initial_board();
        boards.push(board);

        for record in &self.moves {
            board = apply_move(&board, record.mv)?;
            boards.push(board);
        }

        Ok(boards)
    }
}

/// Play one match from the empty board. `x` moves first.
///
/// Fails if a policy picks an illegal move (`Error::InvalidMove`) or no
/// move on a live board (`Error::NoMoveChosen`).
pub fn play_match(x: &mut dyn Policy, o: &mut dyn Policy) -> Result<MatchRecord> {
    let mut board = initial_board();
    let mut moves = Vector::new();

    while !is_terminal(&board) {
        let mover = whose_turn(&board);
        let policy: &mut dyn Policy = match mover {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let mv = policy.choose_move(&board).ok_or_else(|| {
            warn!(policy = policy.name(), %mover, "no move chosen");
            Error::NoMoveChosen {
                policy: policy.name().to_string(),
            }
        })?;

        board = apply_move(&board, mv).inspect_err(|err| {
            warn!(policy = policy.name(), %mover, %mv, %err, "illegal move chosen");
        })?;

        debug!(policy = policy.name(), %mover, %mv, "move played");
        moves.push_back(MoveRecord::new(mover, mv, moves.len() as u8));
    }

    let record = MatchRecord {
        moves,
        final_board: board,
        outcome: outcome(&board),
    };
    info!(outcome = ?record.outcome, plies = record.len(), "match finished");
    Ok(record)
}

/// Arena configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Matches to play.
    pub games: usize,

    /// Seed of the first match; match `i` gets `seed_offset + i`.
    pub seed_offset: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed_offset: 0,
        }
    }
}

impl ArenaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of matches.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Results of a series of matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    wins: PlayerMap<u32>,
    draws: u32,
}

impl MatchTally {
    /// Count one finished match.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(player) => self.wins[player] += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    #[must_use]
    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player]
    }

    #[must_use]
    pub fn x_wins(&self) -> u32 {
        self.wins[Player::X]
    }

    #[must_use]
    pub fn o_wins(&self) -> u32 {
        self.wins[Player::O]
    }

    #[must_use]
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total matches recorded.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.x_wins() + self.o_wins() + self.draws
    }
}

/// Repeated matches between two policy factories.
#[derive(Clone, Debug, Default)]
pub struct Arena {
    config: ArenaConfig,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Play `config.games` matches. Each factory receives the match seed.
    pub fn run<X, O>(
        &self,
        mut make_x: impl FnMut(u64) -> X,
        mut make_o: impl FnMut(u64) -> O,
    ) -> Result<MatchTally>
    where
        X: Policy,
        O: Policy,
    {
        let mut tally = MatchTally::default();

        for i in 0..self.config.games {
            let seed = self.config.seed_offset.wrapping_add(i as u64);
            let mut x = make_x(seed);
            let mut o = make_o(seed);
            let record = play_match(&mut x, &mut o)?;
            tally.record(record.outcome);
        }

        info!(
            games = tally.games(),
            x_wins = tally.x_wins(),
            o_wins = tally.o_wins(),
            draws = tally.draws(),
            "arena finished"
        );
        Ok(tally)
    }
}
