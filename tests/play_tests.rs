//! Match play integration tests.

use rust_ttt::core::Move;
use rust_ttt::play::{
    play_match, Arena, ArenaConfig, MatchRecord, MinimaxPolicy, Policy, RandomPolicy,
};
use rust_ttt::rules::{initial_board, legal_moves, Outcome};
use rust_ttt::{Board, Error, GameRng, Player};

/// Always plays the top-left corner, legal or not.
struct Stubborn;

impl Policy for Stubborn {
    fn name(&self) -> &str {
        "stubborn"
    }

    fn choose_move(&mut self, _board: &Board) -> Option<Move> {
        Some(Move::new(0, 0))
    }
}

/// Plays the last legal move in row-major order.
struct LastCell;

impl Policy for LastCell {
    fn name(&self) -> &str {
        "last-cell"
    }

    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        legal_moves(board).last().copied()
    }
}

// =============================================================================
// Single Matches
// =============================================================================

#[test]
fn test_perfect_play_draws() {
    let record = play_match(&mut MinimaxPolicy::new(), &mut MinimaxPolicy::new()).unwrap();

    assert_eq!(record.outcome, Outcome::Draw);
    assert_eq!(record.final_board, "XXO OOX XOX".parse::<Board>().unwrap());
}

#[test]
fn test_record_alternates_players() {
    let record = play_match(&mut RandomPolicy::new(5), &mut RandomPolicy::new(6)).unwrap();

    for (i, mv) in record.moves.iter().enumerate() {
        let expected = if i % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(mv.player, expected);
        assert_eq!(mv.ply as usize, i);
    }
}

#[test]
fn test_replay_matches_record() {
    let record = play_match(&mut MinimaxPolicy::new(), &mut RandomPolicy::new(11)).unwrap();
    let boards = record.replay().unwrap();

    assert_eq!(boards.len(), record.len() + 1);
    assert_eq!(boards[0], initial_board());
    assert_eq!(boards[record.len()], record.final_board);
}

#[test]
fn test_minimax_punishes_weak_play() {
    // LastCell as O fills from the bottom right, which loses to perfect play.
    let record = play_match(&mut MinimaxPolicy::new(), &mut LastCell).unwrap();
    assert_eq!(record.winner(), Some(Player::X));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_illegal_policy_move_is_invalid_move() {
    let err = play_match(&mut Stubborn, &mut Stubborn).unwrap_err();
    assert_eq!(err, Error::InvalidMove { row: 0, col: 0 });
}

#[test]
fn test_policy_without_move_fails() {
    struct Silent;

    impl Policy for Silent {
        fn name(&self) -> &str {
            "silent"
        }

        fn choose_move(&mut self, _board: &Board) -> Option<Move> {
            None
        }
    }

    let err = play_match(&mut RandomPolicy::new(0), &mut Silent).unwrap_err();
    assert_eq!(
        err,
        Error::NoMoveChosen {
            policy: "silent".to_string()
        }
    );
}

// =============================================================================
// Arena
// =============================================================================

#[test]
fn test_minimax_never_loses_as_x() {
    let arena = Arena::new(ArenaConfig::new().with_games(30));
    let tally = arena
        .run(|_| MinimaxPolicy::new(), RandomPolicy::new)
        .unwrap();

    assert_eq!(tally.games(), 30);
    assert_eq!(tally.o_wins(), 0);
}

#[test]
fn test_minimax_never_loses_as_o() {
    let arena = Arena::new(ArenaConfig::new().with_games(30).with_seed_offset(1_000));
    let tally = arena
        .run(RandomPolicy::new, |_| MinimaxPolicy::new())
        .unwrap();

    assert_eq!(tally.games(), 30);
    assert_eq!(tally.x_wins(), 0);
}

#[test]
fn test_arena_is_deterministic() {
    let arena = Arena::new(ArenaConfig::new().with_games(25).with_seed_offset(7));
    let o_policy = |seed| RandomPolicy::from_rng(GameRng::new(seed).derive(1));
    let a = arena.run(RandomPolicy::new, o_policy).unwrap();
    let b = arena.run(RandomPolicy::new, o_policy).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_arena_stops_on_error() {
    let arena = Arena::new(ArenaConfig::new().with_games(3));
    let result = arena.run(|_| Stubborn, |_| Stubborn);
    assert!(matches!(result, Err(Error::InvalidMove { .. })));
}

#[test]
fn test_match_record_json() {
    let record = play_match(&mut RandomPolicy::new(21), &mut MinimaxPolicy::new()).unwrap();
    let json = serde_json::to_string(&record).unwrap();
    let back: MatchRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back, record);
    assert_eq!(back.replay().unwrap().last(), Some(&record.final_board));
}
