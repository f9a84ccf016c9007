//! Tic-Tac-Toe rules.
//!
//! - Whose turn it is, inferred from mark counts
//! - Which moves are legal and what they produce
//! - Win, draw and terminal detection, and the utility of a finished game
//!
//! The search calls into these functions but never interprets the board
//! itself.

pub mod engine;
pub mod lines;

pub use engine::{
    apply_move, initial_board, is_legal, is_terminal, legal_moves, outcome, utility, whose_turn,
    winner, Outcome,
};
pub use lines::WINNING_LINES;
