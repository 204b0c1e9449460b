//! Two-player chess rules engine.
//!
//! This crate provides:
//! - [`Chessboard`] - mailbox board state with turn indicator, king cache
//!   and en-passant memory
//! - [`raw_pattern`] - per-piece geometric move generation, no king-safety
//!   filtering
//! - [`is_attacked`] / [`is_in_check`] - check detection over raw patterns
//! - [`legal_moves`] - simulate-then-discard legality filtering, castling
//!   injection and the king-adjacency exclusion
//! - [`Game`] - turn orchestration, transactional move commits, the
//!   promotion sub-protocol and outcome derivation
//! - [`handoff`](crate::handoff) - single-slot blocking move handoff for
//!   interactive collaborators
//!
//! # Architecture
//!
//! Legality is decided by simulation: each raw candidate is applied to a
//! cloned board and kept only if the mover's king ends up unattacked. The
//! check detector always consults raw patterns, never filtered ones, which
//! keeps the two layers from recursing into each other. The live board is
//! mutated only after a move has fully passed validation.
//!
//! # Example
//!
//! ```
//! use chess_rules::{Game, GameState};
//!
//! let mut game = Game::new();
//! let from = "E2".parse().unwrap();
//! let to = "E4".parse().unwrap();
//! assert!(game.available_moves(from).contains(to));
//! game.apply_move(from, to).unwrap();
//! assert_eq!(game.state(), GameState::Playing);
//! ```

mod board;
mod check;
mod game;
pub mod handoff;
mod legal;
mod movegen;

pub use board::{Chessboard, LastMove};
pub use check::{is_attacked, is_in_check};
pub use game::{Game, GameState, MoveError, Status};
pub use legal::{can_castle, legal_moves, CastleSide};
pub use movegen::raw_pattern;
