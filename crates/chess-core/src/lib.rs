//! Core types for the mailbox chess rules engine.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Location`], [`File`], and [`Rank`] for board coordinates and
//!   algebraic notation
//! - [`Color`] for the two players
//! - [`PieceKind`], [`Piece`], and [`Promotion`] for piece representation
//! - [`MovePattern`] and [`MoveList`] for destination sets with move metadata

mod color;
mod location;
mod mov;
mod piece;

pub use color::Color;
pub use location::{File, Location, LocationParseError, Rank};
pub use mov::{MoveList, MoveMeta, MovePattern, Special};
pub use piece::{Piece, PieceKind, Promotion};
