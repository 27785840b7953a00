//! Core types for the pathchess rules engine.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Color`] for the two players
//! - [`File`], [`Rank`], and [`Location`] for board coordinates
//! - [`PieceKind`], [`Piece`], and [`Occupant`] for square contents
//! - [`MoveType`], [`BoardMove`], and [`MoveResult`] for move representation
//! - Coordinate-pair move notation parsing (e.g. `"e2e4"`, `"e7e8q"`)

mod color;
mod location;
mod mov;
mod piece;

pub use color::Color;
pub use location::{File, Location, Rank};
pub use mov::{BoardMove, MoveResult, MoveType, NotationError, Outcome};
pub use piece::{Occupant, Piece, PieceKind};
