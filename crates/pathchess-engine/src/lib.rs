//! Path-based chess rules engine.
//!
//! This crate determines which moves are legal in a position, applies a
//! chosen move, and reports the outcome. The pipeline:
//!
//! 1. [`paths_for`] produces each piece's geometrically reachable candidate
//!    paths, one per direction of travel, bounded by board edges only.
//! 2. [`validate_path`] walks a candidate path against the board, pruning it
//!    with the per-move-type predicate table; the first disqualified step
//!    truncates the rest of the path, which is all it takes to model
//!    sliding-piece blocking.
//! 3. [`Game`] owns the board, the side to move, and the one-move history
//!    en passant needs, and drives the full move protocol: turn check,
//!    legality check, application, special-case resolution, turn flip.
//!
//! # Example
//!
//! ```
//! use pathchess_engine::Game;
//! use pathchess_core::Outcome;
//!
//! let mut game = Game::new();
//! let result = game.play("e2e4").unwrap();
//! assert_eq!(result.outcome, Outcome::Success);
//! assert!(game.play("e7e5").unwrap().is_success());
//! ```

mod board;
mod game;
mod grid;
mod path;
pub mod paths;
mod predicates;
mod special;
mod token;
mod validate;

pub use board::Board;
pub use game::{Game, LocatedItem, PlayedMove};
pub use grid::{GridError, EMPTY_SQUARE};
pub use path::{Path, Step};
pub use paths::paths_for;
pub use predicates::{predicates_for, MovePredicate};
pub use special::en_passant_allowed;
pub use token::TokenError;
pub use validate::validate_path;
