//! Move representation and coordinate-pair notation.

use crate::{Location, PieceKind};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The category a candidate step belongs to.
///
/// `Take` carries a plain-move fallback: a `Take`-typed step may land on an
/// empty square (a quiet move) or on an opposing piece (a capture), and the
/// path validator resolves which one it was. `TakeOnly` has no fallback:
/// the destination must hold an opposing piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    /// Plain move onto an empty square.
    Move,
    /// Move-or-capture; resolved to `Move` or kept as `Take` at validation.
    Take,
    /// Capture only, e.g. a pawn's diagonal step.
    TakeOnly,
    /// En passant capture of a just-double-advanced pawn.
    EnPassant,
    /// Pawn step onto the far rank, replacing the pawn.
    Promotion,
    /// Defended-square marker; bookkeeping, never a playable move.
    Cover,
    /// Caller did not specify; adopts the generated step's type when the
    /// move is checked for legality.
    Unknown,
}

/// A requested or generated move: origin, destination, category, and the
/// promotion target when the move promotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardMove {
    pub from: Location,
    pub to: Location,
    pub move_type: MoveType,
    pub promotion: Option<PieceKind>,
}

impl BoardMove {
    /// Creates a move of unspecified type; the engine resolves the type
    /// against the legal step during validation.
    #[inline]
    pub const fn new(from: Location, to: Location) -> Self {
        BoardMove {
            from,
            to,
            move_type: MoveType::Unknown,
            promotion: None,
        }
    }

    /// Creates a move with an explicit type.
    #[inline]
    pub const fn with_type(from: Location, to: Location, move_type: MoveType) -> Self {
        BoardMove {
            from,
            to,
            move_type,
            promotion: None,
        }
    }

    /// Returns this move with the given promotion target.
    #[inline]
    pub const fn promoting_to(mut self, kind: PieceKind) -> Self {
        self.promotion = Some(kind);
        self
    }
}

/// Errors produced when parsing move notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("move token must be 4 or 5 characters, got {0}")]
    BadLength(usize),

    #[error("invalid square '{0}'")]
    BadSquare(String),

    #[error("invalid promotion piece '{0}'")]
    BadPromotion(char),
}

impl FromStr for BoardMove {
    type Err = NotationError;

    /// Parses a 4-or-5 character token: origin square, destination square,
    /// optional promotion letter (`q r b n`, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 && chars.len() != 5 {
            return Err(NotationError::BadLength(chars.len()));
        }

        let from = parse_square(chars[0], chars[1])?;
        let to = parse_square(chars[2], chars[3])?;

        let mut mov = BoardMove::new(from, to);
        if chars.len() == 5 {
            let kind = PieceKind::from_letter(chars[4])
                .filter(|k| k.is_promotion_target())
                .ok_or(NotationError::BadPromotion(chars[4]))?;
            mov = mov.promoting_to(kind);
        }
        Ok(mov)
    }
}

fn parse_square(file: char, rank: char) -> Result<Location, NotationError> {
    let mut token = String::with_capacity(2);
    token.push(file);
    token.push(rank);
    Location::from_algebraic(&token).ok_or(NotationError::BadSquare(token))
}

impl fmt::Display for BoardMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter())?;
        }
        Ok(())
    }
}

/// The outcome tag of an attempted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A plain move succeeded.
    Success,
    /// A capture succeeded.
    Take,
    /// An en passant capture succeeded.
    EnPassant,
    /// A promotion succeeded.
    Promotion,
    /// The moving piece does not belong to the side to move.
    IncorrectPlayer,
    /// The move is not legal.
    Invalid,
}

impl Outcome {
    /// Returns true for the successful outcomes.
    #[inline]
    pub const fn is_success(self) -> bool {
        !matches!(self, Outcome::IncorrectPlayer | Outcome::Invalid)
    }
}

/// The result of one `Move` operation: the outcome and the move it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub outcome: Outcome,
    pub mov: BoardMove,
}

impl MoveResult {
    /// A plain move succeeded.
    #[inline]
    pub const fn success(mov: BoardMove) -> Self {
        MoveResult {
            outcome: Outcome::Success,
            mov,
        }
    }

    /// A capture succeeded.
    #[inline]
    pub const fn take(mov: BoardMove) -> Self {
        MoveResult {
            outcome: Outcome::Take,
            mov,
        }
    }

    /// An en passant capture succeeded.
    #[inline]
    pub const fn en_passant(mov: BoardMove) -> Self {
        MoveResult {
            outcome: Outcome::EnPassant,
            mov,
        }
    }

    /// A promotion succeeded.
    #[inline]
    pub const fn promotion(mov: BoardMove) -> Self {
        MoveResult {
            outcome: Outcome::Promotion,
            mov,
        }
    }

    /// The mover does not belong to the side to move.
    #[inline]
    pub const fn incorrect_player(mov: BoardMove) -> Self {
        MoveResult {
            outcome: Outcome::IncorrectPlayer,
            mov,
        }
    }

    /// The move is not legal.
    #[inline]
    pub const fn invalid(mov: BoardMove) -> Self {
        MoveResult {
            outcome: Outcome::Invalid,
            mov,
        }
    }

    /// Returns true for the successful outcomes.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}
