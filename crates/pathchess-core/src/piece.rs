//! Piece and square-content representation.

use crate::Color;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the lowercase letter for this kind (`p n b r q k`).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parses a piece kind from its letter, case-insensitive.
    #[inline]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns true if a pawn may promote to this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece: an owner and a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Creates a new piece.
    #[inline]
    pub const fn new(owner: Color, kind: PieceKind) -> Self {
        Piece { owner, kind }
    }

    /// Returns the grid character for this piece: uppercase for White,
    /// lowercase for Black.
    pub const fn to_char(self) -> char {
        let c = self.kind.letter();
        match self.owner {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a grid character into a piece. Uppercase letters are White,
    /// lowercase are Black.
    pub const fn from_char(c: char) -> Option<Self> {
        let owner = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match PieceKind::from_letter(c) {
            Some(kind) => Some(Piece::new(owner, kind)),
            None => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.owner, self.kind)
    }
}

/// The contents of one board square.
///
/// Every square always holds a defined value; an unoccupied square is
/// `Occupant::Empty`, never an absent entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occupant {
    #[default]
    Empty,
    Piece(Piece),
}

impl Occupant {
    /// Returns true if the square is unoccupied.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// Returns the piece on the square, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Occupant::Empty => None,
            Occupant::Piece(p) => Some(p),
        }
    }

    /// Returns true if the square holds a piece of the given color.
    #[inline]
    pub const fn is_owned_by(self, color: Color) -> bool {
        match self {
            Occupant::Empty => false,
            Occupant::Piece(p) => p.owner as u8 == color as u8,
        }
    }
}

impl From<Piece> for Occupant {
    fn from(piece: Piece) -> Self {
        Occupant::Piece(piece)
    }
}
