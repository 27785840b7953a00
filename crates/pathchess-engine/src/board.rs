//! Board storage: an 8x8 grid of occupants indexed by validated locations.

use pathchess_core::{Color, File, Location, Occupant, Piece, PieceKind, Rank};

/// An 8x8 board.
///
/// Storage is a fixed zero-based array; every access is indexed by a
/// [`Location`], whose construction already proved both coordinates valid,
/// so lookups never bounds-check or fail. Every square always holds a
/// defined [`Occupant`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // squares[rank][file]
    squares: [[Occupant; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Creates a board with every square empty.
    pub fn empty() -> Self {
        Board {
            squares: [[Occupant::Empty; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (file, &kind) in File::ALL.iter().zip(BACK_RANK.iter()) {
            board.set(
                Location::new(*file, Rank::R1),
                Piece::new(Color::White, kind).into(),
            );
            board.set(
                Location::new(*file, Rank::R8),
                Piece::new(Color::Black, kind).into(),
            );
        }
        for file in File::ALL {
            board.set(
                Location::new(file, Rank::R2),
                Piece::new(Color::White, PieceKind::Pawn).into(),
            );
            board.set(
                Location::new(file, Rank::R7),
                Piece::new(Color::Black, PieceKind::Pawn).into(),
            );
        }
        board
    }

    /// Returns the occupant of the given square.
    #[inline]
    pub fn occupant(&self, at: Location) -> Occupant {
        self.squares[at.rank().index() as usize][at.file().index() as usize]
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, at: Location) -> Option<Piece> {
        self.occupant(at).piece()
    }

    /// Replaces the occupant of the given square.
    #[inline]
    pub fn set(&mut self, at: Location, occupant: Occupant) {
        self.squares[at.rank().index() as usize][at.file().index() as usize] = occupant;
    }

    /// Empties the given square.
    #[inline]
    pub fn clear(&mut self, at: Location) {
        self.set(at, Occupant::Empty);
    }

    /// Returns true if the given square is unoccupied.
    #[inline]
    pub fn is_empty_at(&self, at: Location) -> bool {
        self.occupant(at).is_empty()
    }

    /// Returns true if the given square holds a piece of the given color.
    #[inline]
    pub fn is_owned_by(&self, at: Location, color: Color) -> bool {
        self.occupant(at).is_owned_by(color)
    }

    /// Enumerates every occupied square with its piece, in rank/file order.
    pub fn pieces(&self) -> impl Iterator<Item = (Location, Piece)> + '_ {
        Location::all().filter_map(move |at| self.piece_at(at).map(|piece| (at, piece)))
    }

    /// Counts the occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.pieces().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for Board {
    /// Renders the board as the 8-row character grid, rank 8 first.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, rank) in Rank::ALL.iter().rev().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for file in File::ALL {
                let c = match self.piece_at(Location::new(file, *rank)) {
                    Some(piece) => piece.to_char(),
                    None => crate::grid::EMPTY_SQUARE,
                };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Location {
        Location::from_algebraic(s).unwrap()
    }

    #[test]
    fn empty_board() {
        let board = Board::empty();
        assert_eq!(board.occupied_count(), 0);
        assert!(board.is_empty_at(at("e4")));
    }

    #[test]
    fn standard_setup() {
        let board = Board::standard();
        assert_eq!(board.occupied_count(), 32);
        assert_eq!(
            board.piece_at(at("e1")),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(at("d8")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(at("a2")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            board.piece_at(at("h7")),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert!(board.is_empty_at(at("e4")));
    }

    #[test]
    fn set_and_clear() {
        let mut board = Board::empty();
        let rook = Piece::new(Color::White, PieceKind::Rook);
        board.set(at("a1"), rook.into());
        assert_eq!(board.piece_at(at("a1")), Some(rook));
        assert!(board.is_owned_by(at("a1"), Color::White));
        assert!(!board.is_owned_by(at("a1"), Color::Black));

        board.clear(at("a1"));
        assert!(board.is_empty_at(at("a1")));
    }

    #[test]
    fn pieces_in_rank_file_order() {
        let board = Board::standard();
        let first: Vec<Location> = board.pieces().map(|(l, _)| l).take(9).collect();
        assert_eq!(first[0], at("a1"));
        assert_eq!(first[7], at("h1"));
        assert_eq!(first[8], at("a2"));
    }

    #[test]
    fn display_renders_grid() {
        let board = Board::standard();
        let text = board.to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], "rnbqkbnr");
        assert_eq!(rows[1], "pppppppp");
        assert_eq!(rows[6], "PPPPPPPP");
        assert_eq!(rows[7], "RNBQKBNR");
    }
}
