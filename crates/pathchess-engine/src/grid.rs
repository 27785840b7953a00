//! Character-grid board snapshots.
//!
//! A snapshot is 64 significant characters: 8 rows of 8, the top row being
//! rank 8 down to rank 1, files a to h left to right. Uppercase letters are
//! White pieces, lowercase are Black, using the standard initials
//! `K Q R B N P`; `.` marks an empty square. Whitespace between rows is
//! ignored so fixtures can be written as eight quoted rows.

use crate::Board;
use pathchess_core::{File, Location, Occupant, Piece, Rank};
use thiserror::Error;

/// The character denoting an empty square in a grid snapshot.
pub const EMPTY_SQUARE: char = '.';

/// Errors produced when parsing a grid snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("expected 64 squares, got {0}")]
    WrongLength(usize),

    #[error("invalid piece character '{ch}' at {at}")]
    BadPiece { ch: char, at: Location },
}

impl Board {
    /// Builds a board from a grid snapshot.
    pub fn from_grid(grid: &str) -> Result<Self, GridError> {
        let cells: Vec<char> = grid.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 64 {
            return Err(GridError::WrongLength(cells.len()));
        }

        let mut board = Board::empty();
        for (i, &ch) in cells.iter().enumerate() {
            // Row 0 of the grid is rank 8.
            let rank = Rank::ALL[7 - i / 8];
            let file = File::ALL[i % 8];
            let at = Location::new(file, rank);
            if ch == EMPTY_SQUARE {
                continue;
            }
            let piece = Piece::from_char(ch).ok_or(GridError::BadPiece { ch, at })?;
            board.set(at, Occupant::Piece(piece));
        }
        Ok(board)
    }

    /// Renders this board as the 64-character snapshot, rank 8 first.
    pub fn grid(&self) -> String {
        let mut out = String::with_capacity(64);
        for rank in Rank::ALL.iter().rev() {
            for file in File::ALL {
                match self.piece_at(Location::new(file, *rank)) {
                    Some(piece) => out.push(piece.to_char()),
                    None => out.push(EMPTY_SQUARE),
                }
            }
        }
        out
    }
}
