//! Per-piece geometric path generation.
//!
//! Generation is pure geometry: board edges bound every path, but no
//! occupancy is consulted; the path validator prunes against board content
//! afterwards. Dispatch over piece kinds is an exhaustive match, so an
//! unsupported kind cannot exist.

mod pawn;
mod sliders;
mod steppers;

use crate::{Board, Path};
use pathchess_core::{Location, PieceKind};

/// The four orthogonal ray directions.
const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// The four diagonal ray directions.
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The knight's eight L-shaped offsets.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The king's eight adjacent offsets.
const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Generates the candidate paths for the piece standing on `from`.
///
/// Returns no paths when the square is empty. The board is consulted only
/// for the origin piece itself (its kind sets the geometry, its color the
/// pawn direction).
pub fn paths_for(board: &Board, from: Location) -> Vec<Path> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    match piece.kind {
        PieceKind::Pawn => pawn::paths(piece.owner, from),
        PieceKind::Knight => steppers::paths(from, &KNIGHT_OFFSETS),
        PieceKind::King => steppers::paths(from, &KING_OFFSETS),
        PieceKind::Rook => sliders::paths(from, &ORTHOGONALS),
        PieceKind::Bishop => sliders::paths(from, &DIAGONALS),
        PieceKind::Queen => {
            let mut paths = sliders::paths(from, &ORTHOGONALS);
            paths.extend(sliders::paths(from, &DIAGONALS));
            paths
        }
    }
}
