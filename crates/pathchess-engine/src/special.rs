//! Stateful rule checks that per-square predicates cannot express.

use crate::game::PlayedMove;
use crate::Board;
use pathchess_core::{BoardMove, Location, PieceKind};

/// Decides en passant eligibility for a prospective capture.
///
/// True iff the move is a pawn's diagonal advance onto an empty square, the
/// square beside the origin (destination file, origin rank) holds an
/// opposing pawn, and `last_move` records exactly that pawn double-advancing
/// onto that square on the immediately preceding turn. A missing piece,
/// a wrong kind or color, or stale history is ineligible.
pub fn en_passant_allowed(
    board: &Board,
    last_move: Option<&PlayedMove>,
    mov: &BoardMove,
) -> bool {
    let Some(mover) = board.piece_at(mov.from) else {
        return false;
    };
    if mover.kind != PieceKind::Pawn {
        return false;
    }

    let file_delta = mov.to.file().index() as i8 - mov.from.file().index() as i8;
    let rank_delta = mov.to.rank().index() as i8 - mov.from.rank().index() as i8;
    if file_delta.abs() != 1 || rank_delta != mover.owner.pawn_direction() {
        return false;
    }
    if !board.is_empty_at(mov.to) {
        return false;
    }

    let passed = Location::new(mov.to.file(), mov.from.rank());
    let Some(passed_pawn) = board.piece_at(passed) else {
        return false;
    };
    if passed_pawn.kind != PieceKind::Pawn || passed_pawn.owner != mover.owner.opposite() {
        return false;
    }

    match last_move {
        Some(prev) => {
            prev.is_double_advance() && prev.to == passed && prev.piece.owner == passed_pawn.owner
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathchess_core::{MoveType, Piece};

    fn at(s: &str) -> Location {
        Location::from_algebraic(s).unwrap()
    }

    fn board_with(placements: &[(&str, char)]) -> Board {
        let mut board = Board::empty();
        for &(square, ch) in placements {
            board.set(at(square), Piece::from_char(ch).unwrap().into());
        }
        board
    }

    fn double_advance(ch: char, from: &str, to: &str) -> PlayedMove {
        PlayedMove {
            piece: Piece::from_char(ch).unwrap(),
            from: at(from),
            to: at(to),
        }
    }

    fn capture(from: &str, to: &str) -> BoardMove {
        BoardMove::with_type(at(from), at(to), MoveType::EnPassant)
    }

    #[test]
    fn allowed_right_after_the_double_advance() {
        let board = board_with(&[("e5", 'P'), ("d5", 'p')]);
        let prev = double_advance('p', "d7", "d5");
        assert!(en_passant_allowed(&board, Some(&prev), &capture("e5", "d6")));
    }

    #[test]
    fn refused_when_the_passing_square_is_empty() {
        let board = board_with(&[("e5", 'P')]);
        let prev = double_advance('p', "d7", "d5");
        assert!(!en_passant_allowed(&board, Some(&prev), &capture("e5", "d6")));
    }

    #[test]
    fn refused_when_the_passing_square_holds_the_wrong_piece() {
        let board = board_with(&[("e5", 'P'), ("d5", 'b')]);
        let prev = double_advance('p', "d7", "d5");
        assert!(!en_passant_allowed(&board, Some(&prev), &capture("e5", "d6")));
    }

    #[test]
    fn refused_without_history() {
        let board = board_with(&[("e5", 'P'), ("d5", 'p')]);
        assert!(!en_passant_allowed(&board, None, &capture("e5", "d6")));
    }

    #[test]
    fn refused_when_the_advance_was_single_step() {
        let board = board_with(&[("e5", 'P'), ("d5", 'p')]);
        let prev = double_advance('p', "d6", "d5");
        assert!(!en_passant_allowed(&board, Some(&prev), &capture("e5", "d6")));
    }

    #[test]
    fn refused_when_history_is_stale() {
        // The double advance happened, but somewhere else.
        let board = board_with(&[("e5", 'P'), ("d5", 'p')]);
        let prev = double_advance('p', "h7", "h5");
        assert!(!en_passant_allowed(&board, Some(&prev), &capture("e5", "d6")));
    }

    #[test]
    fn refused_for_non_pawn_movers() {
        let board = board_with(&[("e5", 'B'), ("d5", 'p')]);
        let prev = double_advance('p', "d7", "d5");
        assert!(!en_passant_allowed(&board, Some(&prev), &capture("e5", "d6")));
    }

    #[test]
    fn refused_for_straight_advances() {
        let board = board_with(&[("e5", 'P'), ("d5", 'p')]);
        let prev = double_advance('p', "d7", "d5");
        let straight = BoardMove::with_type(at("e5"), at("e6"), MoveType::EnPassant);
        assert!(!en_passant_allowed(&board, Some(&prev), &straight));
    }

    #[test]
    fn black_captures_downward() {
        let board = board_with(&[("d4", 'p'), ("e4", 'P')]);
        let prev = double_advance('P', "e2", "e4");
        assert!(en_passant_allowed(&board, Some(&prev), &capture("d4", "e3")));
    }
}
