//! The move-type predicate table.
//!
//! Each move category maps to the ordered list of board-aware checks a
//! candidate step must pass. The mapping is one exhaustive match over
//! [`MoveType`], so every category the generators can emit has its checks
//! by construction; there is no missing-entry failure mode.

use crate::Board;
use pathchess_core::{BoardMove, MoveType};

/// A board-aware check applied to one prospective step.
pub type MovePredicate = fn(&Board, &BoardMove) -> bool;

/// Returns the ordered predicate list for a move category.
pub fn predicates_for(move_type: MoveType) -> &'static [MovePredicate] {
    match move_type {
        MoveType::Move => &[destination_is_empty],
        MoveType::Take => &[destination_is_empty_or_enemy],
        MoveType::TakeOnly => &[destination_holds_enemy],
        // Eligibility against the previous move is the game state's check;
        // board-wise the landing square must be vacant.
        MoveType::EnPassant => &[destination_is_empty],
        MoveType::Promotion => &[promotion_landing_is_legal],
        MoveType::Cover => &[destination_holds_own],
        // Unknown is resolved against the generated step before any lookup;
        // a bare Unknown behaves as a plain move.
        MoveType::Unknown => &[destination_is_empty],
    }
}

fn destination_is_empty(board: &Board, mov: &BoardMove) -> bool {
    board.is_empty_at(mov.to)
}

fn destination_holds_enemy(board: &Board, mov: &BoardMove) -> bool {
    match board.piece_at(mov.from) {
        Some(mover) => board.is_owned_by(mov.to, mover.owner.opposite()),
        None => false,
    }
}

fn destination_holds_own(board: &Board, mov: &BoardMove) -> bool {
    match board.piece_at(mov.from) {
        Some(mover) => board.is_owned_by(mov.to, mover.owner),
        None => false,
    }
}

fn destination_is_empty_or_enemy(board: &Board, mov: &BoardMove) -> bool {
    destination_is_empty(board, mov) || destination_holds_enemy(board, mov)
}

/// A promoting advance keeps the pawn's movement rules: straight ahead onto
/// an empty square, or diagonal onto an enemy.
fn promotion_landing_is_legal(board: &Board, mov: &BoardMove) -> bool {
    if mov.from.file() == mov.to.file() {
        destination_is_empty(board, mov)
    } else {
        destination_holds_enemy(board, mov)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathchess_core::{Location, Piece};

    fn at(s: &str) -> Location {
        Location::from_algebraic(s).unwrap()
    }

    fn checks_pass(board: &Board, mov: &BoardMove) -> bool {
        predicates_for(mov.move_type)
            .iter()
            .all(|check| check(board, mov))
    }

    fn board_with(placements: &[(&str, char)]) -> Board {
        let mut board = Board::empty();
        for &(square, ch) in placements {
            board.set(at(square), Piece::from_char(ch).unwrap().into());
        }
        board
    }

    #[test]
    fn move_requires_empty_destination() {
        let board = board_with(&[("a1", 'R'), ("a3", 'p')]);
        let open = BoardMove::with_type(at("a1"), at("a2"), MoveType::Move);
        let blocked = BoardMove::with_type(at("a1"), at("a3"), MoveType::Move);
        assert!(checks_pass(&board, &open));
        assert!(!checks_pass(&board, &blocked));
    }

    #[test]
    fn take_falls_back_to_plain_move() {
        let board = board_with(&[("a1", 'R'), ("a3", 'p'), ("a4", 'P')]);
        let quiet = BoardMove::with_type(at("a1"), at("a2"), MoveType::Take);
        let capture = BoardMove::with_type(at("a1"), at("a3"), MoveType::Take);
        let own = BoardMove::with_type(at("a1"), at("a4"), MoveType::Take);
        assert!(checks_pass(&board, &quiet));
        assert!(checks_pass(&board, &capture));
        assert!(!checks_pass(&board, &own));
    }

    #[test]
    fn take_only_has_no_fallback() {
        let board = board_with(&[("e4", 'P'), ("d5", 'p')]);
        let capture = BoardMove::with_type(at("e4"), at("d5"), MoveType::TakeOnly);
        let empty = BoardMove::with_type(at("e4"), at("f5"), MoveType::TakeOnly);
        assert!(checks_pass(&board, &capture));
        assert!(!checks_pass(&board, &empty));
    }

    #[test]
    fn cover_requires_own_piece() {
        let board = board_with(&[("b1", 'N'), ("d2", 'P'), ("a3", 'p')]);
        let own = BoardMove::with_type(at("b1"), at("d2"), MoveType::Cover);
        let enemy = BoardMove::with_type(at("b1"), at("a3"), MoveType::Cover);
        let empty = BoardMove::with_type(at("b1"), at("c3"), MoveType::Cover);
        assert!(checks_pass(&board, &own));
        assert!(!checks_pass(&board, &enemy));
        assert!(!checks_pass(&board, &empty));
    }

    #[test]
    fn en_passant_landing_must_be_vacant() {
        let board = board_with(&[("e5", 'P'), ("d6", 'n')]);
        let onto_piece = BoardMove::with_type(at("e5"), at("d6"), MoveType::EnPassant);
        let onto_empty = BoardMove::with_type(at("e5"), at("f6"), MoveType::EnPassant);
        assert!(!checks_pass(&board, &onto_piece));
        assert!(checks_pass(&board, &onto_empty));
    }

    #[test]
    fn promotion_straight_needs_empty_square() {
        let board = board_with(&[("e7", 'P'), ("d8", 'r')]);
        let straight = BoardMove::with_type(at("e7"), at("e8"), MoveType::Promotion);
        let diagonal = BoardMove::with_type(at("e7"), at("d8"), MoveType::Promotion);
        let diagonal_empty = BoardMove::with_type(at("e7"), at("f8"), MoveType::Promotion);
        assert!(checks_pass(&board, &straight));
        assert!(checks_pass(&board, &diagonal));
        assert!(!checks_pass(&board, &diagonal_empty));
    }

    #[test]
    fn promotion_straight_blocked_by_any_piece() {
        let board = board_with(&[("e7", 'P'), ("e8", 'r')]);
        let straight = BoardMove::with_type(at("e7"), at("e8"), MoveType::Promotion);
        assert!(!checks_pass(&board, &straight));
    }

    #[test]
    fn every_move_type_has_checks() {
        for move_type in [
            MoveType::Move,
            MoveType::Take,
            MoveType::TakeOnly,
            MoveType::EnPassant,
            MoveType::Promotion,
            MoveType::Cover,
            MoveType::Unknown,
        ] {
            assert!(!predicates_for(move_type).is_empty());
        }
    }

    #[test]
    fn predicates_without_mover_fail_closed() {
        let board = board_with(&[("a3", 'p')]);
        // No piece on a1: ownership-relative checks cannot pass.
        let capture = BoardMove::with_type(at("a1"), at("a3"), MoveType::TakeOnly);
        assert!(!checks_pass(&board, &capture));
    }
}
