//! Pawn paths.
//!
//! Pawns are the one direction-dependent piece: forward travel follows the
//! owner's color, captures are diagonal-only, and two stateful categories
//! (en passant, promotion) are offered structurally here and resolved by
//! the validators.

use crate::{Path, Step};
use pathchess_core::{Color, Location, MoveType};

/// Generates a pawn's candidate paths.
///
/// - One forward path: the one-step advance, plus the two-step advance when
///   standing on the start rank. Both steps share the path, so ordinary
///   truncation forbids jumping a blocked square.
/// - Per diagonal: a strict-capture step and a cover step, plus an
///   en-passant step when standing on the en-passant rank; eligibility is
///   decided later by the game state.
/// - Any step landing on the far rank is proposed as a promotion.
pub(super) fn paths(owner: Color, from: Location) -> Vec<Path> {
    let dir = owner.pawn_direction();
    let mut out = Vec::new();

    let mut forward = Path::new(from);
    if let Some(one) = from.offset(0, dir) {
        forward.push(Step::new(one, advance_type(owner, one)));
        if from.rank() == owner.pawn_start_rank() {
            if let Some(two) = from.offset(0, 2 * dir) {
                forward.push(Step::new(two, MoveType::Move));
            }
        }
    }
    if !forward.is_empty() {
        out.push(forward);
    }

    for df in [-1, 1] {
        let Some(to) = from.offset(df, dir) else {
            continue;
        };
        out.push(Path::with_steps(
            from,
            vec![Step::new(to, capture_type(owner, to))],
        ));
        out.push(Path::with_steps(
            from,
            vec![Step::new(to, MoveType::Cover)],
        ));
        if from.rank() == owner.en_passant_rank() {
            out.push(Path::with_steps(
                from,
                vec![Step::new(to, MoveType::EnPassant)],
            ));
        }
    }

    out
}

fn advance_type(owner: Color, to: Location) -> MoveType {
    if to.rank() == owner.promotion_rank() {
        MoveType::Promotion
    } else {
        MoveType::Move
    }
}

fn capture_type(owner: Color, to: Location) -> MoveType {
    if to.rank() == owner.promotion_rank() {
        MoveType::Promotion
    } else {
        MoveType::TakeOnly
    }
}
