//! Paths for stepping pieces (knight and king).

use crate::{Path, Step};
use pathchess_core::{Location, MoveType};

/// Emits one single-step path per in-bounds offset, twice: a `Take`-typed
/// step (move-or-capture) and a `Cover`-typed step for defended-square
/// bookkeeping.
pub(super) fn paths(from: Location, offsets: &[(i8, i8)]) -> Vec<Path> {
    let mut out = Vec::with_capacity(offsets.len() * 2);
    for &(df, dr) in offsets {
        let Some(to) = from.offset(df, dr) else {
            continue;
        };
        out.push(Path::with_steps(
            from,
            vec![Step::new(to, MoveType::Take)],
        ));
        out.push(Path::with_steps(
            from,
            vec![Step::new(to, MoveType::Cover)],
        ));
    }
    out
}
