//! Paths for sliding pieces (rook, bishop, queen).

use crate::{Path, Step};
use pathchess_core::{Location, MoveType};

/// Emits one path per ray direction, each step `Take`-typed (move-or-capture;
/// the validator truncates at blockers and resolves quiet moves). Directions
/// with no in-bounds square are omitted.
pub(super) fn paths(from: Location, directions: &[(i8, i8)]) -> Vec<Path> {
    let mut out = Vec::with_capacity(directions.len());
    for &(df, dr) in directions {
        let mut path = Path::new(from);
        let mut next = from.offset(df, dr);
        while let Some(to) = next {
            path.push(Step::new(to, MoveType::Take));
            next = to.offset(df, dr);
        }
        if !path.is_empty() {
            out.push(path);
        }
    }
    out
}
