//! Path validation: pruning candidate paths against board content.

use crate::predicates::predicates_for;
use crate::{Board, Path, Step};
use pathchess_core::{BoardMove, MoveType};

/// Walks a candidate path and returns its legal prefix.
///
/// Steps are checked in order against the predicate table. The first step
/// failing any predicate stops the walk and is excluded; the steps before
/// it are kept in order. A kept step whose destination is occupied also
/// ends the walk, since nothing slides through a piece. Together those two
/// rules are the whole of sliding-piece blocking.
///
/// Kept steps are resolved: a `Take`-typed step that landed on an empty
/// square becomes a plain `Move`; one that landed on an enemy stays `Take`.
/// An empty result is a valid outcome (no legal squares along the ray).
pub fn validate_path(board: &Board, path: &Path) -> Path {
    let mut valid = Path::new(path.origin());
    for step in path.steps() {
        let mov = BoardMove::with_type(path.origin(), step.to, step.move_type);
        let checks = predicates_for(step.move_type);
        if !checks.iter().all(|check| check(board, &mov)) {
            break;
        }
        valid.push(Step::new(step.to, resolve(board, step)));
        if !board.is_empty_at(step.to) {
            break;
        }
    }
    valid
}

fn resolve(board: &Board, step: &Step) -> MoveType {
    match step.move_type {
        MoveType::Take if board.is_empty_at(step.to) => MoveType::Move,
        other => other,
    }
}
