//! Candidate paths: ordered steps along one direction of piece travel.

use pathchess_core::{BoardMove, Location, MoveType};

/// One candidate step: a destination square and the move category the
/// generator proposes for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub to: Location,
    pub move_type: MoveType,
}

impl Step {
    /// Creates a new step.
    #[inline]
    pub const fn new(to: Location, move_type: MoveType) -> Self {
        Step { to, move_type }
    }
}

/// An ordered sequence of candidate steps from one origin square,
/// representing one direction of travel: a single ray for a sliding piece,
/// or a single offset for a stepping piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    origin: Location,
    steps: Vec<Step>,
}

impl Path {
    /// Creates an empty path from the given origin.
    pub fn new(origin: Location) -> Self {
        Path {
            origin,
            steps: Vec::new(),
        }
    }

    /// Creates a path from an origin and its steps.
    pub fn with_steps(origin: Location, steps: Vec<Step>) -> Self {
        Path { origin, steps }
    }

    /// Returns the origin square.
    #[inline]
    pub fn origin(&self) -> Location {
        self.origin
    }

    /// Returns the steps in order.
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Appends a step.
    #[inline]
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Returns true if the path holds no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns the playable moves on this path. `Cover` steps mark defended
    /// squares and are not moves.
    pub fn moves(&self) -> impl Iterator<Item = BoardMove> + '_ {
        self.steps
            .iter()
            .filter(|step| step.move_type != MoveType::Cover)
            .map(move |step| BoardMove::with_type(self.origin, step.to, step.move_type))
    }
}
