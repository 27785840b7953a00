//! The game orchestrator: turn management and the full move protocol.

use crate::special::en_passant_allowed;
use crate::validate::validate_path;
use crate::{paths_for, Board, GridError, Path};
use pathchess_core::{
    BoardMove, Color, Location, MoveResult, MoveType, NotationError, Piece,
};

/// A move that has been applied to the board.
///
/// The game keeps only the immediately preceding one, which is the whole
/// of the history en passant needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub piece: Piece,
    pub from: Location,
    pub to: Location,
}

impl PlayedMove {
    /// Returns true if this was a pawn's two-square advance.
    pub fn is_double_advance(&self) -> bool {
        self.piece.kind == pathchess_core::PieceKind::Pawn
            && self.from.file() == self.to.file()
            && (self.to.rank().index() as i8 - self.from.rank().index() as i8).abs() == 2
    }
}

/// An occupied square with its piece and its currently legal paths.
#[derive(Debug, Clone)]
pub struct LocatedItem {
    pub location: Location,
    pub piece: Piece,
    pub paths: Vec<Path>,
}

/// A game in progress: the board, the side to move, and the one-move
/// history en passant needs.
///
/// All mutation goes through [`Game::play_move`]; rejected moves never
/// touch any state. A `Game` is exclusively owned; share one across
/// threads only behind external synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    turn: Option<Color>,
    last_move: Option<PlayedMove>,
}

impl Game {
    /// Starts a standard game, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::standard(),
            turn: Some(Color::White),
            last_move: None,
        }
    }

    /// Starts from a custom position. `turn: None` plays freeform: no turn
    /// enforcement and no turn alternation.
    pub fn from_board(board: Board, turn: Option<Color>) -> Self {
        Game {
            board,
            turn,
            last_move: None,
        }
    }

    /// Starts from a character-grid snapshot.
    pub fn from_grid(grid: &str, turn: Option<Color>) -> Result<Self, GridError> {
        Ok(Self::from_board(Board::from_grid(grid)?, turn))
    }

    /// Restores a game with its history, for the session-token codec.
    pub(crate) fn with_history(
        board: Board,
        turn: Option<Color>,
        last_move: Option<PlayedMove>,
    ) -> Self {
        Game {
            board,
            turn,
            last_move,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move, or `None` in freeform play.
    pub fn turn(&self) -> Option<Color> {
        self.turn
    }

    /// Returns the most recently applied move.
    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.last_move.as_ref()
    }

    /// Returns the legal paths for the piece on `from`: generated geometry,
    /// pruned by the predicate table, with ineligible en-passant offers
    /// removed. Empty when the square is empty.
    pub fn legal_paths_from(&self, from: Location) -> Vec<Path> {
        paths_for(&self.board, from)
            .iter()
            .map(|path| validate_path(&self.board, path))
            .filter(|path| !path.is_empty() && self.en_passant_eligible(path))
            .collect()
    }

    fn en_passant_eligible(&self, path: &Path) -> bool {
        match path.steps() {
            // En-passant offers are always their own single-step path.
            [step] if step.move_type == MoveType::EnPassant => {
                let mov = BoardMove::with_type(path.origin(), step.to, MoveType::EnPassant);
                en_passant_allowed(&self.board, self.last_move.as_ref(), &mov)
            }
            _ => true,
        }
    }

    /// Lists the legal moves from one square.
    pub fn moves_from(&self, from: Location) -> Vec<BoardMove> {
        self.legal_paths_from(from)
            .iter()
            .flat_map(|path| path.moves().collect::<Vec<_>>())
            .collect()
    }

    /// Lists the legal moves for one side.
    pub fn moves_for(&self, side: Color) -> Vec<BoardMove> {
        self.board
            .pieces()
            .filter(|(_, piece)| piece.owner == side)
            .flat_map(|(at, _)| self.moves_from(at))
            .collect()
    }

    /// Lists the legal moves for the whole board.
    pub fn moves(&self) -> Vec<BoardMove> {
        self.board
            .pieces()
            .flat_map(|(at, _)| self.moves_from(at))
            .collect()
    }

    /// Returns every occupied square with its piece and legal paths.
    pub fn located_items(&self) -> Vec<LocatedItem> {
        self.board
            .pieces()
            .map(|(location, piece)| LocatedItem {
                location,
                piece,
                paths: self.legal_paths_from(location),
            })
            .collect()
    }

    /// Parses a move token and plays it.
    pub fn play(&mut self, token: &str) -> Result<MoveResult, NotationError> {
        let mov: BoardMove = token.parse()?;
        Ok(self.play_move(mov))
    }

    /// Runs the full move protocol: turn check, legality check, application,
    /// special-case resolution, turn flip. Rejections leave the game
    /// untouched.
    pub fn play_move(&mut self, mov: BoardMove) -> MoveResult {
        let Some(mover) = self.board.piece_at(mov.from) else {
            return MoveResult::invalid(mov);
        };

        if let Some(turn) = self.turn {
            if mover.owner != turn {
                return MoveResult::incorrect_player(mov);
            }
        }

        // The requested destination (and type, when given) must appear among
        // the regenerated legal moves; Unknown adopts the legal step's type.
        let Some(legal) = self.moves_from(mov.from).into_iter().find(|legal| {
            legal.to == mov.to
                && (mov.move_type == MoveType::Unknown || mov.move_type == legal.move_type)
        }) else {
            return MoveResult::invalid(mov);
        };
        let move_type = legal.move_type;

        let promoted = match (move_type, mov.promotion) {
            (MoveType::Promotion, Some(kind)) if kind.is_promotion_target() => Some(kind),
            (MoveType::Promotion, _) => return MoveResult::invalid(mov),
            _ => None,
        };

        // Apply: defender first, then relocate the mover.
        match move_type {
            MoveType::Take | MoveType::TakeOnly => self.board.clear(mov.to),
            MoveType::Promotion if !self.board.is_empty_at(mov.to) => self.board.clear(mov.to),
            _ => {}
        }
        self.board.clear(mov.from);
        self.board.set(mov.to, mover.into());

        // Special-case resolution.
        match move_type {
            MoveType::EnPassant => {
                let passed = Location::new(mov.to.file(), mov.from.rank());
                self.board.clear(passed);
            }
            MoveType::Promotion => {
                if let Some(kind) = promoted {
                    self.board.set(mov.to, Piece::new(mover.owner, kind).into());
                }
            }
            _ => {}
        }

        if let Some(turn) = self.turn {
            self.turn = Some(turn.opposite());
        }
        self.last_move = Some(PlayedMove {
            piece: mover,
            from: mov.from,
            to: mov.to,
        });

        let resolved = BoardMove {
            from: mov.from,
            to: mov.to,
            move_type,
            promotion: promoted,
        };
        match move_type {
            MoveType::Take | MoveType::TakeOnly => MoveResult::take(resolved),
            MoveType::EnPassant => MoveResult::en_passant(resolved),
            MoveType::Promotion => MoveResult::promotion(resolved),
            _ => MoveResult::success(resolved),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
