//! Session tokens: a game as one opaque, path-embeddable string.
//!
//! The engine runs behind a stateless request boundary, so the whole
//! session travels inside the request path: 64 grid characters, one turn
//! flag (`w`/`b`/`-`), and either `-` or the four coordinates of the
//! immediately preceding two-square pawn advance. That history field is all
//! en passant ever looks at, so the round trip preserves legal-move sets
//! and en-passant eligibility exactly.

use crate::game::PlayedMove;
use crate::{Board, Game, GridError};
use pathchess_core::{Color, Location, PieceKind};
use thiserror::Error;

/// Errors produced when decoding a session token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token must be 66 or 69 characters, got {0}")]
    BadLength(usize),

    #[error(transparent)]
    BadBoard(#[from] GridError),

    #[error("invalid turn flag '{0}'")]
    BadTurn(char),

    #[error("invalid history field '{0}'")]
    BadHistory(String),
}

impl Game {
    /// Encodes this game as a session token.
    pub fn to_token(&self) -> String {
        let mut token = self.board().grid();
        token.push(match self.turn() {
            Some(Color::White) => 'w',
            Some(Color::Black) => 'b',
            None => '-',
        });
        match self.last_move() {
            Some(prev) if prev.is_double_advance() => {
                token.push_str(&prev.from.to_algebraic());
                token.push_str(&prev.to.to_algebraic());
            }
            _ => token.push('-'),
        }
        token
    }

    /// Decodes a session token back into a game.
    pub fn from_token(token: &str) -> Result<Self, TokenError> {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() != 66 && chars.len() != 69 {
            return Err(TokenError::BadLength(chars.len()));
        }

        let grid: String = chars[..64].iter().collect();
        let board = Board::from_grid(&grid)?;

        let turn = match chars[64] {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            '-' => None,
            other => return Err(TokenError::BadTurn(other)),
        };

        let history: String = chars[65..].iter().collect();
        let last_move = if history == "-" {
            None
        } else {
            Some(decode_history(&board, &history)?)
        };

        Ok(Game::with_history(board, turn, last_move))
    }
}

/// The history field must name a pawn still standing on its landing square,
/// one two-square advance away from its origin.
fn decode_history(board: &Board, history: &str) -> Result<PlayedMove, TokenError> {
    let bad = || TokenError::BadHistory(history.to_string());

    let chars: Vec<char> = history.chars().collect();
    if chars.len() != 4 {
        return Err(bad());
    }
    let from = square(chars[0], chars[1]).ok_or_else(bad)?;
    let to = square(chars[2], chars[3]).ok_or_else(bad)?;

    let piece = board
        .piece_at(to)
        .filter(|piece| piece.kind == PieceKind::Pawn)
        .ok_or_else(bad)?;

    let played = PlayedMove { piece, from, to };
    if !played.is_double_advance() {
        return Err(bad());
    }
    Ok(played)
}

fn square(file: char, rank: char) -> Option<Location> {
    let mut token = String::with_capacity(2);
    token.push(file);
    token.push(rank);
    Location::from_algebraic(&token)
}
