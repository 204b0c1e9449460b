//! Game orchestration: turn sequence, move commits, promotion protocol and
//! outcome derivation.

use std::fmt;

use chess_core::{Color, Location, LocationParseError, MoveList, PieceKind, Promotion, Special};
use thiserror::Error;

use crate::board::Chessboard;
use crate::check::is_in_check;
use crate::legal::legal_moves;

/// Error type for move submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The destination is not in the legal-move set for the origin, or the
    /// origin does not hold a piece of the side to move.
    #[error("invalid move: {from}{to} is not available")]
    Invalid { from: Location, to: Location },

    /// A promotion move was committed without a prior promotion choice.
    #[error("promotion move {from}{to} committed without a promotion choice")]
    PromotionRequired { from: Location, to: Location },

    /// The game has already reached a terminal state.
    #[error("game has already ended")]
    GameOver,

    /// The move text could not be parsed as coordinates.
    #[error(transparent)]
    Location(#[from] LocationParseError),
}

/// The externally visible game outcome. Terminal once non-[`Playing`].
///
/// [`Playing`]: GameState::Playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    WhiteWins,
    BlackWins,
    Draw,
}

/// The derived game status, including the check annotation that
/// [`GameState`] collapses away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The game continues; `check` names the side whose king is attacked.
    Playing { check: Option<Color> },
    /// The side to move has no legal move and is in check.
    Checkmate { winner: Color },
    /// The side to move has no legal move but is not in check.
    Stalemate,
}

impl Status {
    /// Collapses to the external [`GameState`].
    pub fn game_state(self) -> GameState {
        match self {
            Status::Playing { .. } => GameState::Playing,
            Status::Checkmate {
                winner: Color::White,
            } => GameState::WhiteWins,
            Status::Checkmate {
                winner: Color::Black,
            } => GameState::BlackWins,
            Status::Stalemate => GameState::Draw,
        }
    }

    /// Returns true once the game can no longer continue.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Playing { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Playing { check: None } => write!(f, "playing"),
            Status::Playing { check: Some(c) } => write!(f, "playing, {c} in check"),
            Status::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Status::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// The game controller.
///
/// Owns the single live [`Chessboard`] exclusively; collaborators (display
/// layer, move sources) hold the controller by reference rather than going
/// through any process-wide singleton. All legality evaluation happens
/// before the live board is touched, so a rejected move leaves every piece
/// of state unchanged and the caller free to retry.
#[derive(Debug, Clone)]
pub struct Game {
    board: Chessboard,
    status: Status,
    promotion_choice: Option<Promotion>,
}

impl Game {
    /// Starts a game from the standard position.
    pub fn new() -> Self {
        Self::from_board(Chessboard::standard())
    }

    /// Starts a game from a custom position, deriving the status eagerly
    /// (the position may already be mate or stalemate).
    pub fn from_board(board: Chessboard) -> Self {
        let status = derive_status(&board);
        Game {
            board,
            status,
            promotion_choice: None,
        }
    }

    /// Returns the live board.
    pub fn board(&self) -> &Chessboard {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Color {
        self.board.to_move()
    }

    /// Returns the derived status, check annotation included.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the collapsed external game state.
    pub fn state(&self) -> GameState {
        self.status.game_state()
    }

    /// Returns true if the side to move is currently in check.
    pub fn is_check(&self) -> bool {
        is_in_check(&self.board, self.board.to_move())
    }

    /// Returns the legal moves for the piece at `from`.
    ///
    /// Empty when the cell is vacant, the occupant is not the side to move,
    /// or the game has ended.
    pub fn available_moves(&self, from: Location) -> MoveList {
        if self.status.is_terminal() {
            return MoveList::new();
        }
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.board.to_move() => legal_moves(&self.board, from),
            _ => MoveList::new(),
        }
    }

    /// Returns true iff the move is a pawn move landing on the last rank for
    /// its color. Callers should then supply [`set_promotion`] before
    /// committing.
    ///
    /// [`set_promotion`]: Game::set_promotion
    pub fn is_promotion_required(&self, from: Location, to: Location) -> bool {
        self.board
            .piece_at(from)
            .is_some_and(|p| p.kind == PieceKind::Pawn && to.row() == p.color.promotion_rank())
    }

    /// Stores the substitute piece used by the next promotion commit.
    pub fn set_promotion(&mut self, choice: Promotion) {
        self.promotion_choice = Some(choice);
    }

    /// Commits a half-move.
    ///
    /// Fails without touching the board when the game is over, the move is
    /// not in `available_moves(from)`, or a promotion commit lacks a prior
    /// [`set_promotion`] choice. On success the move is applied with all
    /// special-move side effects, the turn flips and the status is
    /// re-derived.
    ///
    /// [`set_promotion`]: Game::set_promotion
    pub fn apply_move(&mut self, from: Location, to: Location) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let Some(meta) = self.available_moves(from).get(to) else {
            return Err(MoveError::Invalid { from, to });
        };

        let promotion = if meta.special == Special::Promotion {
            let Some(choice) = self.promotion_choice.take() else {
                return Err(MoveError::PromotionRequired { from, to });
            };
            choice.kind()
        } else {
            PieceKind::Queen // unused by apply_unchecked for non-promotions
        };

        self.board.apply_unchecked(from, to, meta, promotion);
        self.status = derive_status(&self.board);
        Ok(())
    }

    /// Convenience over [`apply_move`] for 4-character extended notation
    /// ("E2E4").
    ///
    /// [`apply_move`]: Game::apply_move
    pub fn apply_extended_move(&mut self, text: &str) -> Result<(), MoveError> {
        let (from, to) = Location::pair_from_extended(text)?;
        self.apply_move(from, to)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives the status for the side now to move: no legal move anywhere means
/// checkmate (for the side that just moved) or stalemate; otherwise the game
/// goes on, annotated with a check marker when the king is attacked.
fn derive_status(board: &Chessboard) -> Status {
    let side = board.to_move();
    let in_check = is_in_check(board, side);

    let has_move = board
        .pieces_of(side)
        .any(|(from, _)| !legal_moves(board, from).is_empty());

    if has_move {
        Status::Playing {
            check: in_check.then_some(side),
        }
    } else if in_check {
        Status::Checkmate {
            winner: side.opponent(),
        }
    } else {
        Status::Stalemate
    }
}
