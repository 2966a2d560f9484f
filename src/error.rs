use crate::pieces::Side;
use crate::tiles::Coords;
use thiserror::Error;

/// Errors relating to structurally invalid access to the board. These indicate a programming
/// error on the caller's part rather than an illegal move.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum BoardError {
    /// The given row or column is outside the board.
    #[error("coordinates out of bounds: row {row}, col {col} (must be 0-7)")]
    OutOfBounds { row: i8, col: i8 },
    /// Tried to move a piece from a square that has no piece on it.
    #[error("no piece on source square {0}")]
    EmptySquare(Coords),
}

/// Errors that can occur when setting up a [`crate::Game`].
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum GameError {
    /// Both players given were on the same side. The given [`Side`] is the side they share.
    #[error("both players are on the {0} side")]
    SameSide(Side),
}

#[derive(Error, Debug, Eq, PartialEq, Clone)]
pub enum ParseError {
    /// Encountered a character that does not represent any piece.
    #[error("bad piece character: {0:?}")]
    BadChar(char),
    /// Tried to parse a board but encountered a line that was not the expected length. The given
    /// `usize` is the actual length.
    #[error("bad line length: {0}")]
    BadLineLen(usize),
    /// Tried to parse a board that did not have the expected number of lines. The given `usize`
    /// is the actual number of lines.
    #[error("bad line count: {0}")]
    BadLineCount(usize),
}

/// Reasons why a requested move may be rejected. A rejected move is a normal part of play and
/// leaves the game unchanged.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidMove {
    /// It is not the requesting player's turn.
    #[error("not this player's turn")]
    WrongPlayer,
    /// There is no piece on the start square.
    #[error("no piece on start square")]
    NoPiece,
    /// The piece on the start square belongs to the other side.
    #[error("piece belongs to the opponent")]
    OpponentPiece,
    /// The destination holds a piece of the mover's own side.
    #[error("cannot capture own piece")]
    CaptureOwnPiece,
    /// The piece cannot move in this way (wrong shape or distance).
    #[error("piece cannot move that way")]
    BadMovement,
    /// Another piece stands in the way.
    #[error("path is blocked by another piece")]
    BlockedByPiece,
    /// A pawn tried to move diagonally onto a square without an enemy piece.
    #[error("no piece to capture")]
    NothingToCapture,
}
