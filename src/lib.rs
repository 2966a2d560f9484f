//! A move-legality engine for chess on an 8x8 board.
//!
//! The engine decides whether a single requested move is legal given the current board and whose
//! turn it is, and if so applies it. Check, checkmate, castling, en passant, promotion and draws
//! are not modelled.
//!
//! ```
//! use chess_rules::{Coords, Game, Player};
//!
//! let white = Player::white();
//! let black = Player::black();
//! let mut game = Game::new(white, black).unwrap();
//! let c = |r, c| Coords::new(r, c).unwrap();
//! assert!(!game.do_move(black, c(1, 3), c(2, 3)));
//! assert!(game.do_move(white, c(6, 3), c(4, 3)));
//! assert!(game.do_move(black, c(1, 3), c(2, 3)));
//! ```

#[cfg(test)]
#[macro_use]
mod utils;

mod board;
mod error;
pub mod game;
mod moves;
mod pieces;
mod player;
pub mod preset;
mod rules;
mod serde_utils;
mod tiles;

pub use crate::{
    board::{
        Board,
        square::Square,
    },
    error::{
        BoardError,
        GameError,
        InvalidMove,
        ParseError,
    },
    game::{
        Game,
        MoveValidity,
        logic::{MoveLogic, not_capturing_own_piece},
        state::GameState,
    },
    moves::MoveRecord,
    pieces::{
        Piece,
        PieceType,
        Side,
    },
    player::Player,
    rules::{
        MajorPieceRule,
        Ruleset,
    },
    tiles::{
        Coords,
        CoordsIterator,
        Offset,
        BOARD_LEN,
    },
};
