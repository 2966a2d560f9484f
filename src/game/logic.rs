use crate::board::Board;
use crate::error::InvalidMove;
use crate::error::InvalidMove::{BadMovement, BlockedByPiece, CaptureOwnPiece, NoPiece, NothingToCapture};
use crate::game::MoveValidity;
use crate::pieces::PieceType::{Bishop, King, Knight, Pawn, Queen, Rook};
use crate::pieces::{Piece, Side};
use crate::rules::MajorPieceRule::Unrestricted;
use crate::rules::Ruleset;
use crate::tiles::{Coords, Offset};

const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(1, 2),
    Offset::new(-1, 2),
    Offset::new(1, -2),
    Offset::new(-1, -2),
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(-2, 1),
    Offset::new(-2, -1),
];

/// Whether a piece of side `mover` may end its move on a square holding `occupant`. A square
/// holding one of the mover's own pieces can never be a destination.
pub fn not_capturing_own_piece(mover: Side, occupant: Option<Piece>) -> bool {
    occupant.map_or(true, |p| p.side != mover)
}

/// The movement rules for each piece type. This struct holds the rules for the game but no board
/// state; its methods take a reference to the board and never modify it, so they can be evaluated
/// before a move is committed (when `start` still holds the moving piece and `end` holds whatever
/// would be captured).
///
/// Turn order and ownership are not considered here; see [`crate::Game::check_move_validity`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveLogic {
    pub rules: Ruleset,
}

impl MoveLogic {
    pub fn new(rules: Ruleset) -> Self {
        Self { rules }
    }

    /// Check whether the piece at `start` may move to `end` under its movement rules, given the
    /// current occupancy of the board.
    pub fn check_piece_move(&self, board: &Board, start: Coords, end: Coords) -> MoveValidity {
        let Some(piece) = board.get_piece(start) else {
            return MoveValidity::Invalid(NoPiece)
        };
        if piece.piece_type.is_major() && self.rules.major_pieces == Unrestricted {
            return MoveValidity::Valid
        }
        let res = match piece.piece_type {
            Pawn => check_pawn(piece, board, start, end),
            Knight => check_knight(piece, board, start, end),
            Bishop => check_slide(piece, board, start, end, |o| o.is_diagonal()),
            Rook => check_slide(piece, board, start, end, |o| o.is_straight()),
            Queen => check_slide(piece, board, start, end, |o| o.is_straight() || o.is_diagonal()),
            King => check_king(piece, board, start, end),
        };
        res.into()
    }

    /// Whether the piece at `start` may move to `end`. See [`MoveLogic::check_piece_move`].
    pub fn is_move_valid(&self, board: &Board, start: Coords, end: Coords) -> bool {
        self.check_piece_move(board, start, end) == MoveValidity::Valid
    }
}

fn check_own_capture(piece: Piece, board: &Board, end: Coords) -> Result<(), InvalidMove> {
    if not_capturing_own_piece(piece.side, board.get_piece(end)) {
        Ok(())
    } else {
        Err(CaptureOwnPiece)
    }
}

fn check_path_clear(board: &Board, start: Coords, end: Coords) -> Result<(), InvalidMove> {
    if start.tiles_between(end).into_iter().any(|t| board.tile_occupied(t)) {
        Err(BlockedByPiece)
    } else {
        Ok(())
    }
}

fn check_pawn(piece: Piece, board: &Board, start: Coords, end: Coords) -> Result<(), InvalidMove> {
    let offset = Offset::between(start, end);
    let dir = piece.side.pawn_direction();
    if offset.d_col == 0 {
        let single = offset.d_row == dir;
        let double = offset.d_row == 2 * dir && start.row() == piece.side.pawn_home_row();
        if !(single || double) {
            return Err(BadMovement)
        }
        // Pawns cannot capture going forward, so the destination must be free as well.
        check_path_clear(board, start, end)?;
        if board.tile_occupied(end) {
            return Err(BlockedByPiece)
        }
        Ok(())
    } else if offset.d_col.abs() == 1 && offset.d_row == dir {
        match board.get_piece(end) {
            None => Err(NothingToCapture),
            Some(target) if target.side == piece.side => Err(CaptureOwnPiece),
            Some(_) => Ok(())
        }
    } else {
        Err(BadMovement)
    }
}

fn check_knight(piece: Piece, board: &Board, start: Coords, end: Coords) -> Result<(), InvalidMove> {
    check_own_capture(piece, board, end)?;
    if KNIGHT_OFFSETS.contains(&Offset::between(start, end)) {
        Ok(())
    } else {
        Err(BadMovement)
    }
}

/// Check a move by a sliding piece (bishop, rook, queen), where `shape_ok` decides which
/// directions the piece may travel in.
fn check_slide(
    piece: Piece,
    board: &Board,
    start: Coords,
    end: Coords,
    shape_ok: impl Fn(Offset) -> bool
) -> Result<(), InvalidMove> {
    check_own_capture(piece, board, end)?;
    if !shape_ok(Offset::between(start, end)) {
        return Err(BadMovement)
    }
    check_path_clear(board, start, end)
}

fn check_king(piece: Piece, board: &Board, start: Coords, end: Coords) -> Result<(), InvalidMove> {
    check_own_capture(piece, board, end)?;
    if Offset::between(start, end).chebyshev_len() == 1 {
        Ok(())
    } else {
        Err(BadMovement)
    }
}
