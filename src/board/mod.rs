pub mod square;

use crate::board::square::Square;
use crate::error::ParseError::{BadLineCount, BadLineLen};
use crate::error::{BoardError, ParseError};
use crate::moves::MoveRecord;
use crate::pieces::PieceType::Pawn;
use crate::pieces::Side::{Black, White};
use crate::pieces::{Piece, PieceType, Side};
use crate::tiles::{Coords, CoordsIterator, BOARD_LEN};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const LEN: usize = BOARD_LEN as usize;

/// The 8x8 grid of squares. The board owns its squares for the whole game; it offers bounded
/// lookup and a raw relocation primitive ([`Board::make_move`]) but knows nothing of the rules.
/// Whether a move is legal is decided elsewhere (see [`crate::game::logic::MoveLogic`]) before
/// the board is asked to perform it.
///
/// Row 0 is black's back row and row 7 is white's back row.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    squares: [[Square; LEN]; LEN],
}

impl Board {
    /// Create a board with the standard starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for side in [Black, White] {
            board.place_pieces(side);
        }
        board
    }

    /// Create a board with no pieces on it.
    pub fn empty() -> Self {
        Self { squares: [[Square::empty(); LEN]; LEN] }
    }

    fn place_pieces(&mut self, side: Side) {
        let back_row = side.back_row() as usize;
        let pawn_row = side.pawn_home_row() as usize;
        for (col, piece_type) in PieceType::BACK_ROW.into_iter().enumerate() {
            self.squares[back_row][col] = Square::with_piece(Piece::new(piece_type, side));
            self.squares[pawn_row][col] = Square::with_piece(Piece::new(Pawn, side));
        }
    }

    /// Get the square at the given coordinates.
    pub fn square(&self, coords: Coords) -> &Square {
        &self.squares[coords.row() as usize][coords.col() as usize]
    }

    fn square_mut(&mut self, coords: Coords) -> &mut Square {
        &mut self.squares[coords.row() as usize][coords.col() as usize]
    }

    /// Get the square at the given row and column, returning an error if either is outside the
    /// board.
    pub fn square_at(&self, row: i8, col: i8) -> Result<&Square, BoardError> {
        Ok(self.square(Coords::new(row, col)?))
    }

    /// Get the piece that occupies the given square, if any.
    pub fn get_piece(&self, coords: Coords) -> Option<Piece> {
        self.square(coords).piece()
    }

    /// Check if there is any piece occupying a square.
    pub fn tile_occupied(&self, coords: Coords) -> bool {
        !self.square(coords).is_empty()
    }

    /// Place a piece at the given square, replacing whatever was there.
    pub fn set_piece(&mut self, coords: Coords, piece: Piece) {
        self.square_mut(coords).replace(Some(piece));
    }

    /// Remove any piece from the given square.
    pub fn clear_tile(&mut self, coords: Coords) {
        self.square_mut(coords).take();
    }

    /// Move the piece at `from` to `to`. This does not check whether the move is legal: any piece
    /// on `to` is simply replaced and reported as captured in the returned record. Returns an
    /// error (and leaves the board unchanged) if there is no piece at `from`.
    ///
    /// If `from` and `to` are the same square the piece stays where it is and nothing is captured.
    pub fn make_move(&mut self, from: Coords, to: Coords) -> Result<MoveRecord, BoardError> {
        let piece_moved = self.square_mut(from).take().ok_or(BoardError::EmptySquare(from))?;
        let piece_captured = self.square_mut(to).replace(Some(piece_moved));
        Ok(MoveRecord { start: from, end: to, piece_moved, piece_captured })
    }

    /// Iterate over all occupied squares of the given side, in row-major order.
    pub fn iter_occupied(&self, side: Side) -> impl Iterator<Item = (Coords, Piece)> + '_ {
        CoordsIterator::new()
            .filter_map(|c| self.get_piece(c).map(|p| (c, p)))
            .filter(move |(_, p)| p.side == side)
    }

    /// Count the pieces of the given side left on the board.
    pub fn count_pieces(&self, side: Side) -> usize {
        self.iter_occupied(side).count()
    }

    /// Parse a board from a string in the format output by [`Board::to_display_str`].
    pub fn from_display_str(s: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        if lines.len() != LEN {
            return Err(BadLineCount(lines.len()))
        }
        let mut board = Self::empty();
        for (r, line) in lines.into_iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != LEN {
                return Err(BadLineLen(chars.len()))
            }
            for (c, chr) in chars.into_iter().enumerate() {
                if chr != '.' {
                    board.squares[r][c] = Square::with_piece(Piece::try_from(chr)?);
                }
            }
        }
        Ok(board)
    }

    /// Return a string representing the board, one line per row starting at row 0. Empty squares
    /// are `.`, white pieces are upper case and black pieces are lower case.
    pub fn to_display_str(&self) -> String {
        let mut s = String::with_capacity(LEN * (LEN + 1));
        for row in &self.squares {
            for square in row {
                match square.piece() {
                    Some(piece) => s.push(piece.into()),
                    None => s.push('.'),
                }
            }
            s.push('\n');
        }
        s
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_str(s)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_display_str())
    }
}
