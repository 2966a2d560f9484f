use crate::error::ParseError;
use crate::error::ParseError::BadChar;
use crate::pieces::PieceType::{Bishop, King, Knight, Pawn, Queen, Rook};
use crate::pieces::Side::{Black, White};
use std::fmt::{Display, Formatter};

/// The two sides of the game.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Return the other side.
    pub fn other(&self) -> Self {
        match self {
            White => Black,
            Black => White,
        }
    }

    /// The direction in which this side's pawns advance, as a row displacement. White starts at
    /// the high-numbered rows and moves towards row 0.
    pub fn pawn_direction(&self) -> i8 {
        match self {
            White => -1,
            Black => 1,
        }
    }

    /// The row on which this side's pawns start.
    pub fn pawn_home_row(&self) -> u8 {
        match self {
            White => 6,
            Black => 1,
        }
    }

    /// The row on which this side's other pieces start.
    pub fn back_row(&self) -> u8 {
        match self {
            White => 7,
            Black => 0,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            White => write!(f, "white"),
            Black => write!(f, "black"),
        }
    }
}

/// The different types of piece. This set is closed; each type has its own movement rules,
/// implemented in [`crate::game::logic::MoveLogic`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    /// The piece types of the back row, from column 0 to column 7.
    pub const BACK_ROW: [PieceType; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

    /// Whether this type's movement rules depend on [`crate::MajorPieceRule`].
    pub fn is_major(&self) -> bool {
        matches!(self, Rook | Queen | King)
    }
}

impl From<PieceType> for char {
    fn from(value: PieceType) -> Self {
        match value {
            Pawn => 'p',
            Rook => 'r',
            Knight => 'n',
            Bishop => 'b',
            Queen => 'q',
            King => 'k',
        }
    }
}

/// A single piece: a type and the side it belongs to. Both are fixed for the lifetime of the piece.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
}

impl Piece {
    pub const fn new(piece_type: PieceType, side: Side) -> Self {
        Self { piece_type, side }
    }

    pub const fn white(piece_type: PieceType) -> Self {
        Self::new(piece_type, White)
    }

    pub const fn black(piece_type: PieceType) -> Self {
        Self::new(piece_type, Black)
    }

    pub fn is_white(&self) -> bool {
        self.side == White
    }

    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }
}

impl TryFrom<char> for Piece {
    type Error = ParseError;

    /// Parse a piece from its character: `PNBRQK` for white, `pnbrqk` for black.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        let side = if value.is_ascii_uppercase() { White } else { Black };
        let piece_type = match value.to_ascii_lowercase() {
            'p' => Pawn,
            'r' => Rook,
            'n' => Knight,
            'b' => Bishop,
            'q' => Queen,
            'k' => King,
            _ => return Err(BadChar(value))
        };
        Ok(Self::new(piece_type, side))
    }
}

impl From<Piece> for char {
    fn from(value: Piece) -> Self {
        let c: char = value.piece_type.into();
        match value.side {
            White => c.to_ascii_uppercase(),
            Black => c,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.side, self.piece_type)
    }
}
