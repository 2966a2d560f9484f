use crate::pieces::Side::{Black, White};
use crate::pieces::{Piece, Side};

/// A participant in a game. A player is identified only by the side it plays; it is used to check
/// turn order and piece ownership and is not stored on the board.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    side: Side,
}

impl Player {
    pub const fn new(side: Side) -> Self {
        Self { side }
    }

    pub const fn white() -> Self {
        Self::new(White)
    }

    pub const fn black() -> Self {
        Self::new(Black)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_white_side(&self) -> bool {
        self.side == White
    }

    /// Whether the given piece belongs to this player.
    pub fn owns(&self, piece: Piece) -> bool {
        piece.side == self.side
    }
}
