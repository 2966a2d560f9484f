use crate::pieces::Piece;

/// A single square of the board, holding at most one piece. Squares are created with the board
/// and only their occupant changes afterwards, through [`crate::Board`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    piece: Option<Piece>,
}

impl Square {
    pub(crate) const fn empty() -> Self {
        Self { piece: None }
    }

    pub(crate) const fn with_piece(piece: Piece) -> Self {
        Self { piece: Some(piece) }
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// The piece on this square, if any.
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    /// Remove and return the occupant.
    pub(crate) fn take(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    /// Set the occupant, returning whatever was there before.
    pub(crate) fn replace(&mut self, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.piece, piece)
    }
}
