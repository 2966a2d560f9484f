use crate::pieces::Piece;
use crate::tiles::Coords;
use std::fmt::{Display, Formatter};

/// A record of a single committed move. Created by [`crate::Board::make_move`] and never modified
/// afterwards.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    /// The square the piece moved from.
    pub start: Coords,
    /// The square the piece moved to.
    pub end: Coords,
    /// The piece that moved.
    pub piece_moved: Piece,
    /// The piece that was on `end` before the move, if any.
    pub piece_captured: Option<Piece>,
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }
}

impl Display for MoveRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}-{}", self.piece_moved, self.start, self.end)?;
        if let Some(captured) = self.piece_captured {
            write!(f, " x {captured}")?;
        }
        Ok(())
    }
}
