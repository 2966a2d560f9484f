/// How rooks, queens and kings are allowed to move.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MajorPieceRule {
    /// Rook moves any distance along a row or column, queen along a row, column or diagonal, king
    /// one square in any direction. None of them may pass through another piece or capture a piece
    /// of their own side.
    Standard,
    /// Rook, queen and king may move to any square at all, including onto their own pieces. This
    /// reproduces the behaviour of older versions of this engine and applies to all three types
    /// together.
    Unrestricted,
}

/// A set of rules for a game.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ruleset {
    /// Movement rules for rooks, queens and kings.
    pub major_pieces: MajorPieceRule,
}

impl Default for Ruleset {
    fn default() -> Self {
        crate::preset::rules::STANDARD
    }
}
