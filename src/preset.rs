pub mod rules {
    use crate::rules::MajorPieceRule::{Standard, Unrestricted};
    use crate::rules::Ruleset;

    /// Full movement rules for every piece type.
    pub const STANDARD: Ruleset = Ruleset {
        major_pieces: Standard,
    };

    /// Rook, queen and king accept any destination. Pawns, knights and bishops are checked as
    /// normal.
    pub const LEGACY: Ruleset = Ruleset {
        major_pieces: Unrestricted,
    };
}

pub mod boards {
    /// The standard starting layout, in the format used by [`crate::Board::from_display_str`].
    pub const STANDARD: &str = "rnbqkbnr
pppppppp
........
........
........
........
PPPPPPPP
RNBQKBNR";
}
