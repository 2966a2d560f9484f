use crate::error::BoardError;
use crate::error::BoardError::OutOfBounds;
use std::fmt::{Debug, Display, Formatter};

/// Number of rows (and columns) on the board.
pub const BOARD_LEN: u8 = 8;

/// The location of a single square on the board, ie, row and column. This struct is only a
/// reference to a location on the board, and does not contain any other information such as piece
/// placement, etc.
///
/// A [`Coords`] can only be created for a location that is actually on the board, so any
/// [`Coords`] can be used to look up a square without further bounds checking.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(i8, i8)", into = "(i8, i8)"))]
pub struct Coords {
    row: u8,
    col: u8,
}

impl Coords {
    /// Create new [`Coords`], checking that both row and column are in the range `0..8`.
    pub fn new(row: i8, col: i8) -> Result<Self, BoardError> {
        if Self::in_bounds(row, col) {
            Ok(Self { row: row as u8, col: col as u8 })
        } else {
            Err(OutOfBounds { row, col })
        }
    }

    /// Whether the given row and column refer to a square on the board.
    pub fn in_bounds(row: i8, col: i8) -> bool {
        let r = 0..(BOARD_LEN as i8);
        r.contains(&row) && r.contains(&col)
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Return the [`Coords`] reached by applying the given offset, or `None` if that would leave
    /// the board.
    pub fn offset(&self, offset: Offset) -> Option<Self> {
        Self::new(
            (self.row as i8).checked_add(offset.d_row)?,
            (self.col as i8).checked_add(offset.d_col)?
        ).ok()
    }

    /// The squares strictly between `self` and `other`, in order of travel. Empty if the two are
    /// adjacent or do not share a row, column or diagonal.
    pub fn tiles_between(&self, other: Coords) -> Vec<Coords> {
        let offset = Offset::between(*self, other);
        if !(offset.is_straight() || offset.is_diagonal()) {
            return vec![]
        }
        let step = offset.unit();
        let mut tiles: Vec<Coords> = vec![];
        let mut current = *self;
        while let Some(next) = current.offset(step) {
            if next == other {
                break
            }
            tiles.push(next);
            current = next;
        }
        tiles
    }
}

impl Debug for Coords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coords(row={}, col={})", self.row, self.col)
    }
}

impl Display for Coords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(i8, i8)> for Coords {
    type Error = BoardError;

    fn try_from(value: (i8, i8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl From<Coords> for (u8, u8) {
    fn from(value: Coords) -> Self {
        (value.row, value.col)
    }
}

impl From<Coords> for (i8, i8) {
    fn from(value: Coords) -> Self {
        (value.row as i8, value.col as i8)
    }
}

/// The displacement between two squares, as a signed number of rows and columns. A positive
/// `d_row` moves towards row 7; a positive `d_col` moves towards column 7.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Offset {
    pub d_row: i8,
    pub d_col: i8,
}

impl Offset {
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    /// The offset needed to get from `from` to `to`.
    pub fn between(from: Coords, to: Coords) -> Self {
        Self {
            d_row: (to.row as i8) - (from.row as i8),
            d_col: (to.col as i8) - (from.col as i8),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.d_row == 0 && self.d_col == 0
    }

    /// Whether the offset is along a single row or column (and non-zero).
    pub fn is_straight(&self) -> bool {
        (self.d_row == 0) != (self.d_col == 0)
    }

    /// Whether the offset is along a diagonal (and non-zero).
    pub fn is_diagonal(&self) -> bool {
        self.d_row != 0 && self.d_row.abs() == self.d_col.abs()
    }

    /// The larger of the absolute row and column displacement, ie, the number of king steps
    /// needed to cover the offset.
    pub fn chebyshev_len(&self) -> u8 {
        self.d_row.unsigned_abs().max(self.d_col.unsigned_abs())
    }

    /// An offset of at most one square along each axis, in the direction of `self`.
    pub fn unit(&self) -> Self {
        Self { d_row: self.d_row.signum(), d_col: self.d_col.signum() }
    }
}

/// Iterator over all squares on the board, in row-major order starting at row 0.
pub struct CoordsIterator {
    next: u8,
}

impl CoordsIterator {
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl Default for CoordsIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CoordsIterator {
    type Item = Coords;
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= BOARD_LEN * BOARD_LEN {
            return None
        }
        let coords = Coords { row: self.next / BOARD_LEN, col: self.next % BOARD_LEN };
        self.next += 1;
        Some(coords)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::BoardError::OutOfBounds;
    use crate::tiles::{Coords, CoordsIterator, Offset};

    #[test]
    fn test_coords_creation() {
        for r in 0..8 {
            for c in 0..8 {
                let t = Coords::new(r, c).unwrap();
                assert_eq!(t.row(), r as u8);
                assert_eq!(t.col(), c as u8);
            }
        }
        assert_eq!(Coords::new(8, 0), Err(OutOfBounds { row: 8, col: 0 }));
        assert_eq!(Coords::new(3, -1), Err(OutOfBounds { row: 3, col: -1 }));
        assert!(Coords::try_from((7, 7)).is_ok());
        assert!(Coords::try_from((0, 8)).is_err());
    }

    #[test]
    fn test_offsets() {
        let a = Coords::new(6, 3).unwrap();
        let b = Coords::new(4, 5).unwrap();
        let o = Offset::between(a, b);
        assert_eq!(o, Offset::new(-2, 2));
        assert!(o.is_diagonal());
        assert!(!o.is_straight());
        assert_eq!(o.unit(), Offset::new(-1, 1));
        assert_eq!(o.chebyshev_len(), 2);
        assert_eq!(a.offset(o), Some(b));
        assert_eq!(a.offset(Offset::new(2, 0)), None);
        let corner = Coords::new(7, 7).unwrap();
        assert_eq!(corner.offset(Offset::new(i8::MAX, 0)), None);
        assert_eq!(corner.offset(Offset::new(0, i8::MAX)), None);
        assert_eq!(Coords::new(0, 0).unwrap().offset(Offset::new(i8::MIN, 0)), None);

        let straight = Offset::between(a, Coords::new(6, 0).unwrap());
        assert!(straight.is_straight());
        assert!(!straight.is_diagonal());
        assert!(Offset::between(a, a).is_zero());
        assert!(!Offset::new(1, 2).is_straight());
        assert!(!Offset::new(1, 2).is_diagonal());
    }

    #[test]
    fn test_tiles_between() {
        let c = |r, c| Coords::new(r, c).unwrap();
        assert_eq!(c(7, 2).tiles_between(c(5, 0)), vec![c(6, 1)]);
        assert_eq!(c(5, 0).tiles_between(c(0, 5)), vec![c(4, 1), c(3, 2), c(2, 3), c(1, 4)]);
        assert_eq!(c(0, 0).tiles_between(c(0, 3)), vec![c(0, 1), c(0, 2)]);
        assert!(c(6, 3).tiles_between(c(5, 3)).is_empty());
        assert!(c(7, 1).tiles_between(c(5, 2)).is_empty());
    }

    #[test]
    fn test_iter_all() {
        let all: Vec<Coords> = CoordsIterator::new().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Coords::new(0, 0).unwrap());
        assert_eq!(all[9], Coords::new(1, 1).unwrap());
        assert_eq!(all[63], Coords::new(7, 7).unwrap());
    }
}
