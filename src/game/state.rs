use crate::board::Board;
use crate::pieces::Side;
use crate::pieces::Side::White;

/// The state that changes from one move to the next: the board and whose turn it is.
///
/// The turn cycle has exactly two states, waiting for white and waiting for black, represented by
/// `side_to_play`. It starts at white and flips on every committed move; a rejected move leaves it
/// unchanged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Board state, ie, the current pieces on the board.
    pub board: Board,
    /// The side whose turn it is.
    pub side_to_play: Side,
    /// Number of moves that have been committed by either side.
    pub turn: usize,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        Self { board, side_to_play: White, turn: 0 }
    }

    /// Move on to the other side's turn.
    pub(crate) fn advance(&mut self) {
        self.side_to_play = self.side_to_play.other();
        self.turn += 1;
    }
}
