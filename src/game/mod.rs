pub mod logic;
pub mod state;

use crate::board::Board;
use crate::error::InvalidMove::{NoPiece, OpponentPiece, WrongPlayer};
use crate::error::{GameError, InvalidMove};
use crate::game::logic::MoveLogic;
use crate::game::state::GameState;
use crate::game::MoveValidity::{Invalid, Valid};
use crate::moves::MoveRecord;
use crate::pieces::{Piece, Side};
use crate::player::Player;
use crate::preset;
use crate::rules::Ruleset;
use crate::tiles::Coords;
use tracing::{debug, warn};

/// Whether a move is valid.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveValidity {
    /// Move is valid.
    Valid,
    /// Move is invalid, for the given reason.
    Invalid(InvalidMove),
}

impl From<Result<(), InvalidMove>> for MoveValidity {
    fn from(value: Result<(), InvalidMove>) -> Self {
        match value {
            Ok(()) => Valid,
            Err(reason) => Invalid(reason),
        }
    }
}

/// A struct representing a single game, including the board, the two players, whose turn it is
/// and a record of all committed moves and captured pieces. This struct also keeps the game state
/// before each move, to allow undoing moves.
///
/// A [`Game`] is plain owned data with no internal locking. Callers that share one between threads
/// must make sure only one move is processed at a time.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    logic: MoveLogic,
    state: GameState,
    white: Player,
    black: Player,
    move_history: Vec<MoveRecord>,
    captured: Vec<Piece>,
    state_history: Vec<GameState>,
}

impl Game {
    /// Create a new [`Game`] with standard rules and the standard starting layout. Exactly one of
    /// the two players must be on the white side; the order in which they are given does not
    /// matter.
    pub fn new(player_a: Player, player_b: Player) -> Result<Self, GameError> {
        Self::with_rules(preset::rules::STANDARD, Board::new(), player_a, player_b)
    }

    /// Create a new [`Game`] from the given rules and starting board. White plays first.
    pub fn with_rules(
        rules: Ruleset,
        board: Board,
        player_a: Player,
        player_b: Player
    ) -> Result<Self, GameError> {
        let (white, black) = match (player_a.side(), player_b.side()) {
            (Side::White, Side::Black) => (player_a, player_b),
            (Side::Black, Side::White) => (player_b, player_a),
            (side, _) => {
                warn!(%side, "refusing to create game with two players on the same side");
                return Err(GameError::SameSide(side))
            }
        };
        debug!(?rules, "new game");
        Ok(Self {
            logic: MoveLogic::new(rules),
            state: GameState::new(board),
            white,
            black,
            move_history: vec![],
            captured: vec![],
            state_history: vec![],
        })
    }

    /// The current board, for inspection.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> Ruleset {
        self.logic.rules
    }

    pub fn white_side_player(&self) -> Player {
        self.white
    }

    pub fn black_side_player(&self) -> Player {
        self.black
    }

    /// The side whose turn it is.
    pub fn side_to_play(&self) -> Side {
        self.state.side_to_play
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        match self.state.side_to_play {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }

    /// Number of moves committed so far.
    pub fn turn(&self) -> usize {
        self.state.turn
    }

    /// All committed moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    /// All pieces captured so far, oldest first.
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Check whether `player` may move the piece at `start` to `end` right now: it must be the
    /// player's turn, the piece must belong to the player and the piece's movement rules must
    /// allow the move. Does not change anything.
    pub fn check_move_validity(&self, player: Player, start: Coords, end: Coords) -> MoveValidity {
        if player != self.current_player() {
            return Invalid(WrongPlayer)
        }
        match self.state.board.get_piece(start) {
            None => Invalid(NoPiece),
            Some(piece) if !player.owns(piece) => Invalid(OpponentPiece),
            Some(_) => self.logic.check_piece_move(&self.state.board, start, end),
        }
    }

    /// Check the move and, if it is valid, perform it: update the board, record the move and any
    /// capture and pass the turn to the other side. Returns the record of the move, or the reason
    /// it was rejected. A rejected move changes nothing.
    pub fn try_move(
        &mut self,
        player: Player,
        start: Coords,
        end: Coords
    ) -> Result<MoveRecord, InvalidMove> {
        if let Invalid(reason) = self.check_move_validity(player, start, end) {
            debug!(side = %player.side(), %start, %end, %reason, "move rejected");
            return Err(reason)
        }
        let before = self.state;
        let record = self.state.board.make_move(start, end).map_err(|_| NoPiece)?;
        if let Some(captured) = record.piece_captured {
            self.captured.push(captured);
        }
        self.move_history.push(record);
        self.state_history.push(before);
        self.state.advance();
        debug!(turn = self.state.turn, %record, "move committed");
        Ok(record)
    }

    /// Move the piece at `start` to `end` on behalf of `player`. Returns `true` if the move was
    /// legal and has been made; `false` means the move was rejected and the game is unchanged.
    pub fn do_move(&mut self, player: Player, start: Coords, end: Coords) -> bool {
        self.try_move(player, start, end).is_ok()
    }

    /// Undo the most recent move of the game, restoring the board, turn, history and captured
    /// pieces. Returns a record of the move that was undone.
    pub fn undo_last_move(&mut self) -> Option<MoveRecord> {
        let state = self.state_history.pop()?;
        self.state = state;
        let record = self.move_history.pop()?;
        if record.is_capture() {
            self.captured.pop();
        }
        debug!(%record, "move undone");
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::error::GameError::SameSide;
    use crate::error::InvalidMove::{BadMovement, BlockedByPiece, NoPiece, OpponentPiece, WrongPlayer};
    use crate::game::Game;
    use crate::game::MoveValidity::{Invalid, Valid};
    use crate::pieces::Piece;
    use crate::pieces::PieceType::{Knight, Pawn, Queen};
    use crate::pieces::Side::{Black, White};
    use crate::player::Player;
    use crate::preset::rules;
    use crate::tiles::Coords;
    use std::str::FromStr;

    fn c(row: i8, col: i8) -> Coords {
        Coords::new(row, col).unwrap()
    }

    #[test]
    fn test_new_game() {
        assert_eq!(Game::new(Player::white(), Player::white()), Err(SameSide(White)));
        assert_eq!(Game::new(Player::black(), Player::black()), Err(SameSide(Black)));

        let g = Game::new(Player::black(), Player::white()).unwrap();
        assert_eq!(g.white_side_player(), Player::white());
        assert_eq!(g.black_side_player(), Player::black());
        let g = Game::new(Player::white(), Player::black()).unwrap();
        assert_eq!(g.white_side_player(), Player::white());
        assert_eq!(g.black_side_player(), Player::black());

        assert_eq!(g.side_to_play(), White);
        assert_eq!(g.current_player(), Player::white());
        assert_eq!(g.turn(), 0);
        assert_eq!(g.rules(), rules::STANDARD);
        assert_eq!(*g.board(), Board::new());
        assert!(g.history().is_empty());
        assert!(g.captured().is_empty());
    }

    #[test]
    fn test_check_validity() {
        let g = Game::new(Player::white(), Player::black()).unwrap();
        let white = Player::white();
        let black = Player::black();
        assert_eq!(g.check_move_validity(black, c(1, 3), c(2, 3)), Invalid(WrongPlayer));
        assert_eq!(g.check_move_validity(white, c(1, 3), c(2, 3)), Invalid(OpponentPiece));
        assert_eq!(g.check_move_validity(white, c(4, 3), c(3, 3)), Invalid(NoPiece));
        assert_eq!(g.check_move_validity(white, c(6, 3), c(3, 3)), Invalid(BadMovement));
        assert_eq!(g.check_move_validity(white, c(7, 0), c(5, 0)), Invalid(BlockedByPiece));
        assert_eq!(g.check_move_validity(white, c(6, 3), c(4, 3)), Valid);
    }

    #[test]
    fn test_try_move() {
        let mut g = Game::new(Player::white(), Player::black()).unwrap();
        let white = Player::white();
        let black = Player::black();

        let record = g.try_move(white, c(7, 1), c(5, 2)).unwrap();
        assert_eq!(record.piece_moved, Piece::white(Knight));
        assert_eq!(record.piece_captured, None);
        assert_eq!(g.side_to_play(), Black);

        assert_eq!(g.try_move(white, c(6, 0), c(5, 0)), Err(WrongPlayer));
        assert!(g.try_move(black, c(1, 3), c(3, 3)).is_ok());

        let record = g.try_move(white, c(5, 2), c(3, 3)).unwrap();
        assert_eq!(record.piece_captured, Some(Piece::black(Pawn)));
        assert_eq!(g.board().get_piece(c(3, 3)), Some(Piece::white(Knight)));
        assert_eq!(g.captured(), &[Piece::black(Pawn)]);
        assert_eq!(g.history().len(), 3);
        assert_eq!(g.turn(), 3);
        assert_eq!(g.current_player(), black);
    }

    #[test]
    fn test_rejection_changes_nothing() {
        let mut g = Game::new(Player::white(), Player::black()).unwrap();
        assert!(g.do_move(Player::white(), c(6, 4), c(4, 4)));
        let before = g.clone();
        assert!(!g.do_move(Player::white(), c(6, 3), c(5, 3)));
        assert!(!g.do_move(Player::black(), c(6, 3), c(5, 3)));
        assert!(!g.do_move(Player::black(), c(0, 1), c(2, 1)));
        assert!(!g.do_move(Player::black(), c(0, 2), c(2, 4)));
        assert!(!g.do_move(Player::black(), c(3, 3), c(4, 3)));
        assert_eq!(g, before);
    }

    #[test]
    fn test_undo() {
        let mut g = Game::new(Player::white(), Player::black()).unwrap();
        let state_0 = *g.state();
        assert!(g.do_move(Player::white(), c(6, 4), c(4, 4)));
        let state_1 = *g.state();
        assert!(g.do_move(Player::black(), c(1, 3), c(3, 3)));
        let state_2 = *g.state();
        assert!(g.do_move(Player::white(), c(4, 4), c(3, 3)));
        assert_eq!(g.captured().len(), 1);

        let undone = g.undo_last_move().unwrap();
        assert_eq!(undone.piece_captured, Some(Piece::black(Pawn)));
        assert_eq!(*g.state(), state_2);
        assert!(g.captured().is_empty());
        g.undo_last_move();
        assert_eq!(*g.state(), state_1);
        g.undo_last_move();
        assert_eq!(*g.state(), state_0);
        assert!(g.history().is_empty());
        assert_eq!(g.undo_last_move(), None);
        assert_eq!(*g.state(), state_0);
    }

    #[test]
    fn test_custom_board() {
        let board = Board::from_str(
            "....k...
             ........
             ........
             ........
             ........
             ........
             ........
             Q...K..."
        ).unwrap();
        let mut g = Game::with_rules(rules::STANDARD, board, Player::black(), Player::white())
            .unwrap();
        assert!(!g.do_move(Player::white(), c(7, 0), c(6, 2)));
        assert!(g.do_move(Player::white(), c(7, 0), c(0, 0)));
        assert!(!g.do_move(Player::black(), c(0, 4), c(0, 0)));
        assert!(g.do_move(Player::black(), c(0, 4), c(1, 4)));
        assert!(g.do_move(Player::white(), c(0, 0), c(0, 7)));
        assert_eq!(g.board().get_piece(c(0, 7)), Some(Piece::white(Queen)));
        assert_eq!(g.board().count_pieces(Black), 1);
    }
}
