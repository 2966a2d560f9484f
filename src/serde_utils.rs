#![cfg(feature = "serde")]

use crate::board::Board;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Custom `Serialize`/`Deserialize` implementation for the board (using its display string)

pub(crate) struct BoardVisitor;

impl<'de> Visitor<'de> for BoardVisitor {
    type Value = Board;
    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string of eight lines of eight characters representing the board")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where E: serde::de::Error {
        Board::from_display_str(value).map_err(|_| E::invalid_value(
            serde::de::Unexpected::Str(value),
            &self
        ))
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_display_str().as_str())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(BoardVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::game::Game;
    use crate::player::Player;
    use crate::tiles::Coords;
    use bincode::serde::{decode_from_slice, encode_to_vec};

    #[test]
    fn test_round_trip() {
        let mut g = Game::new(Player::white(), Player::black()).expect("failed to create game");
        let cfg = bincode::config::standard();
        let bytes = encode_to_vec(&g, cfg).unwrap();
        let (back, _len): (Game, usize) = decode_from_slice(&bytes, cfg).unwrap();
        assert_eq!(g, back);
        let c = |r, c| Coords::new(r, c).unwrap();
        assert!(g.do_move(Player::white(), c(6, 4), c(4, 4)));
        assert!(g.do_move(Player::black(), c(1, 3), c(3, 3)));
        assert!(g.do_move(Player::white(), c(4, 4), c(3, 3)));
        let bytes = encode_to_vec(&g, cfg).unwrap();
        let (back, _len): (Game, usize) = decode_from_slice(&bytes, cfg).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn test_coords_checked_on_decode() {
        let cfg = bincode::config::standard();
        let c = Coords::new(3, 5).unwrap();
        let bytes = encode_to_vec(c, cfg).unwrap();
        let (back, _len): (Coords, usize) = decode_from_slice(&bytes, cfg).unwrap();
        assert_eq!(back, c);

        let bytes = encode_to_vec((9u8, 200u8), cfg).unwrap();
        let res: Result<(Coords, usize), _> = decode_from_slice(&bytes, cfg);
        assert!(res.is_err());
        let bytes = encode_to_vec((8i8, 0i8), cfg).unwrap();
        let res: Result<(Coords, usize), _> = decode_from_slice(&bytes, cfg);
        assert!(res.is_err());
    }

    #[test]
    fn test_bad_board_string() {
        let cfg = bincode::config::standard();
        let bytes = encode_to_vec("not a board", cfg).unwrap();
        let res: Result<(crate::Board, usize), _> = decode_from_slice(&bytes, cfg);
        assert!(res.is_err());
    }
}
