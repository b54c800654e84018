use quickcheck::{Arbitrary, Gen};

use crate::{is_game_over, GameState, Player};

/// A nonempty board with small column heights.
#[derive(Clone, Debug)]
pub struct Columns(pub Vec<u32>);

impl Arbitrary for Columns {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 8 + 1;
        Columns((0..len).map(|_| u32::arbitrary(g) % 17).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.0
                .shrink()
                .filter(|columns| !columns.is_empty())
                .map(Columns),
        )
    }
}

impl Arbitrary for Player {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Player::First, Player::Second]).unwrap()
    }
}

impl Arbitrary for GameState {
    fn arbitrary(g: &mut Gen) -> Self {
        let columns = Columns::arbitrary(g).0;
        let active_column = if bool::arbitrary(g) {
            Some(usize::arbitrary(g) % columns.len())
        } else {
            None
        };
        GameState {
            row_capacity: columns.iter().copied().max().unwrap_or(0).max(1),
            game_over: is_game_over(&columns),
            active_column,
            player: Player::arbitrary(g),
            computer_move: bool::arbitrary(g),
            columns,
        }
    }
}
