use crate::{BoardConfig, Cell};

/// A board together with an in-bounds start cell.
#[derive(Clone, Debug)]
pub struct ExplorationInput {
    pub config: BoardConfig,
    pub start: Cell,
}

impl quickcheck::Arbitrary for ExplorationInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Keep the boards small so that the property tests stay fast
        let rows = (u8::arbitrary(g) % 12) as i16 + 1;
        let columns = (u8::arbitrary(g) % 12) as i16 + 1;
        let start = Cell {
            row: (u8::arbitrary(g) % rows as u8) as i16,
            column: (u8::arbitrary(g) % columns as u8) as i16,
        };
        ExplorationInput {
            config: BoardConfig::new(rows, columns),
            start,
        }
    }
}
