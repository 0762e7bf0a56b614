use crate::{BoardConfig, Cell, CellSet, ExploreError, KNIGHT_MOVES};

/// A single exploration run over one board.
///
/// Owns its visited grid and the sequence of visited cells, so independent
/// runs never share state. An instance is meant for one run; either create
/// a fresh one per start cell or call [`reset`](Self::reset) in between.
#[cfg_attr(feature = "python", pyo3::pyclass)]
#[derive(Clone, Debug)]
pub struct Exploration {
    config: BoardConfig,
    visited: CellSet,
    sequence: Vec<Cell>,
}

// !!!!!! NOTE: Keep in sync with pymethods impl block !!!!!!
impl Exploration {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            visited: CellSet::new(config),
            sequence: Vec::new(),
        }
    }

    /// Runs the tour from `start` and returns the visit sequence.
    ///
    /// This is the core operation of this type. Starting from `start`,
    /// knight moves are expanded depth-first in the fixed order given by
    /// [`KNIGHT_MOVES`]: the whole subtree of the first move is explored
    /// before the second move of the same cell is tried. A move that leaves
    /// the board or lands on an already-visited cell is skipped. A visited
    /// cell is never given back, even when a branch dead-ends, so the
    /// sequence records traversal order and is not necessarily a contiguous
    /// knight path.
    ///
    /// The result is fully determined by the board dimensions and `start`.
    ///
    /// Only the start cell itself is validated; an out-of-bounds start is
    /// an error and leaves the instance untouched. Calling `run` again
    /// without [`reset`](Self::reset) keeps all previously visited cells
    /// marked.
    pub fn run(&mut self, start: Cell) -> Result<&[Cell], ExploreError> {
        if !self.config.contains(start) {
            return Err(ExploreError::OutOfBounds {
                row: start.row,
                column: start.column,
            });
        }
        // Cells waiting to be expanded, topmost next. Bounds and visited
        // state are checked when a cell is popped, and the move targets are
        // pushed in reverse so that they pop in KNIGHT_MOVES order. Both
        // together make the loop equivalent to the recursive formulation
        // of the search, without tying the exploration depth to the call
        // stack.
        let mut pending = vec![start];
        while let Some(cell) = pending.pop() {
            if !self.config.contains(cell) || !self.visited.insert(cell) {
                continue;
            }
            self.sequence.push(cell);
            for &offset in KNIGHT_MOVES.iter().rev() {
                if let Some(target) = cell.offset_by(offset) {
                    pending.push(target);
                }
            }
        }
        Ok(&self.sequence)
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// The cells visited so far, in visit order.
    pub fn sequence(&self) -> &[Cell] {
        &self.sequence
    }

    /// The visited-state grid.
    pub fn visited(&self) -> &CellSet {
        &self.visited
    }

    /// Did the tour reach every cell of the board?
    pub fn is_complete(&self) -> bool {
        self.sequence.len() == self.config.num_cells()
    }

    /// Clears the visited grid and the sequence, so the instance can run
    /// again from a different start.
    pub fn reset(&mut self) {
        self.visited.clear();
        self.sequence.clear();
    }

    pub fn into_sequence(self) -> Vec<Cell> {
        self.sequence
    }
}

/// Runs a fresh [`Exploration`] and returns the visit sequence.
pub fn explore(config: BoardConfig, start: Cell) -> Result<Vec<Cell>, ExploreError> {
    let mut exploration = Exploration::new(config);
    exploration.run(start)?;
    Ok(exploration.into_sequence())
}

#[cfg(feature = "python")]
mod python {
    use pyo3::pymethods;

    use super::*;

    #[pymethods]
    impl Exploration {
        #[new]
        fn py_new(config: BoardConfig) -> Self {
            Self::new(config)
        }

        #[pyo3(name = "run")]
        fn py_run(&mut self, start: Cell) -> Result<Vec<Cell>, ExploreError> {
            self.run(start).map(|sequence| sequence.to_vec())
        }

        #[pyo3(name = "sequence")]
        fn py_sequence(&self) -> Vec<Cell> {
            self.sequence.clone()
        }

        #[pyo3(name = "is_complete")]
        fn py_is_complete(&self) -> bool {
            self.is_complete()
        }

        #[pyo3(name = "reset")]
        fn py_reset(&mut self) {
            self.reset()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ExplorationInput;

    fn cell(row: i16, column: i16) -> Cell {
        Cell { row, column }
    }

    quickcheck! {
        fn same_input_same_sequence(input: ExplorationInput) -> bool {
            explore(input.config, input.start).unwrap()
                == explore(input.config, input.start).unwrap()
        }

        fn no_cell_visited_twice(input: ExplorationInput) -> bool {
            let sequence = explore(input.config, input.start).unwrap();
            let distinct: BTreeSet<Cell> = sequence.iter().copied().collect();
            distinct.len() == sequence.len()
        }

        fn sequence_is_bounded(input: ExplorationInput) -> bool {
            let sequence = explore(input.config, input.start).unwrap();
            sequence.len() <= input.config.num_cells()
                && sequence.iter().all(|&c| input.config.contains(c))
        }

        fn sequence_begins_with_the_start(input: ExplorationInput) -> bool {
            explore(input.config, input.start).unwrap()[0] == input.start
        }

        fn visited_grid_matches_sequence(input: ExplorationInput) -> bool {
            let mut exploration = Exploration::new(input.config);
            exploration.run(input.start).unwrap();
            exploration.visited().len() == exploration.sequence().len()
        }
    }

    #[test]
    fn rejects_out_of_bounds_start() {
        let config = BoardConfig::standard();
        assert_eq!(
            explore(config, cell(-1, 0)),
            Err(ExploreError::OutOfBounds { row: -1, column: 0 })
        );
        assert_eq!(
            explore(config, cell(0, 8)),
            Err(ExploreError::OutOfBounds { row: 0, column: 8 })
        );

        // A rejected start must leave no trace behind
        let mut exploration = Exploration::new(config);
        assert!(exploration.run(cell(8, 8)).is_err());
        assert!(exploration.sequence().is_empty());
        assert!(exploration.visited().is_empty());
    }

    #[test]
    fn expands_moves_in_fixed_order() {
        // From (0, 0) the first four offsets all leave the board, so (2, 1)
        // is visited second, and its whole subtree is expanded before the
        // (1, 2) move of (0, 0) gets a turn. Checked against a trace of the
        // recursive formulation.
        let sequence = explore(BoardConfig::standard(), cell(0, 0)).unwrap();
        let expected_prefix = [
            cell(0, 0),
            cell(2, 1),
            cell(4, 0),
            cell(6, 1),
            cell(7, 3),
            cell(5, 2),
            cell(7, 1),
            cell(5, 0),
        ];
        assert_eq!(&sequence[..expected_prefix.len()], &expected_prefix);
    }

    #[test]
    fn single_cell_board() {
        // All eight moves leave a 1x1 board immediately
        let sequence = explore(BoardConfig::new(1, 1), cell(0, 0)).unwrap();
        assert_eq!(sequence, vec![cell(0, 0)]);
    }

    #[test]
    fn covers_connected_boards_entirely() {
        // The traversal never un-visits a cell, but since it checks the
        // visited state on entry it still reaches everything connected to
        // the start. The knight-move graph of the 8x8 board is connected,
        // so every cell appears in the sequence.
        let mut exploration = Exploration::new(BoardConfig::standard());
        exploration.run(cell(0, 0)).unwrap();
        assert!(exploration.is_complete());
        assert_eq!(exploration.sequence().len(), 64);
        assert_eq!(exploration.sequence().last(), Some(&cell(7, 7)));
    }

    #[test]
    fn sequence_is_not_a_contiguous_tour() {
        // When a branch dead-ends, the sequence jumps to a sibling branch,
        // so consecutive entries are not all one knight move apart. This
        // pins down the no-backtracking behavior.
        let sequence = explore(BoardConfig::standard(), cell(0, 0)).unwrap();
        let is_knight_move = |a: Cell, b: Cell| {
            let mut deltas = [(a.row - b.row).abs(), (a.column - b.column).abs()];
            deltas.sort();
            deltas == [1, 2]
        };
        assert!(sequence.windows(2).any(|w| !is_knight_move(w[0], w[1])));
    }

    #[test]
    fn strands_cells_outside_the_starting_component() {
        // The center of a 3x3 board has no legal knight moves at all, and
        // the outer ring cannot reach it, so both kinds of start produce
        // fewer than rows * columns cells.
        let config = BoardConfig::new(3, 3);

        assert_eq!(explore(config, cell(1, 1)).unwrap(), vec![cell(1, 1)]);

        let ring = explore(config, cell(0, 0)).unwrap();
        assert_eq!(
            ring,
            vec![
                cell(0, 0),
                cell(2, 1),
                cell(0, 2),
                cell(1, 0),
                cell(2, 2),
                cell(0, 1),
                cell(2, 0),
                cell(1, 2),
            ]
        );
        assert!(!ring.contains(&cell(1, 1)));
    }

    #[test]
    fn reset_allows_reuse() {
        let mut exploration = Exploration::new(BoardConfig::new(4, 4));
        let first = exploration.run(cell(0, 0)).unwrap().to_vec();
        exploration.reset();
        assert!(exploration.sequence().is_empty());
        assert!(exploration.visited().is_empty());
        let second = exploration.run(cell(0, 0)).unwrap();
        assert_eq!(first, second);
    }
}
