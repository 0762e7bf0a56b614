use serde::{Deserialize, Serialize};

/// Number of rows (and columns) of a standard chess board.
pub const STANDARD_BOARD_SIZE: i16 = 8;

/// The eight displacements a knight may make, as `(row, column)` deltas.
///
/// The order is significant: exploration tries the moves in exactly this
/// order, so it fully determines the visit sequence.
pub static KNIGHT_MOVES: [(i16, i16); 8] = [
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

/// A single square on the board, identified by its coordinates.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all, set_all))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// The row index, counted from the top.
    pub row: i16,
    /// The column index, counted from the left.
    pub column: i16,
}

// !!!!!! NOTE: Keep in sync with pymethods impl block !!!!!!
impl Cell {
    /// The cell reached by applying `(d_row, d_column)` to this cell.
    ///
    /// Coordinate overflow yields `None`, which callers treat the same
    /// as landing outside the board.
    pub(crate) fn offset_by(self, (d_row, d_column): (i16, i16)) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add(d_row)?,
            column: self.column.checked_add(d_column)?,
        })
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The dimensions of a board to explore.
///
/// Immutable for the lifetime of one exploration.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    rows: i16,
    columns: i16,
}

// !!!!!! NOTE: Keep in sync with pymethods impl block !!!!!!
impl BoardConfig {
    /// Creates a board configuration.
    ///
    /// Panics if either dimension is not positive.
    pub fn new(rows: i16, columns: i16) -> Self {
        assert!(rows > 0 && columns > 0);
        Self { rows, columns }
    }

    /// The standard 8×8 chess board.
    pub fn standard() -> Self {
        Self::new(STANDARD_BOARD_SIZE, STANDARD_BOARD_SIZE)
    }

    pub fn rows(&self) -> i16 {
        self.rows
    }

    pub fn columns(&self) -> i16 {
        self.columns
    }

    /// Total number of cells on the board.
    pub fn num_cells(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.column >= 0 && cell.column < self.columns
    }

    /// Row-major index of an in-bounds cell.
    pub(crate) fn index_of(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell));
        cell.row as usize * self.columns as usize + cell.column as usize
    }
}

#[cfg(feature = "python")]
mod python {
    use pyo3::pymethods;

    use super::*;

    #[pymethods]
    impl Cell {
        #[new]
        fn py_new(row: i16, column: i16) -> Self {
            Self { row, column }
        }

        fn __repr__(&self) -> String {
            format!("Cell({}, {})", self.row, self.column)
        }

        fn __str__(&self) -> String {
            self.to_string()
        }
    }

    #[pymethods]
    impl BoardConfig {
        #[new]
        #[pyo3(signature = (*, rows, columns))]
        fn py_new(rows: i16, columns: i16) -> Self {
            Self::new(rows, columns)
        }

        #[staticmethod]
        #[pyo3(name = "standard")]
        fn py_standard() -> Self {
            Self::standard()
        }

        #[pyo3(name = "contains")]
        fn py_contains(&self, cell: Cell) -> bool {
            self.contains(cell)
        }

        fn __repr__(&self) -> String {
            format!("BoardConfig(rows={}, columns={})", self.rows, self.columns)
        }
    }
}
