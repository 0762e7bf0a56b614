/// The error type for [`Exploration::run()`](crate::Exploration::run), i.e. for starting a tour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExploreError {
    /// The supplied start cell lies outside the board.
    ///
    /// Only the start is validated this way. Moves that leave the board
    /// *during* exploration are pruned silently, they are not errors.
    OutOfBounds { row: i16, column: i16 },
}

impl std::error::Error for ExploreError {}

impl std::fmt::Display for ExploreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExploreError::OutOfBounds { row, column } => write!(
                f,
                "Start cell ({}, {}) lies outside the bounds of the board",
                row, column
            ),
        }
    }
}

#[cfg(feature = "python")]
mod python {
    use pyo3::create_exception;
    use pyo3::PyErr;

    use super::*;

    create_exception!(
        knights_tour,
        TourOutOfBoundsError,
        pyo3::exceptions::PyException,
        "Describes why the tour cannot be started."
    );

    impl From<ExploreError> for PyErr {
        fn from(err: ExploreError) -> PyErr {
            TourOutOfBoundsError::new_err(err.to_string())
        }
    }
}
#[cfg(feature = "python")]
pub use python::*;
