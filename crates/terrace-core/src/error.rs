use thiserror::Error;

use crate::geom::Point;

/// Convenient result alias for grid construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell's coordinates do not match its storage position.
    #[error("cell at {found} stored at {expected}")]
    MisplacedCell { expected: Point, found: Point },

    /// The declared dimensions disagree with the number of cells supplied.
    #[error("{width}x{height} grid cannot hold {cells} cells")]
    ShapeMismatch {
        width: usize,
        height: usize,
        cells: usize,
    },

    /// A dimension does not fit in an `i32` coordinate.
    #[error("{width}x{height} grid exceeds i32 coordinates")]
    TooLarge { width: usize, height: usize },
}
