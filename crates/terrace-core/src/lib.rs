//! **terrace-core**: the grid model used by terrace path search.
//!
//! A [`Grid`] owns a rectangle of [`Cell`]s. Each cell carries a
//! walkability flag, a traversal cost, a discrete height level and a
//! classification tag. The tag is generic (`char` by default) and only
//! matters to the bulk-edit helpers:
//!
//! ```
//! use terrace_core::Grid;
//!
//! let mut g = Grid::from_strings(&[
//!     "..##",
//!     "..~~",
//! ]).unwrap();
//! g.set_walkable(&'#', false);
//! g.set_cost(&'~', 3.0);
//! assert_eq!(g.cells_by_walkable(false).len(), 2);
//! ```

pub mod cell;
mod edit;
pub mod error;
pub mod geom;
pub mod grid;
mod layout;
mod stats;

pub use cell::Cell;
pub use error::{Error, Result};
pub use geom::Point;
pub use grid::Grid;
