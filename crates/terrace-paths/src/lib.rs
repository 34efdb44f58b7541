//! Path search over height-aware grids.
//!
//! [`find_path`] looks for a lowest-cost route between two cells of a
//! [`terrace_core::Grid`]. Every cell adds its own `cost` to a route; a
//! route may not climb more than `max_step_up` height levels in one step,
//! but may drop by any amount. Diagonal moves are optional, pay
//! [`DIAGONAL_PENALTY`] on top of the cell cost, and can be forbidden from
//! cutting between two orthogonal walls.
//!
//! | Item | Role |
//! |---|---|
//! | [`SearchParams`] | step-up limit, diagonal rules, visited [`Discipline`] |
//! | [`find_path`] / [`find_path_at`] | run one search |
//! | [`Path`] | the resulting cell sequence with a cursor |
//!
//! A search keeps no state between calls: its nodes live in an arena that
//! is dropped when the call returns, so any number of searches may share
//! one grid.

mod frontier;
mod node;
mod params;
mod path;
mod search;

pub use params::{DIAGONAL_PENALTY, Discipline, SearchParams};
pub use path::Path;
pub use search::{find_path, find_path_at};
