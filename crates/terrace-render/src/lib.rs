//! Rendering for terrace grids.
//!
//! [`visualise`] and [`visualise_path`] produce plain strings, one per grid
//! row, with each walkable cell drawn as the letter of its height level.
//! [`term::write_grid`] draws the same map with crossterm colours.

pub mod term;
mod text;

pub use text::{
    LETTERS, PATH_GLYPH, Visualisation, WALL_GLYPH, height_letters, visualise, visualise_path,
};
