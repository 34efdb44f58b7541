//! Building grids from tag layouts, and reading the layout back out.

use std::fmt;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::grid::Grid;

impl<T> Grid<T> {
    /// Create a grid from a 2D array of tags; `rows[y][x]` becomes the tag of
    /// the cell at `(x, y)`. All other attributes take their defaults.
    pub fn from_tag_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cells = rows
            .into_iter()
            .enumerate()
            .map(|(y, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(x, tag)| Cell::new(x as i32, y as i32, tag))
                    .collect()
            })
            .collect();
        Self::from_rows(cells)
    }
}

impl<T: Clone> Grid<T> {
    /// The tags of every cell as a 2D array, first axis Y.
    pub fn to_tag_rows(&self) -> Vec<Vec<T>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.tag.clone()).collect())
            .collect()
    }
}

impl<T: fmt::Display> Grid<T> {
    /// One line per row, each tag followed by a space.
    pub fn tags_to_string(&self) -> String {
        let mut s = String::new();
        for row in self.rows() {
            for c in row {
                s.push_str(&c.tag.to_string());
                s.push(' ');
            }
            s.push('\n');
        }
        s
    }
}

impl Grid<char> {
    /// Create a grid from text rows, one character per cell.
    ///
    /// ```
    /// use terrace_core::Grid;
    ///
    /// let g = Grid::from_strings(&["..#", "..."]).unwrap();
    /// assert_eq!(g.width(), 3);
    /// assert_eq!(g.get(2, 0).unwrap().tag, '#');
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let expected = rows.first().map_or(0, |r| r.as_ref().chars().count());
        for (row, line) in rows.iter().enumerate() {
            let found = line.as_ref().chars().count();
            if found != expected {
                return Err(Error::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }
        }
        Self::from_tag_rows(rows.iter().map(|r| r.as_ref().chars().collect()).collect())
    }

    /// The tags of every row joined back into strings.
    pub fn to_strings(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|c| c.tag).collect())
            .collect()
    }
}
