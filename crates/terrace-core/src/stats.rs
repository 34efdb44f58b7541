//! Aggregate height statistics.

use crate::grid::Grid;

impl<T> Grid<T> {
    /// Arithmetic mean of all height levels, or `None` for an empty grid.
    pub fn average_height(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let sum: i64 = self.iter().map(|c| i64::from(c.height_level)).sum();
        Some(sum as f64 / self.len() as f64)
    }

    /// Highest height level, or `None` for an empty grid.
    pub fn max_height(&self) -> Option<i32> {
        self.iter().map(|c| c.height_level).max()
    }

    /// Lowest height level, or `None` for an empty grid.
    pub fn min_height(&self) -> Option<i32> {
        self.iter().map(|c| c.height_level).min()
    }

    /// Distinct height levels in first-seen, row-major order.
    pub fn height_levels(&self) -> Vec<i32> {
        let mut levels = Vec::new();
        for c in self.iter() {
            if !levels.contains(&c.height_level) {
                levels.push(c.height_level);
            }
        }
        levels
    }
}
