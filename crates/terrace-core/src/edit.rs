//! Bulk queries and edits over a [`Grid`], keyed by cell attributes.
//!
//! Edits keyed by tag are one-shot: they copy a value into every matching
//! cell at call time. Changing a cell's tag afterwards does not carry the
//! old value along.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cell::Cell;
use crate::grid::Grid;

impl<T: PartialEq> Grid<T> {
    /// All cells carrying `tag`, row-major.
    pub fn cells_by_tag(&self, tag: &T) -> Vec<&Cell<T>> {
        self.iter().filter(|c| c.tag == *tag).collect()
    }

    /// Set walkability on every cell carrying `tag`. Returns how many cells
    /// matched.
    pub fn set_walkable(&mut self, tag: &T, walkable: bool) -> usize {
        self.update_tagged(tag, |c| c.walkable = walkable)
    }

    /// Set the traversal cost on every cell carrying `tag`.
    pub fn set_cost(&mut self, tag: &T, cost: f64) -> usize {
        self.update_tagged(tag, |c| c.cost = cost)
    }

    /// Set the height level on every cell carrying `tag`.
    pub fn set_height_level(&mut self, tag: &T, height_level: i32) -> usize {
        self.update_tagged(tag, |c| c.height_level = height_level)
    }

    fn update_tagged(&mut self, tag: &T, mut f: impl FnMut(&mut Cell<T>)) -> usize {
        let mut n = 0;
        for c in self.iter_mut().filter(|c| c.tag == *tag) {
            f(c);
            n += 1;
        }
        n
    }
}

impl<T: Eq + Hash> Grid<T> {
    /// Apply a height profile: every cell whose tag is a key of `profile`
    /// takes the mapped height level. Cells with other tags are untouched.
    pub fn apply_height_map(&mut self, profile: &HashMap<T, i32>) {
        for c in self.iter_mut() {
            if let Some(&h) = profile.get(&c.tag) {
                c.height_level = h;
            }
        }
    }
}

impl<T> Grid<T> {
    /// All cells whose cost is exactly `cost`.
    pub fn cells_by_cost(&self, cost: f64) -> Vec<&Cell<T>> {
        self.iter().filter(|c| c.cost == cost).collect()
    }

    /// All cells with the given walkability.
    pub fn cells_by_walkable(&self, walkable: bool) -> Vec<&Cell<T>> {
        self.iter().filter(|c| c.walkable == walkable).collect()
    }

    /// All cells at the given height level.
    pub fn cells_by_height_level(&self, height_level: i32) -> Vec<&Cell<T>> {
        self.iter()
            .filter(|c| c.height_level == height_level)
            .collect()
    }
}
