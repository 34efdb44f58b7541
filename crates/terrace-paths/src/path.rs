//! The [`Path`] result type: an ordered run of grid cells plus a cursor.

use std::fmt;

use terrace_core::{Cell, Point};

/// A route through a grid, from its first cell to its last.
///
/// A `Path` borrows its cells from the [`Grid`](terrace_core::Grid) it was
/// computed on. Cells are compared by identity, not by value: two paths are
/// the [`same`](Path::same_as) only if they visit the very same cells.
///
/// The cursor starts at the first cell. [`next`](Path::next) and
/// [`prev`](Path::prev) peek around it; [`advance`](Path::advance) moves it.
pub struct Path<'g, T = char> {
    cells: Vec<&'g Cell<T>>,
    index: usize,
    step_height: i32,
}

impl<'g, T> Path<'g, T> {
    pub(crate) fn new(cells: Vec<&'g Cell<T>>, step_height: i32) -> Self {
        Self {
            cells,
            index: 0,
            step_height,
        }
    }

    /// An empty path, as returned when no route exists.
    pub(crate) fn empty(step_height: i32) -> Self {
        Self::new(Vec::new(), step_height)
    }

    /// The maximum step-up this path was computed under.
    #[inline]
    pub fn step_height(&self) -> i32 {
        self.step_height
    }

    /// Sum of the cost of every cell on the path.
    ///
    /// Diagonal penalties applied during the search are not included.
    pub fn total_cost(&self) -> f64 {
        self.cells.iter().map(|c| c.cost).sum()
    }

    /// Reverse the cell order in place. The cursor index is left as is.
    pub fn reverse(&mut self) {
        self.cells.reverse();
    }

    /// Move the cursor back to the first cell.
    #[inline]
    pub fn restart(&mut self) {
        self.index = 0;
    }

    /// The cell under the cursor, or `None` for an empty path.
    #[inline]
    pub fn current(&self) -> Option<&'g Cell<T>> {
        self.cells.get(self.index).copied()
    }

    /// The cell after the cursor, or `None` at the end.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<&'g Cell<T>> {
        self.cells.get(self.index + 1).copied()
    }

    /// The cell before the cursor, or `None` at the start.
    #[inline]
    pub fn prev(&self) -> Option<&'g Cell<T>> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Move the cursor forward by one cell; stays put on the last cell.
    #[inline]
    pub fn advance(&mut self) {
        if self.index + 1 < self.cells.len() {
            self.index += 1;
        }
    }

    /// Current cursor position.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move the cursor to `index`, clamped to the last cell.
    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.cells.len().saturating_sub(1));
    }

    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.cells.len()
    }

    /// Number of cells on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'g Cell<T>> {
        self.cells.get(index).copied()
    }

    #[inline]
    pub fn first(&self) -> Option<&'g Cell<T>> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<&'g Cell<T>> {
        self.cells.last().copied()
    }

    /// Position of `cell` on the path, matched by identity.
    pub fn index_of(&self, cell: &Cell<T>) -> Option<usize> {
        self.cells.iter().position(|c| std::ptr::eq(*c, cell))
    }

    /// Whether both paths visit the very same cells in the same order.
    pub fn same_as(&self, other: &Path<'_, T>) -> bool {
        self.cells.len() == other.cells.len()
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| std::ptr::eq(*a, *b))
    }

    /// The cells in path order.
    #[inline]
    pub fn cells(&self) -> &[&'g Cell<T>] {
        &self.cells
    }

    /// Iterator over the cells in path order.
    pub fn iter(&self) -> impl Iterator<Item = &'g Cell<T>> + '_ {
        self.cells.iter().copied()
    }

    /// Iterator over the cell positions in path order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().map(|c| c.pos())
    }
}

impl<T> Clone for Path<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            index: self.index,
            step_height: self.step_height,
        }
    }
}

impl<T> fmt::Debug for Path<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("points", &self.points().collect::<Vec<_>>())
            .field("index", &self.index)
            .field("step_height", &self.step_height)
            .finish()
    }
}
