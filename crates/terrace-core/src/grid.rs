//! The [`Grid`] type: a rectangular, owned 2D collection of [`Cell`]s.
//!
//! Cells are stored row-major, so a cell at `(x, y)` is the `x`-th entry of
//! row `y`. Width and height are fixed at construction; the grid only ever
//! hands out references to its cells, never replaces them, so the position
//! of every cell keeps matching its storage slot.

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::geom::Point;

/// A rectangular grid of [`Cell`]s.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "GridRepr<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Grid<T = char> {
    width: usize,
    height: usize,
    cells: Vec<Cell<T>>,
}

impl<T: Default> Grid<T> {
    /// Create a `width` × `height` grid of default cells (walkable, cost 1,
    /// height 0, `T::default()` tag). Negative dimensions are clamped to 0.
    pub fn new(width: i32, height: i32) -> Self {
        Self::build(width, height, |_| T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Create a `width` × `height` grid whose cells all carry `tag`.
    pub fn filled(width: i32, height: i32, tag: T) -> Self {
        Self::build(width, height, |_| tag.clone())
    }
}

impl<T> Grid<T> {
    fn build(width: i32, height: i32, mut tag: impl FnMut(Point) -> T) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Point::new(x, y)))
            .map(|p| Cell::new(p.x, p.y, tag(p)))
            .collect();
        Self {
            width: width as usize,
            height: height as usize,
            cells,
        }
    }

    /// Build a grid from pre-populated rows (`rows[y][x]`).
    ///
    /// Every row must have the same length and every cell's coordinates must
    /// match its position in `rows`.
    pub fn from_rows(rows: Vec<Vec<Cell<T>>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Self::from_cells(width, height, cells)
    }

    /// Build a grid from a flat row-major cell vector.
    ///
    /// Both dimensions must fit in an `i32` coordinate.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell<T>>) -> Result<Self> {
        let max = i32::MAX as usize;
        if width > max || height > max {
            return Err(Error::TooLarge { width, height });
        }
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(Error::ShapeMismatch {
                width,
                height,
                cells: cells.len(),
            });
        }
        for (i, cell) in cells.iter().enumerate() {
            let expected = Point::new((i % width) as i32, (i / width) as i32);
            if cell.pos() != expected {
                return Err(Error::MisplacedCell {
                    expected,
                    found: cell.pos(),
                });
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            Some((y as usize) * self.width + (x as usize))
        } else {
            None
        }
    }

    /// The cell at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell<T>> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell<T>> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Point-based alias for [`get`](Grid::get).
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell<T>> {
        self.get(p.x, p.y)
    }

    /// Point-based alias for [`get_mut`](Grid::get_mut).
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell<T>> {
        self.get_mut(p.x, p.y)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index(p.x, p.y).is_some()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major iterator over all cells.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Cell<T>> {
        self.cells.iter()
    }

    /// Row-major iterator over all cells, mutably.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cell<T>> {
        self.cells.iter_mut()
    }

    /// Iterator over the rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> std::slice::Chunks<'_, Cell<T>> {
        // A zero-width grid holds no cells, so any chunk size yields nothing.
        self.cells.chunks(self.width.max(1))
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a Cell<T>;
    type IntoIter = std::slice::Iter<'a, Cell<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut Cell<T>;
    type IntoIter = std::slice::IterMut<'a, Cell<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// ---------------------------------------------------------------------------
// Serde representation
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr<T> {
    width: usize,
    height: usize,
    cells: Vec<Cell<T>>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<GridRepr<T>> for Grid<T> {
    type Error = Error;

    fn try_from(repr: GridRepr<T>) -> Result<Self> {
        Grid::from_cells(repr.width, repr.height, repr.cells)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::filled(3, 2, '.');
        g.get_mut(1, 1).unwrap().height_level = 4;
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn grid_deserialize_rejects_bad_shape() {
        let json = r#"{"width":2,"height":2,"cells":[]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }

    #[test]
    fn grid_deserialize_rejects_huge_dimensions() {
        let json = r#"{"width":4294967296,"height":4294967296,"cells":[]}"#;
        let err = serde_json::from_str::<Grid>(json).unwrap_err();
        assert!(err.to_string().contains("exceeds"), "{err}");

        let json = r#"{"width":2147483647,"height":2147483647,"cells":[]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }

    #[test]
    fn grid_deserialize_rejects_misplaced_cells() {
        let g = Grid::filled(2, 1, '.');
        let mut value = serde_json::to_value(&g).unwrap();
        value["cells"].as_array_mut().unwrap().swap(0, 1);
        let err = serde_json::from_value::<Grid>(value).unwrap_err();
        assert!(err.to_string().contains("stored at"), "{err}");
    }
}
