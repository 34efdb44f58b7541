//! One grid position with terrain attributes.

use std::fmt;

use crate::geom::Point;

/// A single grid position.
///
/// The position is fixed at creation and must match where the cell is stored
/// in its [`Grid`](crate::Grid). Every other attribute is freely mutable.
///
/// `T` is the classification tag used by the bulk-edit helpers on
/// [`Grid`](crate::Grid). It is opaque to path search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<T = char> {
    pos: Point,
    /// Discrete height level.
    pub height_level: i32,
    /// Traversal weight paid for entering this cell.
    pub cost: f64,
    pub walkable: bool,
    pub tag: T,
}

impl<T> Cell<T> {
    /// Default traversal cost of a fresh cell.
    pub const DEFAULT_COST: f64 = 1.0;

    /// Create a walkable cell at `(x, y)` with height 0 and cost 1.
    #[inline]
    pub const fn new(x: i32, y: i32, tag: T) -> Self {
        Self {
            pos: Point::new(x, y),
            height_level: 0,
            cost: Self::DEFAULT_COST,
            walkable: true,
            tag,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }

    /// Set the height level (builder).
    #[inline]
    pub fn with_height_level(mut self, height_level: i32) -> Self {
        self.height_level = height_level;
        self
    }

    /// Set the traversal cost (builder).
    #[inline]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Set walkability (builder).
    #[inline]
    pub fn with_walkable(mut self, walkable: bool) -> Self {
        self.walkable = walkable;
        self
    }

    /// Set the tag (builder).
    #[inline]
    pub fn with_tag(mut self, tag: T) -> Self {
        self.tag = tag;
        self
    }
}

impl<T: fmt::Debug> fmt::Display for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X:{} Y:{} Height:{} Cost:{} Walkable:{} Tag:{:?}",
            self.pos.x, self.pos.y, self.height_level, self.cost, self.walkable, self.tag
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_defaults() {
        let c = Cell::new(3, 4, '.');
        assert_eq!(c.pos(), Point::new(3, 4));
        assert_eq!(c.height_level, 0);
        assert_eq!(c.cost, 1.0);
        assert!(c.walkable);
        assert_eq!(c.tag, '.');
    }

    #[test]
    fn builders_set_attributes() {
        let c = Cell::new(0, 0, 0u8)
            .with_height_level(2)
            .with_cost(3.5)
            .with_walkable(false)
            .with_tag(7);
        assert_eq!(c.height_level, 2);
        assert_eq!(c.cost, 3.5);
        assert!(!c.walkable);
        assert_eq!(c.tag, 7);
    }

    #[test]
    fn display_lists_attributes() {
        let c = Cell::new(1, 2, 'x').with_height_level(-1);
        assert_eq!(
            c.to_string(),
            "X:1 Y:2 Height:-1 Cost:1 Walkable:true Tag:'x'"
        );
    }
}
