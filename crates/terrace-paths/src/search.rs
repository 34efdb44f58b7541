//! Cost-driven path search over a [`Grid`].
//!
//! The search runs backwards: it is seeded at the destination and stops as
//! soon as the start cell is popped from the frontier. Walking parent links
//! from that node then yields the cells already in start → destination
//! order.

use terrace_core::{Cell, Grid, Point};

use crate::frontier::Frontier;
use crate::node::NodeArena;
use crate::params::{DIAGONAL_PENALTY, Discipline, SearchParams};
use crate::path::Path;

/// Find a lowest-cost path from `start` to `dest`.
///
/// Both cells must belong to `grid`. Returns `None` when either one is
/// taken from another grid or is not walkable. Returns an empty [`Path`]
/// when both endpoints are valid but no route satisfies the step-up and
/// diagonal rules of `params`.
///
/// ```
/// use terrace_core::Grid;
/// use terrace_paths::{SearchParams, find_path};
///
/// let g = Grid::filled(5, 5, '.');
/// let params = SearchParams::new().with_diagonals(true);
/// let path = find_path(&g, g.get(0, 4).unwrap(), g.get(4, 0).unwrap(), &params).unwrap();
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.total_cost(), 5.0);
/// ```
pub fn find_path<'g, T>(
    grid: &'g Grid<T>,
    start: &Cell<T>,
    dest: &Cell<T>,
    params: &SearchParams,
) -> Option<Path<'g, T>> {
    let start = grid.at(start.pos()).filter(|c| std::ptr::eq(*c, start))?;
    let dest = grid.at(dest.pos()).filter(|c| std::ptr::eq(*c, dest))?;
    if !start.walkable || !dest.walkable {
        log::debug!(
            "path {} -> {}: endpoint not walkable",
            start.pos(),
            dest.pos()
        );
        return None;
    }
    Some(Search::new(grid, params).run(start, dest))
}

/// Coordinate-based variant of [`find_path`].
///
/// Returns `None` if either point is outside the grid.
pub fn find_path_at<'g, T>(
    grid: &'g Grid<T>,
    start: impl Into<Point>,
    dest: impl Into<Point>,
    params: &SearchParams,
) -> Option<Path<'g, T>> {
    let start = grid.at(start.into())?;
    let dest = grid.at(dest.into())?;
    find_path(grid, start, dest, params)
}

// ---------------------------------------------------------------------------
// Search session
// ---------------------------------------------------------------------------

/// State of one search invocation; dropped as a unit when it returns.
struct Search<'g, 'p, T> {
    grid: &'g Grid<T>,
    params: &'p SearchParams,
    nodes: NodeArena<'g, T>,
    frontier: Frontier,
    /// Per-cell flag: enqueued (`Enqueue`) or settled (`Settle`).
    marked: Vec<bool>,
    /// Cheapest cost pushed so far per cell, used by `Settle` only.
    best: Vec<f64>,
}

impl<'g, 'p, T> Search<'g, 'p, T> {
    fn new(grid: &'g Grid<T>, params: &'p SearchParams) -> Self {
        let best = match params.discipline {
            Discipline::Enqueue => Vec::new(),
            Discipline::Settle => vec![f64::INFINITY; grid.len()],
        };
        Self {
            grid,
            params,
            nodes: NodeArena::new(),
            frontier: Frontier::new(),
            marked: vec![false; grid.len()],
            best,
        }
    }

    #[inline]
    fn slot(&self, p: Point) -> usize {
        (p.y * self.grid.width() + p.x) as usize
    }

    fn run(mut self, start: &'g Cell<T>, dest: &'g Cell<T>) -> Path<'g, T> {
        let seed = self.nodes.push(dest, None, dest.cost);
        self.frontier.push(seed, dest.cost);
        if self.params.discipline == Discipline::Settle {
            let s = self.slot(dest.pos());
            self.best[s] = dest.cost;
        }

        let mut expanded = 0usize;
        while let Some(top) = self.frontier.pop() {
            let node = self.nodes.get(top.idx);
            let cell = node.cell;

            if cell.pos() == start.pos() {
                let cells = self.nodes.chain(top.idx);
                log::debug!(
                    "path {} -> {}: {} cells, cost {:.3}, {} expanded, {} nodes, {} queued",
                    start.pos(),
                    dest.pos(),
                    cells.len(),
                    node.cost,
                    expanded,
                    self.nodes.len(),
                    self.frontier.len()
                );
                return Path::new(cells, self.params.max_step_up);
            }

            if self.params.discipline == Discipline::Settle {
                let s = self.slot(cell.pos());
                if self.marked[s] {
                    // Stale duplicate of an already settled cell.
                    continue;
                }
                self.marked[s] = true;
            }

            expanded += 1;
            self.expand(top.idx);
        }

        log::debug!(
            "path {} -> {}: unreachable, {} expanded, {} nodes",
            start.pos(),
            dest.pos(),
            expanded,
            self.nodes.len()
        );
        Path::empty(self.params.max_step_up)
    }

    fn expand(&mut self, idx: usize) {
        let node = self.nodes.get(idx);
        let (cur, cost) = (node.cell, node.cost);
        let p = cur.pos();

        for n in p.neighbors_4() {
            if let Some(c) = self.grid.at(n) {
                self.consider(idx, cur, c, cost + c.cost);
            }
        }

        if !self.params.diagonals {
            return;
        }
        for n in p.diagonals() {
            let Some(c) = self.grid.at(n) else {
                continue;
            };
            if self.params.walls_block_diagonals && !self.flanks_walkable(p, n) {
                continue;
            }
            self.consider(idx, cur, c, cost + c.cost + DIAGONAL_PENALTY);
        }
    }

    /// Whether both cells sharing an edge with `from` and its diagonal
    /// neighbour `to` are walkable.
    fn flanks_walkable(&self, from: Point, to: Point) -> bool {
        let a = self.grid.get(to.x, from.y);
        let b = self.grid.get(from.x, to.y);
        a.is_some_and(|c| c.walkable) && b.is_some_and(|c| c.walkable)
    }

    /// Push `c` as a successor of node `parent` (whose cell is `cur`) if the
    /// step is admissible.
    fn consider(&mut self, parent: usize, cur: &'g Cell<T>, c: &'g Cell<T>, cost: f64) {
        if !c.walkable {
            return;
        }
        // The search runs backwards, so the forward move is c -> cur.
        let climb = i64::from(cur.height_level) - i64::from(c.height_level);
        if climb > i64::from(self.params.max_step_up) {
            return;
        }

        let s = self.slot(c.pos());
        match self.params.discipline {
            Discipline::Enqueue => {
                if self.marked[s] {
                    return;
                }
                self.marked[s] = true;
            }
            Discipline::Settle => {
                if self.marked[s] || cost >= self.best[s] {
                    return;
                }
                self.best[s] = cost;
            }
        }

        let n = self.nodes.push(c, Some(parent), cost);
        self.frontier.push(n, cost);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SearchParams {
        SearchParams::new().with_max_step_up(i32::MAX)
    }

    fn pts<T>(path: &Path<'_, T>) -> Vec<Point> {
        path.points().collect()
    }

    #[test]
    fn straight_corridor() {
        let g = Grid::filled(4, 1, '.');
        let path = find_path_at(&g, (0, 0), (3, 0), &params()).unwrap();
        assert_eq!(
            pts(&path),
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0)
            ]
        );
        assert_eq!(path.step_height(), i32::MAX);
    }

    #[test]
    fn diagonal_across_open_field() {
        let g = Grid::filled(5, 5, '.');
        let p = params().with_diagonals(true);
        let path = find_path_at(&g, (0, 4), (4, 0), &p).unwrap();
        assert_eq!(
            pts(&path),
            vec![
                Point::new(0, 4),
                Point::new(1, 3),
                Point::new(2, 2),
                Point::new(3, 1),
                Point::new(4, 0)
            ]
        );
        assert_eq!(path.total_cost(), 5.0);
    }

    #[test]
    fn prefers_orthogonal_when_equal_distance() {
        // A straight line is as short as any zig-zag; the diagonal penalty
        // keeps the search on it.
        let g = Grid::filled(5, 3, '.');
        let p = params().with_diagonals(true);
        let path = find_path_at(&g, (0, 1), (4, 1), &p).unwrap();
        assert!(path.points().all(|q| q.y == 1));
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn routes_around_walls() {
        let mut g = Grid::from_strings(&[
            ".#...", //
            ".#.#.", //
            "...#.",
        ])
        .unwrap();
        g.set_walkable(&'#', false);
        let path = find_path_at(&g, (0, 0), (4, 0), &params()).unwrap();
        assert_eq!(path.first().map(Cell::pos), Some(Point::new(0, 0)));
        assert_eq!(path.last().map(Cell::pos), Some(Point::new(4, 0)));
        assert!(path.iter().all(|c| c.walkable));
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn avoids_expensive_cells() {
        let mut g = Grid::from_strings(&[
            "...", //
            ".~.", //
            "...",
        ])
        .unwrap();
        g.set_cost(&'~', 10.0);
        let path = find_path_at(&g, (1, 0), (1, 2), &params()).unwrap();
        assert!(!path.points().any(|q| q == Point::new(1, 1)));
        assert_eq!(path.len(), 5);
        assert_eq!(path.total_cost(), 5.0);
    }

    #[test]
    fn start_equals_destination() {
        let g = Grid::filled(3, 3, '.');
        let path = find_path_at(&g, (1, 1), (1, 1), &params()).unwrap();
        assert_eq!(path.len(), 1);
        assert!(path.is_at_start() && path.is_at_end());
    }

    #[test]
    fn unwalkable_endpoint_is_none() {
        let mut g = Grid::filled(3, 1, '.');
        g.get_mut(2, 0).unwrap().walkable = false;
        assert!(find_path_at(&g, (0, 0), (2, 0), &params()).is_none());
        assert!(find_path_at(&g, (2, 0), (0, 0), &params()).is_none());
    }

    #[test]
    fn out_of_bounds_endpoint_is_none() {
        let g = Grid::filled(3, 3, '.');
        assert!(find_path_at(&g, (-1, 0), (2, 2), &params()).is_none());
        assert!(find_path_at(&g, (0, 0), (3, 0), &params()).is_none());
    }

    #[test]
    fn foreign_cell_outside_grid_is_none() {
        let small = Grid::filled(2, 2, '.');
        let big = Grid::filled(5, 5, '.');
        let far = big.get(4, 4).unwrap();
        assert!(find_path(&small, small.get(0, 0).unwrap(), far, &params()).is_none());
    }

    #[test]
    fn foreign_cell_inside_bounds_is_none() {
        let small = Grid::filled(3, 3, '.');
        let mut other = Grid::filled(3, 3, '.');
        other.get_mut(0, 0).unwrap().walkable = false;
        let foreign = other.get(0, 0).unwrap();
        let dest = small.get(2, 2).unwrap();
        assert!(find_path(&small, foreign, dest, &params()).is_none());
        assert!(find_path(&small, dest, other.get(1, 1).unwrap(), &params()).is_none());
        assert!(find_path(&small, small.get(0, 0).unwrap(), dest, &params()).is_some());
    }

    #[test]
    fn unreachable_is_empty_path() {
        let mut g = Grid::from_strings(&["..#.."]).unwrap();
        g.set_walkable(&'#', false);
        let path = find_path_at(&g, (0, 0), (4, 0), &params()).unwrap();
        assert!(path.is_empty());
        assert!(path.current().is_none());
    }

    #[test]
    fn climbing_is_limited_descending_is_not() {
        let mut g = Grid::filled(3, 1, '.');
        g.get_mut(1, 0).unwrap().height_level = 1;
        g.get_mut(2, 0).unwrap().height_level = 3;
        let p = SearchParams::new().with_max_step_up(1);

        // 0 -> 1 is fine, 1 -> 3 climbs 2.
        assert!(find_path_at(&g, (0, 0), (2, 0), &p).unwrap().is_empty());
        // The way down drops 2 then 1.
        assert_eq!(find_path_at(&g, (2, 0), (0, 0), &p).unwrap().len(), 3);
        // Allowing 2 opens the way up.
        let p = p.with_max_step_up(2);
        assert_eq!(find_path_at(&g, (0, 0), (2, 0), &p).unwrap().len(), 3);
    }

    #[test]
    fn negative_step_up_forces_descent() {
        let mut g = Grid::filled(3, 1, '.');
        for (x, h) in [(0, 4), (1, 2), (2, 0)] {
            g.get_mut(x, 0).unwrap().height_level = h;
        }
        let p = SearchParams::new().with_max_step_up(-2);
        assert_eq!(find_path_at(&g, (0, 0), (2, 0), &p).unwrap().len(), 3);
        let p = SearchParams::new().with_max_step_up(-3);
        assert!(find_path_at(&g, (0, 0), (2, 0), &p).unwrap().is_empty());
    }

    #[test]
    fn walls_block_corner_cutting() {
        let mut g = Grid::from_strings(&[
            ".#.", //
            "#.#", //
            "...",
        ])
        .unwrap();
        g.set_walkable(&'#', false);
        // (0,0) only connects to (1,1) diagonally, between two walls.
        let open = params().with_diagonals(true);
        let path = find_path_at(&g, (0, 0), (1, 1), &open).unwrap();
        assert_eq!(path.len(), 2);

        let blocked = open.with_walls_block_diagonals(true);
        assert!(find_path_at(&g, (0, 0), (1, 1), &blocked).unwrap().is_empty());
    }

    #[test]
    fn one_wall_is_enough_to_block() {
        let mut g = Grid::from_strings(&[
            ".#", //
            "..",
        ])
        .unwrap();
        g.set_walkable(&'#', false);
        let p = params().with_diagonals(true).with_walls_block_diagonals(true);
        let path = find_path_at(&g, (0, 0), (1, 1), &p).unwrap();
        // Has to go around through (0,1).
        assert_eq!(
            pts(&path),
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn orthogonal_only_ignores_diagonals() {
        let g = Grid::filled(3, 3, '.');
        let path = find_path_at(&g, (0, 0), (2, 2), &params()).unwrap();
        assert_eq!(path.len(), 5);
        for w in path.cells().windows(2) {
            let d = w[1].pos() - w[0].pos();
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
    }

    /// `a` is the destination. The cheap `b` is popped right after it and
    /// offers `c` an orthogonal step, cheaper than the diagonal step `c`
    /// already got when `a` was expanded.
    fn late_cheaper_grid() -> Grid {
        let mut g = Grid::from_strings(&[
            "ab", //
            ".c",
        ])
        .unwrap();
        g.set_cost(&'b', 0.1);
        g
    }

    #[test]
    fn enqueue_keeps_first_discovered_route() {
        let g = late_cheaper_grid();
        let p = params().with_diagonals(true);
        let path = find_path_at(&g, (1, 1), (0, 0), &p).unwrap();
        assert_eq!(pts(&path), vec![Point::new(1, 1), Point::new(0, 0)]);
    }

    #[test]
    fn settle_finds_cheaper_late_route() {
        let g = late_cheaper_grid();
        let p = params()
            .with_diagonals(true)
            .with_discipline(Discipline::Settle);
        let path = find_path_at(&g, (1, 1), (0, 0), &p).unwrap();
        assert_eq!(
            pts(&path),
            vec![Point::new(1, 1), Point::new(1, 0), Point::new(0, 0)]
        );
    }

    #[test]
    fn disciplines_agree_on_uniform_orthogonal_grids() {
        let mut g = Grid::from_strings(&[
            "....", //
            ".#..", //
            "....",
        ])
        .unwrap();
        g.set_walkable(&'#', false);
        let enqueue = params();
        let settle = params().with_discipline(Discipline::Settle);
        let a = find_path_at(&g, (0, 0), (3, 2), &enqueue).unwrap();
        let b = find_path_at(&g, (0, 0), (3, 2), &settle).unwrap();
        assert_eq!(a.len(), 6);
        assert_eq!(a.len(), b.len());
        assert_eq!(a.total_cost(), b.total_cost());
    }
}
