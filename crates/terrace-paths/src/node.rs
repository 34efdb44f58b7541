use terrace_core::Cell;

// ---------------------------------------------------------------------------
// Search nodes, owned by a per-search arena
// ---------------------------------------------------------------------------

/// One visit of a cell during a search.
#[derive(Debug)]
pub(crate) struct SearchNode<'g, T> {
    pub(crate) cell: &'g Cell<T>,
    /// Arena index of the node this one was reached from.
    pub(crate) parent: Option<usize>,
    /// Accumulated cost from the search seed.
    pub(crate) cost: f64,
}

/// Index-addressed pool of [`SearchNode`]s for a single search.
///
/// Parent links are arena indices, so the whole tree is dropped at once
/// when the search returns.
#[derive(Debug)]
pub(crate) struct NodeArena<'g, T> {
    nodes: Vec<SearchNode<'g, T>>,
}

impl<'g, T> NodeArena<'g, T> {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node, returning its index.
    pub(crate) fn push(&mut self, cell: &'g Cell<T>, parent: Option<usize>, cost: f64) -> usize {
        self.nodes.push(SearchNode { cell, parent, cost });
        self.nodes.len() - 1
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> &SearchNode<'g, T> {
        &self.nodes[idx]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Cells from `idx` up through its parent chain to the root, in that
    /// order.
    pub(crate) fn chain(&self, idx: usize) -> Vec<&'g Cell<T>> {
        let mut cells = Vec::new();
        let mut cur = Some(idx);
        while let Some(i) = cur {
            let node = &self.nodes[i];
            cells.push(node.cell);
            cur = node.parent;
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrace_core::{Grid, Point};

    #[test]
    fn chain_walks_to_root() {
        let g = Grid::filled(3, 1, '.');
        let mut arena = NodeArena::new();
        let root = arena.push(g.get(2, 0).unwrap(), None, 1.0);
        let mid = arena.push(g.get(1, 0).unwrap(), Some(root), 2.0);
        let leaf = arena.push(g.get(0, 0).unwrap(), Some(mid), 3.0);
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.get(leaf).cost, 3.0);

        let pts: Vec<Point> = arena.chain(leaf).iter().map(|c| c.pos()).collect();
        assert_eq!(pts, vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]);
        assert_eq!(arena.chain(root).len(), 1);
    }
}
