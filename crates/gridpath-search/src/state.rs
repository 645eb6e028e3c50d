use gridpath_core::{Bounds, Cell};

/// Sentinel cost of a cell the search has not reached.
pub(crate) const UNREACHABLE: u64 = u64::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: u64,
    pub(crate) parent: usize,
    pub(crate) finalized: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: NO_PARENT,
            finalized: false,
        }
    }
}

/// Best-known cost, parent link and finalized flag for every cell, plus the
/// order cells were finalized in. Created per search call.
pub(crate) struct SearchState {
    bounds: Bounds,
    nodes: Vec<Node>,
    order: Vec<Cell>,
}

impl SearchState {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            nodes: vec![Node::default(); bounds.len()],
            order: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn g(&self, idx: usize) -> u64 {
        self.nodes[idx].g
    }

    #[inline]
    pub(crate) fn is_finalized(&self, idx: usize) -> bool {
        self.nodes[idx].finalized
    }

    /// Seed a search origin at cost 0.
    pub(crate) fn open_source(&mut self, idx: usize) {
        let n = &mut self.nodes[idx];
        n.g = 0;
        n.parent = NO_PARENT;
    }

    /// Lock the cost of `idx` and log it in finalize order.
    pub(crate) fn finalize(&mut self, idx: usize) {
        debug_assert!(!self.nodes[idx].finalized);
        self.nodes[idx].finalized = true;
        self.order.push(self.bounds.cell(idx));
    }

    /// Record `g` reached through `parent` if it strictly improves the
    /// best-known cost of `idx`. Returns whether it did.
    pub(crate) fn relax(&mut self, idx: usize, g: u64, parent: usize) -> bool {
        let n = &mut self.nodes[idx];
        if n.finalized || g >= n.g {
            return false;
        }
        n.g = g;
        n.parent = parent;
        true
    }

    /// Follow parent links back from `goal` and return the path in
    /// start-to-goal order.
    pub(crate) fn path_to(&self, goal: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(self.bounds.cell(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }

    pub(crate) fn finalized_count(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn into_order(self) -> Vec<Cell> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_unreached() {
        let st = SearchState::new(Bounds::new(2, 2));
        for i in 0..4 {
            assert_eq!(st.g(i), UNREACHABLE);
            assert!(!st.is_finalized(i));
        }
        assert_eq!(st.finalized_count(), 0);
    }

    #[test]
    fn relax_requires_strict_improvement() {
        let mut st = SearchState::new(Bounds::new(1, 3));
        st.open_source(0);
        assert!(st.relax(1, 5, 0));
        assert!(!st.relax(1, 5, 2));
        assert!(st.relax(1, 4, 2));
        assert_eq!(st.g(1), 4);
    }

    #[test]
    fn finalized_cells_never_improve() {
        let mut st = SearchState::new(Bounds::new(1, 3));
        st.open_source(0);
        st.relax(1, 3, 0);
        st.finalize(1);
        assert!(!st.relax(1, 1, 0));
        assert_eq!(st.g(1), 3);
    }

    #[test]
    fn path_follows_parents() {
        let b = Bounds::new(1, 3);
        let mut st = SearchState::new(b);
        st.open_source(0);
        st.relax(1, 1, 0);
        st.relax(2, 2, 1);
        assert_eq!(
            st.path_to(2),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
        );
        assert_eq!(st.path_to(0), vec![Cell::new(0, 0)]);
    }
}
