use gridpath_core::{Bounds, Cell};

/// Minimal search interface: bounds, occupancy, neighbors.
pub trait Pather {
    /// Rectangle every searchable cell lies in. Per-cell tables are sized
    /// from it.
    fn bounds(&self) -> Bounds;

    /// Whether `c` is in bounds and not blocked.
    fn is_free(&self, c: Cell) -> bool;

    /// Append traversable neighbors of `c` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 1 for the
    /// A* heuristics in this crate to stay admissible.
    fn cost(&self, from: Cell, to: Cell) -> u32;
}
