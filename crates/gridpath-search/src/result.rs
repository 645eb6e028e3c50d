use std::time::Duration;

use gridpath_core::Cell;

use crate::variant::Variant;

/// Outcome of one search call.
///
/// `success == false` with an empty `path` means the goal is unreachable;
/// that is a normal outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Strategy that produced this result.
    pub variant: Variant,
    /// Cells from start to goal inclusive; empty when unreachable.
    pub path: Vec<Cell>,
    /// Whether the goal was finalized.
    pub success: bool,
    /// Number of cells finalized (expanded).
    pub cells_finalized: usize,
    /// Cells in the order they were finalized, each at most once.
    pub finalize_order: Vec<Cell>,
    /// Wall time of the whole search call, endpoint validation included.
    pub elapsed: Duration,
    /// Sum of edge costs along `path`; 0 when unreachable.
    pub path_cost: u64,
}

impl SearchResult {
    /// Number of cells on the path (including both endpoints).
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Number of moves on the path.
    #[inline]
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Elapsed time in fractional milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Whether two results describe the same outcome, ignoring timing.
    pub fn same_outcome(&self, other: &SearchResult) -> bool {
        self.success == other.success
            && self.path_cost == other.path_cost
            && self.path == other.path
    }
}

/// Dijkstra and A* run on the same grid and endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub dijkstra: SearchResult,
    pub astar: SearchResult,
}

impl Comparison {
    /// Both found a path of the same cost, or both failed.
    pub fn costs_agree(&self) -> bool {
        self.dijkstra.success == self.astar.success
            && self.dijkstra.path_cost == self.astar.path_cost
    }

    /// A* expansions as a fraction of Dijkstra's. `None` if Dijkstra
    /// finalized nothing.
    pub fn expansion_ratio(&self) -> Option<f64> {
        if self.dijkstra.cells_finalized == 0 {
            return None;
        }
        Some(self.astar.cells_finalized as f64 / self.dijkstra.cells_finalized as f64)
    }
}
