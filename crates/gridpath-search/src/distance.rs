use gridpath_core::Cell;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> u64 {
    (a.row - b.row).unsigned_abs() as u64 + (a.col - b.col).unsigned_abs() as u64
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Cell, b: Cell) -> u64 {
    (a.row - b.row)
        .unsigned_abs()
        .max((a.col - b.col).unsigned_abs()) as u64
}

/// Remaining-cost estimate used to order the A* frontier.
///
/// [`Manhattan`](Self::Manhattan) is admissible and consistent for
/// four-way movement with costs >= 1. With eight-way unit-cost movement it
/// can overestimate (one diagonal move covers two Manhattan units), so A*
/// may return a longer path than Dijkstra around obstacles; use
/// [`Chebyshev`](Self::Chebyshev) there when optimality matters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Chebyshev,
}

impl Heuristic {
    /// Estimate of the cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Cell, to: Cell) -> u64 {
        match self {
            Self::Manhattan => manhattan(from, to),
            Self::Chebyshev => chebyshev(from, to),
        }
    }
}
