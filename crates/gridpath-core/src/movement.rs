//! Neighbor rules: which offsets count as a single move.

use crate::geom::Cell;

const FOUR_WAY: [Cell; 4] = [
    Cell::new(0, 1),
    Cell::new(1, 0),
    Cell::new(0, -1),
    Cell::new(-1, 0),
];

const EIGHT_WAY: [Cell; 8] = [
    Cell::new(0, 1),
    Cell::new(1, 0),
    Cell::new(0, -1),
    Cell::new(-1, 0),
    Cell::new(-1, 1),
    Cell::new(1, 1),
    Cell::new(1, -1),
    Cell::new(-1, -1),
];

/// Movement mode of a grid.
///
/// Every move costs the same regardless of direction; a diagonal step is
/// one move, not √2.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Movement {
    /// Right, down, left, up.
    #[default]
    FourWay,
    /// The four cardinal moves followed by the four diagonals.
    EightWay,
}

impl Movement {
    /// Offsets tried, in order, when generating neighbors.
    #[inline]
    pub fn offsets(self) -> &'static [Cell] {
        match self {
            Self::FourWay => &FOUR_WAY,
            Self::EightWay => &EIGHT_WAY,
        }
    }

    /// Whether `b` is reachable from `a` in exactly one move.
    pub fn is_adjacent(self, a: Cell, b: Cell) -> bool {
        let d = b - a;
        self.offsets().contains(&d)
    }
}
