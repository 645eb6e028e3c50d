use std::fmt;

use gridpath_core::{Cell, Movement};

use crate::distance::Heuristic;

/// Search strategy. Both run the same engine and differ only in the
/// frontier key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Variant {
    /// Uniform-cost search; key = accumulated cost.
    Dijkstra,
    /// Key = accumulated cost + heuristic estimate to the goal.
    AStar,
}

impl Variant {
    /// Both variants, Dijkstra first.
    pub const ALL: [Variant; 2] = [Variant::Dijkstra, Variant::AStar];

    /// Frontier key for a cell reached at cost `g`.
    #[inline]
    pub fn key(self, g: u64, c: Cell, goal: Cell, heuristic: Heuristic) -> u64 {
        match self {
            Self::Dijkstra => g,
            Self::AStar => g + heuristic.estimate(c, goal),
        }
    }

    /// Movement mode each variant is conventionally run with: four-way for
    /// Dijkstra, eight-way for A*.
    pub fn default_movement(self) -> Movement {
        match self {
            Self::Dijkstra => Movement::FourWay,
            Self::AStar => Movement::EightWay,
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        let goal = Cell::new(4, 4);
        let c = Cell::new(1, 2);
        assert_eq!(Variant::Dijkstra.key(3, c, goal, Heuristic::Manhattan), 3);
        assert_eq!(Variant::AStar.key(3, c, goal, Heuristic::Manhattan), 3 + 5);
        assert_eq!(Variant::AStar.key(3, c, goal, Heuristic::Chebyshev), 3 + 3);
    }

    #[test]
    fn names() {
        assert_eq!(Variant::AStar.to_string(), "A*");
        assert_eq!(Variant::Dijkstra.default_movement(), Movement::FourWay);
        assert_eq!(Variant::AStar.default_movement(), Movement::EightWay);
    }
}
