//! Built-in demonstration scenarios.

use gridpath_core::Cell;
use gridpath_search::{Comparison, GridSpec, SearchError, SearchOptions};

/// A named grid with fixed endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub name: String,
    pub spec: GridSpec,
    pub start: Cell,
    pub goal: Cell,
}

impl Scenario {
    pub fn new(name: impl Into<String>, spec: GridSpec, start: Cell, goal: Cell) -> Self {
        Self {
            name: name.into(),
            spec,
            start,
            goal,
        }
    }

    /// Run both variants on this scenario.
    pub fn compare(&self, opts: &SearchOptions) -> Result<Comparison, SearchError> {
        self.spec.build()?.compare(self.start, self.goal, opts)
    }
}

fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
    coords.iter().map(|&p| Cell::from(p)).collect()
}

/// The preset scenarios, smallest first.
pub fn presets() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "Simple 5x5 Grid - No Obstacles",
            GridSpec::new(5, 5),
            Cell::new(0, 0),
            Cell::new(4, 4),
        ),
        Scenario::new(
            "10x10 Grid - With Obstacles",
            GridSpec::new(10, 10).with_obstacles(cells(&[
                (2, 2),
                (2, 3),
                (2, 4),
                (3, 4),
                (4, 4),
                (5, 4),
                (6, 4),
            ])),
            Cell::new(0, 0),
            Cell::new(9, 9),
        ),
        Scenario::new(
            "8x8 Grid - Maze-like",
            GridSpec::new(8, 8).with_obstacles(cells(&[
                (1, 1),
                (1, 2),
                (1, 3),
                (3, 1),
                (3, 3),
                (5, 1),
                (5, 2),
                (5, 3),
                (5, 5),
            ])),
            Cell::new(0, 0),
            Cell::new(7, 7),
        ),
    ]
}
