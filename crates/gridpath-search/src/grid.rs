//! The occupancy grid: [`GridSpec`] describes one, [`Grid`] is the validated,
//! immutable form the engine queries.

use gridpath_core::{Bounds, Cell, Movement};
use log::debug;

use crate::config::SearchOptions;
use crate::engine;
use crate::error::SearchError;
use crate::neighbors::append_neighbors;
use crate::result::{Comparison, SearchResult};
use crate::traits::{Pather, WeightedPather};
use crate::variant::Variant;

/// Traversal cost assigned to a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCost {
    pub cell: Cell,
    pub cost: u32,
}

// ---------------------------------------------------------------------------
// GridSpec
// ---------------------------------------------------------------------------

/// Plain description of a grid: size, obstacles, movement mode and
/// optional per-cell costs.
///
/// A spec with no cost overrides is unit-cost. With at least one override
/// the grid is weighted: entering a cell costs its assigned cost, and cells
/// without an override cost 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub rows: i32,
    pub cols: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Cell>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub movement: Movement,
    #[cfg_attr(feature = "serde", serde(default))]
    pub costs: Vec<CellCost>,
}

impl GridSpec {
    /// An obstacle-free, four-way, unit-cost grid.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Add obstacles (builder).
    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Cell>) -> Self {
        self.obstacles.extend(obstacles);
        self
    }

    /// Set the movement mode (builder).
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    /// Assign a traversal cost to `cell` (builder).
    pub fn with_cost(mut self, cell: Cell, cost: u32) -> Self {
        self.costs.push(CellCost { cell, cost });
        self
    }

    /// Validate the spec and build a [`Grid`].
    pub fn build(&self) -> Result<Grid, SearchError> {
        Grid::new(self)
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A validated occupancy grid.
///
/// All queries are O(1) flat-array lookups. A `Grid` never changes after
/// construction, so it can be searched repeatedly or shared between
/// threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    movement: Movement,
    blocked: Vec<bool>,
    // Present only for weighted grids.
    costs: Option<Vec<u32>>,
}

impl Grid {
    /// Build a grid from a spec.
    ///
    /// Fails on non-positive dimensions, out-of-bounds obstacles or cost
    /// overrides, and costs below 1.
    pub fn new(spec: &GridSpec) -> Result<Self, SearchError> {
        if spec.rows < 1 || spec.cols < 1 {
            debug!("grid rejected: dimensions {}x{}", spec.rows, spec.cols);
            return Err(SearchError::InvalidGridDimensions {
                rows: spec.rows,
                cols: spec.cols,
            });
        }
        let bounds = Bounds::new(spec.rows, spec.cols);

        let mut blocked = vec![false; bounds.len()];
        for &o in &spec.obstacles {
            let Some(i) = bounds.index(o) else {
                debug!("grid rejected: obstacle {o} outside {bounds}");
                return Err(SearchError::ObstacleOutOfBounds(o));
            };
            blocked[i] = true;
        }

        let costs = if spec.costs.is_empty() {
            None
        } else {
            let mut costs = vec![1u32; bounds.len()];
            for &CellCost { cell, cost } in &spec.costs {
                let Some(i) = bounds.index(cell) else {
                    debug!("grid rejected: cost override {cell} outside {bounds}");
                    return Err(SearchError::CostOutOfBounds(cell));
                };
                if cost < 1 {
                    return Err(SearchError::InvalidCost { cell, cost });
                }
                costs[i] = cost;
            }
            Some(costs)
        };

        Ok(Self {
            bounds,
            movement: spec.movement,
            blocked,
            costs,
        })
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Movement mode used for neighbor generation.
    #[inline]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// Whether the grid carries per-cell costs.
    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.costs.is_some()
    }

    /// `false` if `c` is out of bounds or blocked.
    #[inline]
    pub fn is_free(&self, c: Cell) -> bool {
        match self.bounds.index(c) {
            Some(i) => !self.blocked[i],
            None => false,
        }
    }

    /// Whether `c` is an in-bounds obstacle.
    #[inline]
    pub fn is_blocked(&self, c: Cell) -> bool {
        self.bounds.index(c).is_some_and(|i| self.blocked[i])
    }

    /// Cost of entering `c`, or `None` if out of bounds.
    #[inline]
    pub fn cost_at(&self, c: Cell) -> Option<u32> {
        let i = self.bounds.index(c)?;
        Some(self.costs.as_ref().map_or(1, |costs| costs[i]))
    }

    /// Number of blocked cells.
    pub fn obstacle_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Traversable neighbors of `c` with the cost of moving into each.
    pub fn neighbors(&self, c: Cell) -> Vec<(Cell, u32)> {
        let mut buf = Vec::with_capacity(8);
        Pather::neighbors(self, c, &mut buf);
        buf.into_iter()
            .map(|n| (n, WeightedPather::cost(self, c, n)))
            .collect()
    }

    /// Search from `start` to `goal` with default options.
    pub fn search(
        &self,
        start: Cell,
        goal: Cell,
        variant: Variant,
    ) -> Result<SearchResult, SearchError> {
        engine::search_with(self, start, goal, variant, &SearchOptions::default())
    }

    /// Search from `start` to `goal` with explicit options.
    pub fn search_with(
        &self,
        start: Cell,
        goal: Cell,
        variant: Variant,
        opts: &SearchOptions,
    ) -> Result<SearchResult, SearchError> {
        engine::search_with(self, start, goal, variant, opts)
    }

    /// Run both variants on this grid with the same endpoints and options.
    pub fn compare(
        &self,
        start: Cell,
        goal: Cell,
        opts: &SearchOptions,
    ) -> Result<Comparison, SearchError> {
        let dijkstra = self.search_with(start, goal, Variant::Dijkstra, opts)?;
        let astar = self.search_with(start, goal, Variant::AStar, opts)?;
        Ok(Comparison { dijkstra, astar })
    }
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn is_free(&self, c: Cell) -> bool {
        Grid::is_free(self, c)
    }

    #[inline]
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        append_neighbors(c, self.movement, |n| Grid::is_free(self, n), buf);
    }
}

impl WeightedPather for Grid {
    #[inline]
    fn cost(&self, _from: Cell, to: Cell) -> u32 {
        self.cost_at(to).unwrap_or(1)
    }
}
