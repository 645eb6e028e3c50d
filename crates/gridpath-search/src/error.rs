use std::fmt;

use gridpath_core::Cell;

/// Input validation failures, reported before any search runs.
///
/// An unreachable goal is *not* an error; see
/// [`SearchResult::success`](crate::SearchResult::success).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Rows or columns are zero or negative.
    InvalidGridDimensions { rows: i32, cols: i32 },
    /// An obstacle lies outside the grid.
    ObstacleOutOfBounds(Cell),
    /// A cost override lies outside the grid.
    CostOutOfBounds(Cell),
    /// A cost override is below 1.
    InvalidCost { cell: Cell, cost: u32 },
    /// Start or goal lies outside the grid.
    StartOrGoalOutOfBounds(Cell),
    /// Start or goal is an obstacle.
    StartOrGoalBlocked(Cell),
    /// Start equals goal while the caller requires at least one move.
    StartEqualsGoal(Cell),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridDimensions { rows, cols } => {
                write!(f, "invalid grid dimensions {rows}x{cols}: both must be at least 1")
            }
            Self::ObstacleOutOfBounds(c) => write!(f, "obstacle {c} is out of bounds"),
            Self::CostOutOfBounds(c) => write!(f, "cost override {c} is out of bounds"),
            Self::InvalidCost { cell, cost } => {
                write!(f, "cost {cost} at {cell} is invalid: costs must be at least 1")
            }
            Self::StartOrGoalOutOfBounds(c) => write!(f, "start/goal {c} is out of bounds"),
            Self::StartOrGoalBlocked(c) => write!(f, "start/goal {c} is an obstacle"),
            Self::StartEqualsGoal(c) => write!(f, "start and goal are both {c}"),
        }
    }
}

impl std::error::Error for SearchError {}
