use crate::distance::Heuristic;

/// Per-call search settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Estimate used by A*. Ignored by Dijkstra.
    pub heuristic: Heuristic,
    /// Reject `start == goal` with
    /// [`SearchError::StartEqualsGoal`](crate::SearchError::StartEqualsGoal)
    /// instead of returning the single-cell path.
    pub require_movement: bool,
}

impl SearchOptions {
    /// Set the A* heuristic (builder).
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Require at least one move (builder).
    pub fn with_require_movement(mut self, require: bool) -> Self {
        self.require_movement = require;
        self
    }
}
