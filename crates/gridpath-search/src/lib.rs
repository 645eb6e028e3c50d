//! Shortest-path search over bounded occupancy grids.
//!
//! Two strategies share one engine:
//!
//! - **Dijkstra** uniform-cost search, frontier keyed by accumulated cost.
//! - **A\*** with an admissible heuristic, frontier keyed by accumulated cost
//!   plus the estimate to the goal.
//!
//! The usual entry point is [`search`], which validates a [`GridSpec`],
//! builds a [`Grid`] and runs one variant. Callers comparing strategies on
//! the same map build the [`Grid`] once and call [`Grid::search`] or
//! [`Grid::compare`]; a grid is immutable and can be shared across threads.
//!
//! Failing to reach the goal is not an error: the returned
//! [`SearchResult`] has `success == false` and an empty path. Errors are
//! reserved for invalid input ([`SearchError`]).
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | bounds, occupancy, neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | per-move cost |
//!
//! [`Grid`] implements both; [`search_with`] accepts any [`WeightedPather`].

mod config;
mod distance;
mod engine;
mod error;
mod frontier;
mod grid;
mod neighbors;
mod result;
mod state;
mod traits;
mod variant;

pub use config::SearchOptions;
pub use distance::{Heuristic, chebyshev, manhattan};
pub use engine::{search, search_with};
pub use error::SearchError;
pub use grid::{CellCost, Grid, GridSpec};
pub use neighbors::append_neighbors;
pub use result::{Comparison, SearchResult};
pub use traits::{Pather, WeightedPather};
pub use variant::Variant;

pub use gridpath_core::{Bounds, Cell, Movement};
