//! Random obstacle maps that keep the goal reachable.
//!
//! [`ObstacleGen`] scatters a random number of obstacles (between
//! [`ObstacleConfig::min_obstacles`] and [`ObstacleConfig::max_density`] of
//! the grid) and re-rolls until the configured search finds a path. After
//! [`ObstacleConfig::max_attempts`] failures it falls back to exactly
//! `min_obstacles` obstacles and returns that map whether or not it is
//! solvable.

use gridpath_core::{Cell, Movement};
use gridpath_search::{GridSpec, SearchError, SearchResult, Variant};
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, RngExt};

/// Settings for [`ObstacleGen`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObstacleConfig {
    /// Lower bound on the number of obstacles per attempt.
    pub min_obstacles: usize,
    /// Upper bound on the obstacle count as a fraction of all cells.
    pub max_density: f64,
    /// Attempts before falling back to `min_obstacles`.
    pub max_attempts: usize,
    /// Movement mode of generated grids.
    pub movement: Movement,
    /// Strategy used to check that a path exists.
    pub variant: Variant,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            min_obstacles: 20,
            max_density: 0.35,
            max_attempts: 100,
            movement: Movement::FourWay,
            variant: Variant::Dijkstra,
        }
    }
}

impl ObstacleConfig {
    /// Set the minimum obstacle count (builder).
    pub fn with_min_obstacles(mut self, n: usize) -> Self {
        self.min_obstacles = n;
        self
    }

    /// Use `variant` with its conventional movement mode (builder).
    pub fn for_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self.movement = variant.default_movement();
        self
    }
}

/// A generated map and the search that accepted (or, on fallback, tested)
/// it.
#[derive(Debug, Clone)]
pub struct Generated {
    pub spec: GridSpec,
    pub result: SearchResult,
    /// Attempts made, including the fallback if it ran.
    pub attempts: usize,
}

/// Random obstacle generator.
pub struct ObstacleGen<R: Rng> {
    pub rng: R,
    pub config: ObstacleConfig,
}

impl<R: Rng> ObstacleGen<R> {
    /// Create a new generator.
    pub fn new(rng: R, config: ObstacleConfig) -> Self {
        Self { rng, config }
    }

    /// Generate a `rows × cols` map with obstacles never on `start` or
    /// `goal`.
    ///
    /// Fails only on invalid dimensions or endpoints.
    pub fn generate(
        &mut self,
        rows: i32,
        cols: i32,
        start: Cell,
        goal: Cell,
    ) -> Result<Generated, SearchError> {
        let base = GridSpec::new(rows, cols).with_movement(self.config.movement);
        let bounds = base.build()?.bounds();
        for c in [start, goal] {
            if !bounds.contains(c) {
                return Err(SearchError::StartOrGoalOutOfBounds(c));
            }
        }

        let mut candidates: Vec<Cell> = bounds
            .iter()
            .filter(|&c| c != start && c != goal)
            .collect();

        let lo = self.config.min_obstacles.min(candidates.len());
        let by_density = (bounds.len() as f64 * self.config.max_density) as usize;
        let hi = by_density.max(lo).min(candidates.len());

        for attempt in 1..=self.config.max_attempts {
            let n = self.rng.random_range(lo..=hi);
            let spec = self.scatter(&base, &mut candidates, n);
            let result = spec.build()?.search(start, goal, self.config.variant)?;
            if result.success {
                debug!(
                    "generated {} obstacles on {rows}x{cols} (attempt {attempt})",
                    spec.obstacles.len()
                );
                return Ok(Generated {
                    spec,
                    result,
                    attempts: attempt,
                });
            }
        }

        debug!(
            "no solvable map in {} attempts, falling back to {lo} obstacles",
            self.config.max_attempts
        );
        let spec = self.scatter(&base, &mut candidates, lo);
        let result = spec.build()?.search(start, goal, self.config.variant)?;
        Ok(Generated {
            spec,
            result,
            attempts: self.config.max_attempts + 1,
        })
    }

    /// `base` plus `n` distinct obstacles drawn from `candidates`.
    fn scatter(&mut self, base: &GridSpec, candidates: &mut [Cell], n: usize) -> GridSpec {
        candidates.shuffle(&mut self.rng);
        base.clone().with_obstacles(candidates[..n].iter().copied())
    }
}
