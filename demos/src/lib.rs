//! Shared report formatting for the gridpath demo.
//!
//! Runs a scenario through both search variants and prints a side-by-side
//! summary followed by an overlay of each result.

use std::fmt::Write as _;

use gridpath_core::{Cell, Movement};
use gridpath_gen::{ObstacleConfig, ObstacleGen, Overlay};
use gridpath_search::{Comparison, Grid, SearchError, SearchOptions, SearchResult};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// One line per variant: status, cost, moves, expansions, time.
pub fn summary_line(r: &SearchResult) -> String {
    let status = if r.success { "found" } else { "no path" };
    format!(
        "{:<9} {:<8} cost {:>4}  moves {:>4}  finalized {:>5}  {:>8.3} ms",
        r.variant.name(),
        status,
        r.path_cost,
        r.moves(),
        r.cells_finalized,
        r.elapsed_ms()
    )
}

/// Full report for a comparison: summary lines, the expansion ratio and
/// both overlays.
pub fn report(grid: &Grid, start: Cell, goal: Cell, cmp: &Comparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", summary_line(&cmp.dijkstra));
    let _ = writeln!(out, "{}", summary_line(&cmp.astar));
    if let Some(ratio) = cmp.expansion_ratio() {
        let _ = writeln!(out, "A* finalized {:.0}% of Dijkstra's cells", ratio * 100.0);
    }
    for r in [&cmp.dijkstra, &cmp.astar] {
        let _ = writeln!(out, "\n{}:", r.variant);
        let _ = writeln!(out, "{}", Overlay::new(grid, start, goal).with_result(r));
    }
    out
}

/// Build, compare and report a grid in one go.
pub fn run(
    title: &str,
    grid: &Grid,
    start: Cell,
    goal: Cell,
    opts: &SearchOptions,
) -> Result<String, SearchError> {
    info!(
        "running {title}: {}x{} grid, {} obstacles",
        grid.rows(),
        grid.cols(),
        grid.obstacle_count()
    );
    let cmp = grid.compare(start, goal, opts)?;
    if !cmp.costs_agree() {
        info!("{title}: variants disagree on cost");
    }
    Ok(format!("== {title} ==\n{}", report(grid, start, goal, &cmp)))
}

/// Generate a seeded `size × size` random map from corner to corner and
/// report it.
///
/// The config decides the movement mode, so
/// `ObstacleConfig::default().for_variant(Variant::AStar)` gives the
/// eight-way setup A* is usually shown with.
pub fn run_random(
    size: i32,
    seed: u64,
    config: ObstacleConfig,
    opts: &SearchOptions,
) -> Result<String, SearchError> {
    let start = Cell::new(0, 0);
    let goal = Cell::new(size - 1, size - 1);
    let mut generator = ObstacleGen::new(StdRng::seed_from_u64(seed), config);
    let generated = generator.generate(size, size, start, goal)?;
    let grid = generated.spec.build()?;
    let moves = match grid.movement() {
        Movement::FourWay => "4-way",
        Movement::EightWay => "8-way",
    };
    let title = format!(
        "Random {size}x{size} Grid, {moves}, checked with {} (seed {seed}, {} obstacles, {} attempts)",
        generator.config.variant,
        generated.spec.obstacles.len(),
        generated.attempts
    );
    run(&title, &grid, start, goal, opts)
}
