//! Compares Dijkstra and A* on the preset scenarios and random maps.
//!
//! Run: cargo run --bin gridpath-demo [seed]
//!
//! Set `RUST_LOG=debug` (or `trace`) to see the search internals.

use gridpath_demos::{run, run_random};
use gridpath_gen::{ObstacleConfig, presets};
use gridpath_search::{SearchError, SearchOptions, Variant};

const RANDOM_SIZE: i32 = 10;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2024);

    if let Err(e) = demo(seed) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn demo(seed: u64) -> Result<(), SearchError> {
    let opts = SearchOptions::default();

    for scenario in presets() {
        let grid = scenario.spec.build()?;
        println!(
            "{}",
            run(&scenario.name, &grid, scenario.start, scenario.goal, &opts)?
        );
    }

    // Four-way map checked by Dijkstra, then the eight-way A* setup.
    println!(
        "{}",
        run_random(RANDOM_SIZE, seed, ObstacleConfig::default(), &opts)?
    );
    let astar = ObstacleConfig::default().for_variant(Variant::AStar);
    println!("{}", run_random(RANDOM_SIZE, seed, astar, &opts)?);
    Ok(())
}
