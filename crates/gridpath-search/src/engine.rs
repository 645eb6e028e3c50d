use std::time::Instant;

use gridpath_core::Cell;
use log::{debug, trace};

use crate::config::SearchOptions;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::grid::{Grid, GridSpec};
use crate::result::SearchResult;
use crate::state::SearchState;
use crate::traits::WeightedPather;
use crate::variant::Variant;

/// Validate `spec`, build the grid and search it once with default options.
///
/// Construction errors abort before any search runs; an unreachable goal
/// yields `Ok` with `success == false`.
pub fn search(
    spec: &GridSpec,
    start: Cell,
    goal: Cell,
    variant: Variant,
) -> Result<SearchResult, SearchError> {
    Grid::new(spec)?.search(start, goal, variant)
}

/// Search any [`WeightedPather`] from `start` to `goal`.
///
/// Endpoints must be in bounds and free. All per-cell state is allocated
/// here and dropped on return, so concurrent calls on a shared pather do
/// not interact.
pub fn search_with<P: WeightedPather>(
    pather: &P,
    start: Cell,
    goal: Cell,
    variant: Variant,
    opts: &SearchOptions,
) -> Result<SearchResult, SearchError> {
    let started = Instant::now();
    let bounds = pather.bounds();
    for c in [start, goal] {
        if !bounds.contains(c) {
            debug!("{variant}: endpoint {c} outside {bounds}");
            return Err(SearchError::StartOrGoalOutOfBounds(c));
        }
        if !pather.is_free(c) {
            debug!("{variant}: endpoint {c} is blocked");
            return Err(SearchError::StartOrGoalBlocked(c));
        }
    }
    if opts.require_movement && start == goal {
        return Err(SearchError::StartEqualsGoal(start));
    }

    debug!("{variant}: searching {start} -> {goal} on {bounds}");
    let outcome = run(pather, start, goal, variant, opts);
    let elapsed = started.elapsed();

    let result = SearchResult {
        variant,
        path: outcome.path,
        success: outcome.success,
        cells_finalized: outcome.order.len(),
        finalize_order: outcome.order,
        elapsed,
        path_cost: outcome.cost,
    };
    debug!(
        "{variant}: success={} cost={} finalized={} in {:.3}ms",
        result.success,
        result.path_cost,
        result.cells_finalized,
        result.elapsed_ms()
    );
    Ok(result)
}

struct Outcome {
    path: Vec<Cell>,
    order: Vec<Cell>,
    cost: u64,
    success: bool,
}

/// Best-first search loop shared by both variants. Endpoints are already
/// validated.
fn run<P: WeightedPather>(
    pather: &P,
    start: Cell,
    goal: Cell,
    variant: Variant,
    opts: &SearchOptions,
) -> Outcome {
    let bounds = pather.bounds();
    let (Some(start_idx), Some(goal_idx)) = (bounds.index(start), bounds.index(goal)) else {
        return Outcome {
            path: Vec::new(),
            order: Vec::new(),
            cost: 0,
            success: false,
        };
    };

    let mut state = SearchState::new(bounds);
    let mut open = Frontier::new();

    state.open_source(start_idx);
    open.push(start_idx, variant.key(0, start, goal, opts.heuristic));

    let mut nbuf: Vec<Cell> = Vec::with_capacity(8);

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };
        let ci = current.idx;

        // Skip stale entries.
        if state.is_finalized(ci) {
            continue;
        }

        state.finalize(ci);
        let cp = bounds.cell(ci);
        trace!("{variant}: finalized {cp} key={}", current.key);

        if ci == goal_idx {
            break 'search true;
        }

        let current_g = state.g(ci);
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            if state.is_finalized(ni) {
                continue;
            }
            let tentative = current_g + u64::from(pather.cost(cp, np));
            if state.relax(ni, tentative, ci) {
                open.push(ni, variant.key(tentative, np, goal, opts.heuristic));
            }
        }
    };

    trace!(
        "{variant}: loop ended with {} frontier entries left after {} finalized",
        open.len(),
        state.finalized_count()
    );

    if !found {
        return Outcome {
            path: Vec::new(),
            order: state.into_order(),
            cost: 0,
            success: false,
        };
    }

    let cost = state.g(goal_idx);
    let path = state.path_to(goal_idx);
    Outcome {
        path,
        order: state.into_order(),
        cost,
        success: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Heuristic;
    use crate::traits::Pather;
    use gridpath_core::{Bounds, Movement};
    use std::collections::HashSet;

    fn c(row: i32, col: i32) -> Cell {
        Cell::new(row, col)
    }

    /// Path starts and ends at the endpoints, every cell is free, and each
    /// step is a single move.
    fn assert_valid_path(g: &Grid, r: &SearchResult, start: Cell, goal: Cell) {
        assert!(r.success);
        assert_eq!(r.path.first(), Some(&start));
        assert_eq!(r.path.last(), Some(&goal));
        for w in r.path.windows(2) {
            assert!(g.is_free(w[1]), "{} is not free", w[1]);
            assert!(
                g.movement().is_adjacent(w[0], w[1]),
                "{} -> {} is not a single move",
                w[0],
                w[1]
            );
        }
        let cost: u64 = r.path[1..]
            .iter()
            .map(|&p| u64::from(g.cost_at(p).unwrap()))
            .sum();
        assert_eq!(cost, r.path_cost);
    }

    fn assert_unique_order(r: &SearchResult) {
        assert_eq!(r.finalize_order.len(), r.cells_finalized);
        let set: HashSet<_> = r.finalize_order.iter().collect();
        assert_eq!(set.len(), r.finalize_order.len());
    }

    // -----------------------------------------------------------------------
    // Reference scenarios
    // -----------------------------------------------------------------------

    #[test]
    fn open_five_by_five() {
        let spec = GridSpec::new(5, 5);
        for variant in Variant::ALL {
            let r = search(&spec, c(0, 0), c(4, 4), variant).unwrap();
            assert!(r.success);
            assert_eq!(r.path_cost, 8);
            assert_eq!(r.path_len(), 9);
            assert_eq!(r.variant, variant);
            assert_valid_path(&spec.build().unwrap(), &r, c(0, 0), c(4, 4));
            assert_unique_order(&r);
        }
    }

    #[test]
    fn full_wall_blocks_goal() {
        let spec = GridSpec::new(3, 3).with_obstacles([c(0, 1), c(1, 1), c(2, 1)]);
        for variant in Variant::ALL {
            let r = search(&spec, c(0, 0), c(0, 2), variant).unwrap();
            assert!(!r.success);
            assert!(r.path.is_empty());
            assert_eq!(r.path_cost, 0);
            // Only the left column is reachable.
            assert_eq!(r.cells_finalized, 3);
            assert_unique_order(&r);
        }
    }

    #[test]
    fn single_cell_start_is_goal() {
        let spec = GridSpec::new(1, 1);
        for variant in Variant::ALL {
            let r = search(&spec, c(0, 0), c(0, 0), variant).unwrap();
            assert!(r.success);
            assert_eq!(r.path, vec![c(0, 0)]);
            assert_eq!(r.path_cost, 0);
            assert_eq!(r.cells_finalized, 1);
            assert_eq!(r.finalize_order, vec![c(0, 0)]);
        }
    }

    #[test]
    fn require_movement_rejects_trivial_search() {
        let g = GridSpec::new(2, 2).build().unwrap();
        let opts = SearchOptions::default().with_require_movement(true);
        assert_eq!(
            g.search_with(c(1, 1), c(1, 1), Variant::AStar, &opts),
            Err(SearchError::StartEqualsGoal(c(1, 1)))
        );
        assert!(g.search_with(c(0, 0), c(1, 1), Variant::AStar, &opts).is_ok());
    }

    #[test]
    fn eight_way_open_grid_uses_diagonals() {
        let g = GridSpec::new(5, 5)
            .with_movement(Movement::EightWay)
            .build()
            .unwrap();
        let cmp = g.compare(c(0, 0), c(4, 4), &SearchOptions::default()).unwrap();
        assert_eq!(cmp.dijkstra.path_cost, 4);
        assert_eq!(cmp.astar.path_cost, 4);
        assert_valid_path(&g, &cmp.astar, c(0, 0), c(4, 4));
    }

    #[test]
    fn astar_finalizes_fewer_cells_on_open_grid() {
        // Off the straight row every cell has a strictly larger A* key, so
        // A* only finalizes that row.
        let g = GridSpec::new(20, 20).build().unwrap();
        let cmp = g.compare(c(10, 0), c(10, 19), &SearchOptions::default()).unwrap();
        assert!(cmp.costs_agree());
        assert_eq!(cmp.dijkstra.path_cost, 19);
        assert_eq!(cmp.astar.cells_finalized, 20);
        assert!(cmp.astar.cells_finalized < cmp.dijkstra.cells_finalized);
        assert!(cmp.expansion_ratio().unwrap() < 1.0);
    }

    #[test]
    fn detour_around_wall() {
        // Wall across row 1 with a gap at the right edge.
        let spec = GridSpec::new(3, 4).with_obstacles([c(1, 0), c(1, 1), c(1, 2)]);
        let g = spec.build().unwrap();
        for variant in Variant::ALL {
            let r = g.search(c(0, 0), c(2, 0), variant).unwrap();
            assert_eq!(r.path_cost, 8);
            assert_valid_path(&g, &r, c(0, 0), c(2, 0));
        }
    }

    #[test]
    fn maze_preset_costs_agree() {
        let spec = GridSpec::new(8, 8).with_obstacles([
            c(1, 1),
            c(1, 2),
            c(1, 3),
            c(3, 1),
            c(3, 3),
            c(5, 1),
            c(5, 2),
            c(5, 3),
            c(5, 5),
        ]);
        let g = spec.build().unwrap();
        let cmp = g.compare(c(0, 0), c(7, 7), &SearchOptions::default()).unwrap();
        assert!(cmp.costs_agree());
        assert_eq!(cmp.dijkstra.path_cost, 14);
    }

    // -----------------------------------------------------------------------
    // Weighted grids
    // -----------------------------------------------------------------------

    #[test]
    fn weighted_grid_avoids_expensive_cells() {
        // Straight line through (0,1) costs 9 + 1; going around costs 4.
        let g = GridSpec::new(2, 3)
            .with_cost(c(0, 1), 9)
            .build()
            .unwrap();
        for variant in Variant::ALL {
            let r = g.search(c(0, 0), c(0, 2), variant).unwrap();
            assert_eq!(r.path_cost, 4);
            assert!(!r.path.contains(&c(0, 1)));
            assert_valid_path(&g, &r, c(0, 0), c(0, 2));
        }
    }

    #[test]
    fn weighted_cells_finalized_once() {
        let g = GridSpec::new(3, 3)
            .with_cost(c(0, 1), 4)
            .with_cost(c(1, 1), 4)
            .build()
            .unwrap();
        for variant in Variant::ALL {
            let r = g.search(c(0, 0), c(0, 2), variant).unwrap();
            assert_eq!(r.path_cost, 5);
            assert_unique_order(&r);
            assert_valid_path(&g, &r, c(0, 0), c(0, 2));
        }
    }

    #[test]
    fn improved_cells_expand_once() {
        // Eight-way with Manhattan pops cells out of cost order, so some
        // cells are pushed again at a lower cost; the superseded entries
        // must be discarded on pop.
        let g = GridSpec::new(7, 7)
            .with_movement(Movement::EightWay)
            .with_obstacles([c(1, 3), c(2, 3), c(3, 3), c(4, 3), c(5, 3)])
            .build()
            .unwrap();
        let r = g.search(c(3, 0), c(3, 6), Variant::AStar).unwrap();
        assert!(r.success);
        assert_unique_order(&r);
        assert_valid_path(&g, &r, c(3, 0), c(3, 6));
    }

    #[test]
    fn goal_cost_counts_on_entry() {
        let g = GridSpec::new(1, 2)
            .with_cost(c(0, 1), 7)
            .with_cost(c(0, 0), 100)
            .build()
            .unwrap();
        let r = g.search(c(0, 0), c(0, 1), Variant::AStar).unwrap();
        assert_eq!(r.path_cost, 7);
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    #[test]
    fn endpoint_errors() {
        let spec = GridSpec::new(3, 3).with_obstacles([c(1, 1)]);
        assert_eq!(
            search(&spec, c(1, 1), c(0, 0), Variant::Dijkstra),
            Err(SearchError::StartOrGoalBlocked(c(1, 1)))
        );
        assert_eq!(
            search(&spec, c(0, 0), c(1, 1), Variant::AStar),
            Err(SearchError::StartOrGoalBlocked(c(1, 1)))
        );
        assert_eq!(
            search(&spec, c(0, 3), c(0, 0), Variant::AStar),
            Err(SearchError::StartOrGoalOutOfBounds(c(0, 3)))
        );
        assert_eq!(
            search(&spec, c(0, 0), c(-1, 0), Variant::Dijkstra),
            Err(SearchError::StartOrGoalOutOfBounds(c(-1, 0)))
        );
    }

    #[test]
    fn construction_errors_surface_through_search() {
        assert_eq!(
            search(&GridSpec::new(0, 0), c(0, 0), c(0, 0), Variant::Dijkstra),
            Err(SearchError::InvalidGridDimensions { rows: 0, cols: 0 })
        );
        let spec = GridSpec::new(2, 2).with_obstacles([c(5, 5)]);
        assert_eq!(
            search(&spec, c(0, 0), c(1, 1), Variant::Dijkstra),
            Err(SearchError::ObstacleOutOfBounds(c(5, 5)))
        );
    }

    // -----------------------------------------------------------------------
    // Determinism and sharing
    // -----------------------------------------------------------------------

    #[test]
    fn repeated_searches_are_identical() {
        let g = GridSpec::new(6, 6)
            .with_obstacles([c(2, 2), c(2, 3), c(3, 2)])
            .build()
            .unwrap();
        for variant in Variant::ALL {
            let a = g.search(c(0, 0), c(5, 5), variant).unwrap();
            let b = g.search(c(0, 0), c(5, 5), variant).unwrap();
            assert!(a.same_outcome(&b));
            assert_eq!(a.finalize_order, b.finalize_order);
        }
    }

    #[test]
    fn shared_grid_across_threads() {
        let g = GridSpec::new(10, 10)
            .with_obstacles((0..9).map(|r| c(r, 5)))
            .build()
            .unwrap();
        let (d, a) = std::thread::scope(|s| {
            let d = s.spawn(|| g.search(c(0, 0), c(0, 9), Variant::Dijkstra));
            let a = s.spawn(|| g.search(c(0, 0), c(0, 9), Variant::AStar));
            (d.join().unwrap().unwrap(), a.join().unwrap().unwrap())
        });
        assert!(d.success && a.success);
        assert_eq!(d.path_cost, a.path_cost);
        assert_eq!(d.path_cost, 27);
    }

    #[test]
    fn elapsed_fits_inside_the_call() {
        let g = GridSpec::new(12, 12).build().unwrap();
        for variant in Variant::ALL {
            let outer = Instant::now();
            let r = g.search(c(0, 0), c(11, 11), variant).unwrap();
            let wall = outer.elapsed();
            assert!(r.elapsed <= wall, "{:?} > {:?}", r.elapsed, wall);
            assert!(r.elapsed_ms() >= 0.0);
        }
    }

    #[test]
    fn chebyshev_heuristic_on_eight_way() {
        let g = GridSpec::new(6, 6)
            .with_movement(Movement::EightWay)
            .with_obstacles([c(1, 1), c(2, 2), c(3, 3), c(1, 2), c(2, 3)])
            .build()
            .unwrap();
        let opts = SearchOptions::default().with_heuristic(Heuristic::Chebyshev);
        let cmp = g.compare(c(0, 0), c(5, 5), &opts).unwrap();
        assert!(cmp.costs_agree());
        assert_valid_path(&g, &cmp.astar, c(0, 0), c(5, 5));
    }

    // -----------------------------------------------------------------------
    // Custom pathers
    // -----------------------------------------------------------------------

    /// A ring road: only the border cells of the rectangle are passable.
    struct Ring {
        bounds: Bounds,
    }

    impl Pather for Ring {
        fn bounds(&self) -> Bounds {
            self.bounds
        }

        fn is_free(&self, p: Cell) -> bool {
            self.bounds.contains(p)
                && (p.row == 0
                    || p.col == 0
                    || p.row == self.bounds.rows() - 1
                    || p.col == self.bounds.cols() - 1)
        }

        fn neighbors(&self, p: Cell, buf: &mut Vec<Cell>) {
            crate::neighbors::append_neighbors(
                p,
                Movement::FourWay,
                |n| self.is_free(n),
                buf,
            );
        }
    }

    impl WeightedPather for Ring {
        fn cost(&self, _from: Cell, _to: Cell) -> u32 {
            2
        }
    }

    #[test]
    fn generic_pather() {
        let ring = Ring {
            bounds: Bounds::new(4, 5),
        };
        let opts = SearchOptions::default();
        let r = search_with(&ring, c(0, 0), c(3, 4), Variant::AStar, &opts).unwrap();
        assert_eq!(r.path_cost, 14);
        assert_eq!(
            search_with(&ring, c(1, 1), c(3, 4), Variant::AStar, &opts),
            Err(SearchError::StartOrGoalBlocked(c(1, 1)))
        );
    }
}
