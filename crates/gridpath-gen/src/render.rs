//! Text overlays of a grid and a search result.

use std::collections::HashSet;
use std::fmt;

use gridpath_core::Cell;
use gridpath_search::{Grid, SearchResult};

/// Renders a grid with endpoints and, optionally, a search result on top.
///
/// Per cell, first match wins: `S` start, `G` goal, `#` obstacle, `*` path,
/// `+` finalized but off the path, a digit for cells costing 2–9, `.`
/// otherwise. Costs above 9 show as `9`.
pub struct Overlay<'a> {
    grid: &'a Grid,
    start: Cell,
    goal: Cell,
    path: HashSet<Cell>,
    finalized: HashSet<Cell>,
}

impl<'a> Overlay<'a> {
    /// The bare grid with its endpoints.
    pub fn new(grid: &'a Grid, start: Cell, goal: Cell) -> Self {
        Self {
            grid,
            start,
            goal,
            path: HashSet::new(),
            finalized: HashSet::new(),
        }
    }

    /// Draw `result`'s path and finalized cells (builder).
    pub fn with_result(mut self, result: &SearchResult) -> Self {
        self.path = result.path.iter().copied().collect();
        self.finalized = result.finalize_order.iter().copied().collect();
        self
    }

    fn glyph(&self, c: Cell) -> char {
        if c == self.start {
            'S'
        } else if c == self.goal {
            'G'
        } else if self.grid.is_blocked(c) {
            '#'
        } else if self.path.contains(&c) {
            '*'
        } else if self.finalized.contains(&c) {
            '+'
        } else {
            match self.grid.cost_at(c) {
                Some(cost) if cost > 1 => char::from_digit(cost.min(9), 10).unwrap_or('9'),
                _ => '.',
            }
        }
    }
}

impl fmt::Display for Overlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.grid.cols() {
                write!(f, "{}", self.glyph(Cell::new(row, col)))?;
            }
        }
        Ok(())
    }
}
