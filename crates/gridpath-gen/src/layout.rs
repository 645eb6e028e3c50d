//! Grids written as text.
//!
//! A [`Layout`] parses an ASCII picture of a grid into a [`GridSpec`] plus
//! optional start and goal markers:
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | free, cost 1 |
//! | `#` | obstacle |
//! | `S` | start (free) |
//! | `G` | goal (free) |
//! | `1`–`9` | free, entering costs the digit |
//!
//! Leading and trailing whitespace is trimmed from the whole text and from
//! each line, so layouts can be indented in source. All lines must have the
//! same width.

use std::fmt;
use std::str::FromStr;

use gridpath_core::{Cell, Movement};
use gridpath_search::{GridSpec, SearchError, SearchOptions, SearchResult, Variant};

/// A parsed text grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    spec: GridSpec,
    start: Option<Cell>,
    goal: Option<Cell>,
}

impl Layout {
    /// Parse a layout. See the [module docs](self) for the format.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut spec = GridSpec::default();
        let mut start = None;
        let mut goal = None;
        let mut width: Option<usize> = None;
        let mut rows = 0i32;

        for (row, line) in s.lines().map(str::trim).enumerate() {
            let row = row as i32;
            let mut cols = 0usize;
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row, col as i32);
                match ch {
                    '.' => {}
                    '#' => spec.obstacles.push(cell),
                    'S' => set_marker(&mut start, 'S', cell)?,
                    'G' => set_marker(&mut goal, 'G', cell)?,
                    '1'..='9' => {
                        let cost = ch.to_digit(10).unwrap_or(1);
                        if cost > 1 {
                            spec = spec.with_cost(cell, cost);
                        }
                    }
                    _ => return Err(LayoutError::InvalidChar { ch, cell }),
                }
                cols += 1;
            }
            match width {
                None => width = Some(cols),
                Some(w) if w != cols => {
                    return Err(LayoutError::InconsistentWidth {
                        row,
                        expected: w,
                        found: cols,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        spec.rows = rows;
        spec.cols = width.unwrap_or(0) as i32;
        Ok(Self { spec, start, goal })
    }

    /// Set the movement mode of the parsed grid (builder).
    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.spec.movement = movement;
        self
    }

    /// The grid description.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Consume the layout, keeping only the grid description.
    pub fn into_spec(self) -> GridSpec {
        self.spec
    }

    /// The `S` marker, if present.
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    /// The `G` marker, if present.
    pub fn goal(&self) -> Option<Cell> {
        self.goal
    }

    /// Search from `S` to `G` with default options.
    pub fn search(&self, variant: Variant) -> Result<SearchResult, LayoutError> {
        self.search_with(variant, &SearchOptions::default())
    }

    /// Search from `S` to `G`.
    pub fn search_with(
        &self,
        variant: Variant,
        opts: &SearchOptions,
    ) -> Result<SearchResult, LayoutError> {
        let start = self.start.ok_or(LayoutError::MissingMarker('S'))?;
        let goal = self.goal.ok_or(LayoutError::MissingMarker('G'))?;
        let grid = self.spec.build()?;
        Ok(grid.search_with(start, goal, variant, opts)?)
    }
}

fn set_marker(slot: &mut Option<Cell>, ch: char, cell: Cell) -> Result<(), LayoutError> {
    if let Some(first) = *slot {
        return Err(LayoutError::DuplicateMarker { ch, first, second: cell });
    }
    *slot = Some(cell);
    Ok(())
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors that can occur when parsing or searching a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The text contains no cells.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// A character outside the layout alphabet.
    InvalidChar { ch: char, cell: Cell },
    /// `S` or `G` appears more than once.
    DuplicateMarker { ch: char, first: Cell, second: Cell },
    /// `S` or `G` is needed but absent.
    MissingMarker(char),
    /// The parsed grid failed validation.
    Search(SearchError),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "layout: no cells"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, cell } => {
                write!(f, "layout contains invalid character \u{201c}{ch}\u{201d} at {cell}")
            }
            Self::DuplicateMarker { ch, first, second } => {
                write!(f, "layout: marker {ch} at {first} and again at {second}")
            }
            Self::MissingMarker(ch) => write!(f, "layout: missing marker {ch}"),
            Self::Search(e) => write!(f, "layout: {e}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for LayoutError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
