//! **gridpath-core**: geometry primitives shared by the *gridpath* crates.
//!
//! This crate provides the coordinate types every other crate speaks:
//! [`Cell`] (a `(row, col)` pair), [`Bounds`] (a `rows × cols` rectangle
//! anchored at the origin, with flat-index conversion) and [`Movement`]
//! (the 4- or 8-directional neighbor rule).

pub mod geom;
pub mod movement;

pub use geom::{Bounds, BoundsIter, Cell};
pub use movement::Movement;
