use gridpath_core::{Cell, Movement};

/// Append the neighbors of `c` under `movement` into `buf`, keeping only
/// those for which `keep` returns `true`.
///
/// Neighbors are produced in [`Movement::offsets`] order. `buf` is not
/// cleared.
#[inline]
pub fn append_neighbors(
    c: Cell,
    movement: Movement,
    keep: impl Fn(Cell) -> bool,
    buf: &mut Vec<Cell>,
) {
    for &d in movement.offsets() {
        let n = c + d;
        if keep(n) {
            buf.push(n);
        }
    }
}
