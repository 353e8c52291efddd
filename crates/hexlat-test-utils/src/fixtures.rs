//! Reusable grid fixtures and expected scenario outputs.
//!
//! Coordinates are `(x, y)` with `y` as the row. Expected outputs are raw
//! slot lists, `-1` marking an off-grid slot.

use hexlat_core::{CellIndex, GridCoord, NO_NEIGHBOR};

const X: CellIndex = NO_NEIGHBOR;

/// Square 3x3, immediate neighbours of the center `(1, 1)`.
pub const SQUARE_3X3_CENTER: GridCoord = GridCoord::new(1, 1);
pub const SQUARE_3X3_CENTER_NEIGHBORS: [CellIndex; 8] = [3, 6, 7, 8, 5, 2, 1, 0];

/// Square 3x3, immediate neighbours of the corner `(0, 0)`.
pub const SQUARE_3X3_CORNER: GridCoord = GridCoord::new(0, 0);
pub const SQUARE_3X3_CORNER_NEIGHBORS: [CellIndex; 8] = [X, X, 3, 4, 1, X, X, X];

/// Hex 4x4 with odd rows offset, ring at range 2 around `(1, 1)`.
pub const HEX_4X4_CENTER: GridCoord = GridCoord::new(1, 1);
pub const HEX_4X4_RING_TWO: [CellIndex; 12] = [12, 13, 14, 11, 7, 3, X, X, X, 0, X, 8];

/// Grid shapes worth sweeping: degenerate strips, squares, and oblong
/// grids of both parities.
pub const SHAPES: [(i32, i32); 8] = [
    (1, 1),
    (1, 5),
    (5, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (7, 5),
    (6, 9),
];

/// Deterministic per-cell values: cell `i` holds `i * 10`.
pub fn indexed_values(size: usize) -> Vec<u32> {
    (0..size as u32).map(|i| i * 10).collect()
}

/// Keep only the valid slots of a raw result.
pub fn valid_slots(raw: &[CellIndex]) -> Vec<CellIndex> {
    raw.iter().copied().filter(|&i| i != NO_NEIGHBOR).collect()
}

/// Sorted copy, for set-style comparisons.
pub fn sorted(mut raw: Vec<CellIndex>) -> Vec<CellIndex> {
    raw.sort_unstable();
    raw
}
