//! Benchmark profiles and utilities for the hexlat grid workspace.
//!
//! Provides pre-built grids for benchmarks and examples:
//!
//! - [`reference_square`] / [`reference_hex`]: 100x100 grids (10K cells)
//! - [`stress_square`]: 316x316 grid (~100K cells) for stress testing
//! - [`query_centers`]: deterministic query centers via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use hexlat_core::{Dispatch, GridCoord, GridError};
use hexlat_grid::{Grid, HexGrid, SquareGrid};
use hexlat_space::{HexOffset, Square8, Topology};

/// Side length of the reference grids.
pub const REFERENCE_SIDE: i32 = 100;

/// Side length of the stress grid.
pub const STRESS_SIDE: i32 = 316;

/// Store each cell's flat index as its value.
pub fn fill_with_index<Topo: Topology, D: Dispatch>(
    grid: &mut Grid<f32, Topo, D>,
) -> Result<(), GridError> {
    let config = *grid.config();
    for (i, coord) in config.coords().enumerate() {
        grid.set(coord, i as f32)?;
    }
    Ok(())
}

/// Build a reference square grid: 100x100 (10K cells), values filled.
pub fn reference_square() -> Result<SquareGrid<f32>, GridError> {
    let mut grid = SquareGrid::new(REFERENCE_SIDE, REFERENCE_SIDE, Square8)?;
    fill_with_index(&mut grid)?;
    Ok(grid)
}

/// Build a reference hex grid: 100x100 (10K cells), odd rows offset.
pub fn reference_hex() -> Result<HexGrid<f32>, GridError> {
    let mut grid = HexGrid::new(REFERENCE_SIDE, REFERENCE_SIDE, HexOffset::new(true))?;
    fill_with_index(&mut grid)?;
    Ok(grid)
}

/// Build a stress square grid: 316x316 (~100K cells).
///
/// Values are left at their defaults; only the neighbour table matters
/// for the stress runs.
pub fn stress_square() -> Result<SquareGrid<f32>, GridError> {
    SquareGrid::new(STRESS_SIDE, STRESS_SIDE, Square8)
}

/// Generate `n` deterministic, distinct query centers inside a
/// `width x length` grid.
///
/// Uses a simple multiplicative hash of the seed and linear probing, so
/// the same arguments always yield the same centers. `n` is capped at the
/// cell count.
pub fn query_centers(width: i32, length: i32, n: usize, seed: u64) -> Vec<GridCoord> {
    let cells = (width.max(0) as u64) * (length.max(0) as u64);
    if cells == 0 {
        return Vec::new();
    }
    let n = n.min(cells as usize);
    let mut taken = std::collections::HashSet::with_capacity(n);
    let mut centers = Vec::with_capacity(n);

    for i in 0..n as u64 {
        let mut pos = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407))
            % cells;
        while !taken.insert(pos) {
            pos = (pos + 1) % cells;
        }
        let w = width as u64;
        centers.push(GridCoord::new((pos % w) as i32, (pos / w) as i32));
    }

    centers
}
