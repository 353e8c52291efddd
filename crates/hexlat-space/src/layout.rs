//! Mapping from cell coordinates to world-space positions.

use hexlat_core::GridCoord;

/// Distance from a hex center to the middle of one of its edges, for a
/// unit-sized cell.
pub const EDGE_DISTANCE: f32 = 0.866;

/// Vertical spacing between hex rows, for a unit-sized cell.
pub const HEIGHT_INTERVAL: f32 = 1.5;

/// Horizontal width of a unit hex, corner to corner across flats.
pub const WIDTH_INTERVAL: f32 = 1.732;

/// Cell size and origin offset used to place cells in world space.
///
/// The layout is independent of any particular grid; a topology picks the
/// formula (see [`Topology::cell_center`](crate::Topology::cell_center)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldLayout {
    /// Scale of one cell along x and y.
    pub cell_size: [f32; 2],
    /// World-space offset added to every position.
    pub gap: [f32; 2],
}

impl Default for WorldLayout {
    fn default() -> Self {
        Self {
            cell_size: [1.0, 1.0],
            gap: [0.0, 0.0],
        }
    }
}

impl WorldLayout {
    /// Create a layout.
    pub const fn new(cell_size: [f32; 2], gap: [f32; 2]) -> Self {
        Self { cell_size, gap }
    }

    /// Center of a square cell.
    pub fn square_center(&self, coord: GridCoord) -> [f32; 2] {
        let [sx, sy] = self.cell_size;
        let [gx, gy] = self.gap;
        [
            sx * coord.x as f32 + sx / 2.0 + gx,
            sy * coord.y as f32 + sy / 2.0 + gy,
        ]
    }

    /// Center of a hex cell. Offset rows shift right by one edge distance.
    pub fn hex_center(&self, coord: GridCoord, offset_row: bool) -> [f32; 2] {
        let [sx, sy] = self.cell_size;
        let [gx, gy] = self.gap;
        let shift = if offset_row { EDGE_DISTANCE * sx } else { 0.0 };
        [
            coord.x as f32 * 2.0 * EDGE_DISTANCE * sx + shift + gx + WIDTH_INTERVAL * sx / 2.0,
            coord.y as f32 * HEIGHT_INTERVAL * 0.75 * sy + gy + 0.5 * sy,
        ]
    }
}
