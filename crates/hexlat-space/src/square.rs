//! 2D square grid with 8-connected neighbourhood (cardinal + diagonal).

use crate::layout::WorldLayout;
use crate::line::Line;
use crate::tables::{self, SQUARE_SLOTS, SQUARE_STEPS};
use crate::topology::{saturating_i32, Topology};
use hexlat_core::{Direction, GridCoord};
use smallvec::SmallVec;
use std::num::NonZeroU32;

/// Square topology with eight neighbours per interior cell.
///
/// Neighbour slots are `Left, UpLeft, Up, UpRight, Right, DownRight, Down,
/// DownLeft`. Distance is Chebyshev (L-inf), consistent with diagonal
/// moves costing 1, so the ring at `r` is the boundary of the
/// `(2r + 1) x (2r + 1)` square around the center: `8r` cells.
///
/// Rings are traced from four corners, each walking `2r` cells:
///
/// | corner         | walks |
/// |----------------|-------|
/// | `(x-r, y+r)`   | Right |
/// | `(x+r, y+r)`   | Down  |
/// | `(x+r, y-r)`   | Left  |
/// | `(x-r, y-r)`   | Up    |
///
/// # Examples
///
/// ```
/// use hexlat_core::GridCoord;
/// use hexlat_space::{Square8, Topology};
/// use std::num::NonZeroU32;
///
/// let sq = Square8;
/// let n = sq.neighbor_coords(GridCoord::new(1, 1));
/// assert_eq!(n.len(), 8);
/// assert_eq!(n[0], GridCoord::new(0, 1)); // Left
/// assert_eq!(n[2], GridCoord::new(1, 2)); // Up
///
/// let r2 = NonZeroU32::new(2).unwrap();
/// assert_eq!(sq.ring_len(r2), 16);
/// assert_eq!(sq.distance(GridCoord::new(0, 0), GridCoord::new(3, -4)), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Square8;

impl Square8 {
    /// Corner offsets (as multiples of `r`) and their walk directions, in
    /// output order.
    const CORNERS: [(i32, i32, Direction); 4] = [
        (-1, 1, Direction::Right),
        (1, 1, Direction::Down),
        (1, -1, Direction::Left),
        (-1, -1, Direction::Up),
    ];
}

impl Topology for Square8 {
    const NEIGHBOR_COUNT: usize = 8;
    const BATCH_HINT: usize = 8;

    fn name(&self) -> &'static str {
        "square8"
    }

    fn neighbor_coords(&self, coord: GridCoord) -> SmallVec<[GridCoord; 8]> {
        SQUARE_SLOTS
            .iter()
            .map(|&d| coord + tables::step(&SQUARE_STEPS, d))
            .collect()
    }

    fn step(&self, from: GridCoord, direction: Direction, distance: u32) -> GridCoord {
        from + tables::step(&SQUARE_STEPS, direction) * saturating_i32(distance)
    }

    fn ring_lines(&self, center: GridCoord, range: NonZeroU32) -> SmallVec<[Line; 6]> {
        let r = saturating_i32(range.get());
        let len = 2 * range.get() as usize;
        Self::CORNERS
            .iter()
            .map(|&(sx, sy, walk)| Line::new(center.offset(sx * r, sy * r), walk, len))
            .collect()
    }

    fn distance(&self, a: GridCoord, b: GridCoord) -> u32 {
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        dx.max(dy)
    }

    fn cell_center(&self, coord: GridCoord, layout: &WorldLayout) -> [f32; 2] {
        layout.square_center(coord)
    }
}
