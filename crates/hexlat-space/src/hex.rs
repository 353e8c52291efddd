//! 2D hexagonal grid in offset (zig-zag) row coordinates.
//!
//! Every other row is shifted right by half a cell. Which parity is shifted
//! is a per-grid choice ([`HexOffset::odd_rows_offset`]). A cell's
//! neighbours therefore depend on its row: diagonal steps read the
//! [`HEX_OFFSET_STEPS`] table from a shifted row and [`HEX_NORMAL_STEPS`]
//! otherwise. Each diagonal step changes the row by one, so parity flips
//! after every diagonal step; `Left`, `Right`, `Up` and `Down` keep it.

use crate::layout::WorldLayout;
use crate::line::Line;
use crate::tables::{self, HEX_NORMAL_STEPS, HEX_OFFSET_STEPS, HEX_SLOTS};
use crate::topology::{saturating_i32, Topology};
use hexlat_core::{Direction, GridCoord};
use smallvec::SmallVec;
use std::num::NonZeroU32;

/// Ring corners, as directions stepped from the center, in output order.
const CORNERS: [Direction; 6] = [
    Direction::UpLeft,
    Direction::UpRight,
    Direction::Right,
    Direction::DownRight,
    Direction::DownLeft,
    Direction::Left,
];

/// Walk direction of the line starting at the matching corner: two
/// positions clockwise.
const WALKS: [Direction; 6] = [
    Direction::Right,
    Direction::DownRight,
    Direction::DownLeft,
    Direction::Left,
    Direction::UpLeft,
    Direction::UpRight,
];

/// Returns `true` if `row` is shifted under the given parity choice.
///
/// Parity is taken with `rem_euclid`, so rows below zero continue the same
/// alternation (`-1` is odd).
///
/// ```
/// use hexlat_space::hex::is_offset;
///
/// assert!(is_offset(true, 1));
/// assert!(!is_offset(true, 2));
/// assert!(!is_offset(false, 1));
/// assert!(is_offset(false, 2));
/// assert!(is_offset(true, -1));
/// ```
#[inline]
pub const fn is_offset(odd_rows_offset: bool, row: i32) -> bool {
    let odd = row.rem_euclid(2) == 1;
    odd == odd_rows_offset
}

/// One step in `direction` from a cell whose row shift is `offset_row`.
#[inline]
pub fn step_once(from: GridCoord, direction: Direction, offset_row: bool) -> GridCoord {
    let table = if offset_row {
        &HEX_OFFSET_STEPS
    } else {
        &HEX_NORMAL_STEPS
    };
    from + tables::step(table, direction)
}

/// `distance` steps in `direction` from a cell whose row shift is
/// `offset_row`, in closed form.
///
/// Orthogonal moves never change parity and scale linearly. A diagonal
/// walk alternates tables, starting with the one for `offset_row`, so it
/// takes `ceil(d / 2)` offset steps when starting on a shifted row and
/// `floor(d / 2)` otherwise.
///
/// ```
/// use hexlat_core::{Direction, GridCoord};
/// use hexlat_space::hex::step_in_direction;
///
/// let c = GridCoord::new(1, 1);
/// assert_eq!(step_in_direction(c, Direction::UpLeft, 2, true), GridCoord::new(0, 3));
/// assert_eq!(step_in_direction(c, Direction::Right, 3, true), GridCoord::new(4, 1));
/// assert_eq!(step_in_direction(c, Direction::None, 9, false), c);
/// ```
pub fn step_in_direction(
    from: GridCoord,
    direction: Direction,
    distance: u32,
    offset_row: bool,
) -> GridCoord {
    match distance {
        0 => from,
        1 => step_once(from, direction, offset_row),
        d if !direction.is_diagonal() => {
            from + tables::step(&HEX_NORMAL_STEPS, direction) * saturating_i32(d)
        }
        d => {
            let offset_count = if offset_row { d.div_ceil(2) } else { d / 2 };
            let normal_count = d - offset_count;
            from + tables::step(&HEX_NORMAL_STEPS, direction) * saturating_i32(normal_count)
                + tables::step(&HEX_OFFSET_STEPS, direction) * saturating_i32(offset_count)
        }
    }
}

/// Offset-row hex topology with six neighbours per interior cell.
///
/// Neighbour slots are `Left, UpLeft, UpRight, Right, DownRight, DownLeft`.
/// `Up` and `Down` move two rows and are not neighbours; they exist for
/// stepping only.
///
/// Distance is measured in doubled columns: a cell's doubled column is
/// `2x + 1` on a shifted row and `2x` otherwise, and
/// `distance = dy + max(0, (|d_col2| - dy) / 2)`.
///
/// # Examples
///
/// ```
/// use hexlat_core::GridCoord;
/// use hexlat_space::{HexOffset, Topology};
///
/// let hex = HexOffset::new(true);
/// let n = hex.neighbor_coords(GridCoord::new(1, 1));
/// assert_eq!(n.len(), 6);
/// assert_eq!(n[1], GridCoord::new(1, 2)); // UpLeft from a shifted row
///
/// assert_eq!(hex.distance(GridCoord::new(1, 1), GridCoord::new(0, 3)), 2);
/// assert_ne!(hex, HexOffset::new(false));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexOffset {
    odd_rows_offset: bool,
}

impl HexOffset {
    /// Create a hex topology. With `odd_rows_offset`, odd rows are the
    /// shifted ones; otherwise even rows are.
    pub const fn new(odd_rows_offset: bool) -> Self {
        Self { odd_rows_offset }
    }

    /// Whether odd rows are shifted.
    pub const fn odd_rows_offset(&self) -> bool {
        self.odd_rows_offset
    }

    /// Whether `row` is shifted in this grid.
    #[inline]
    pub const fn is_offset_row(&self, row: i32) -> bool {
        is_offset(self.odd_rows_offset, row)
    }

    fn doubled_column(&self, coord: GridCoord) -> i64 {
        2 * i64::from(coord.x) + i64::from(self.is_offset_row(coord.y))
    }
}

impl Topology for HexOffset {
    const NEIGHBOR_COUNT: usize = 6;
    const BATCH_HINT: usize = 6;

    fn name(&self) -> &'static str {
        "hex-offset"
    }

    fn neighbor_coords(&self, coord: GridCoord) -> SmallVec<[GridCoord; 8]> {
        let offset_row = self.is_offset_row(coord.y);
        HEX_SLOTS
            .iter()
            .map(|&d| step_once(coord, d, offset_row))
            .collect()
    }

    fn step(&self, from: GridCoord, direction: Direction, distance: u32) -> GridCoord {
        step_in_direction(from, direction, distance, self.is_offset_row(from.y))
    }

    fn ring_lines(&self, center: GridCoord, range: NonZeroU32) -> SmallVec<[Line; 6]> {
        let r = range.get();
        let offset_row = self.is_offset_row(center.y);
        CORNERS
            .iter()
            .zip(WALKS)
            .map(|(&corner, walk)| {
                let origin = step_in_direction(center, corner, r, offset_row);
                Line::new(origin, walk, r as usize)
            })
            .collect()
    }

    fn distance(&self, a: GridCoord, b: GridCoord) -> u32 {
        let dy = (i64::from(a.y) - i64::from(b.y)).abs();
        let dcol = (self.doubled_column(a) - self.doubled_column(b)).abs();
        let d = dy + ((dcol - dy) / 2).max(0);
        u32::try_from(d).unwrap_or(u32::MAX)
    }

    fn cell_center(&self, coord: GridCoord, layout: &WorldLayout) -> [f32; 2] {
        layout.hex_center(coord, self.is_offset_row(coord.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use hexlat_core::{GridConfig, RayonDispatch, Sequential, NO_NEIGHBOR};
    use proptest::prelude::*;

    const X: i32 = NO_NEIGHBOR;

    fn c(x: i32, y: i32) -> GridCoord {
        GridCoord::new(x, y)
    }

    fn r(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn table(hex: HexOffset, width: i32, length: i32) -> Vec<i32> {
        let config = GridConfig::new(width, length, HexOffset::NEIGHBOR_COUNT).unwrap();
        let mut t = vec![0; config.neighbor_table_len()];
        hex.compute_all_neighbors(&config, &Sequential, &mut t);
        t
    }

    // ── Parity ──────────────────────────────────────────────────

    #[test]
    fn parity_all_four_combinations() {
        assert!(is_offset(true, 1));
        assert!(!is_offset(true, 2));
        assert!(!is_offset(false, 1));
        assert!(is_offset(false, 2));
    }

    #[test]
    fn parity_continues_below_zero() {
        assert!(is_offset(true, -1));
        assert!(!is_offset(true, -2));
        assert!(is_offset(false, -2));
        assert!(!is_offset(false, -3));
    }

    // ── Stepping ────────────────────────────────────────────────

    #[test]
    fn single_steps_use_row_table() {
        let o = c(2, 2);
        assert_eq!(step_once(o, Direction::UpLeft, false), c(1, 3));
        assert_eq!(step_once(o, Direction::UpLeft, true), c(2, 3));
        assert_eq!(step_once(o, Direction::DownRight, false), c(2, 1));
        assert_eq!(step_once(o, Direction::DownRight, true), c(3, 1));
        assert_eq!(step_once(o, Direction::Up, true), c(2, 4));
    }

    #[test]
    fn diagonal_walk_alternates_tables() {
        // From a normal row: normal, offset, normal.
        assert_eq!(
            step_in_direction(c(5, 4), Direction::UpRight, 3, false),
            c(6, 7)
        );
        // From a shifted row: offset, normal, offset.
        assert_eq!(
            step_in_direction(c(5, 5), Direction::UpRight, 3, true),
            c(7, 8)
        );
    }

    #[test]
    fn zero_distance_and_none_are_identity() {
        for d in Direction::ALL {
            assert_eq!(step_in_direction(c(3, 3), d, 0, true), c(3, 3));
        }
        assert_eq!(step_in_direction(c(3, 3), Direction::None, 7, true), c(3, 3));
    }

    // ── Immediate neighbours ────────────────────────────────────

    #[test]
    fn shifted_row_neighbours() {
        let t = table(HexOffset::new(true), 4, 4);
        // (1,1) is on an odd row: shifted.
        assert_eq!(&t[5 * 6..6 * 6], &[4, 9, 10, 6, 2, 1]);
    }

    #[test]
    fn normal_row_neighbours() {
        let t = table(HexOffset::new(true), 4, 4);
        // (1,2) is on an even row: not shifted.
        assert_eq!(&t[9 * 6..10 * 6], &[8, 12, 13, 10, 5, 4]);
    }

    #[test]
    fn parity_choice_swaps_tables() {
        let odd = table(HexOffset::new(true), 4, 4);
        let even = table(HexOffset::new(false), 4, 4);
        assert_ne!(odd, even);
        // (1,1) with even rows shifted uses the normal table.
        assert_eq!(&even[5 * 6..6 * 6], &[4, 8, 9, 6, 1, 0]);
    }

    #[test]
    fn corner_cell_is_clipped() {
        let t = table(HexOffset::new(true), 4, 4);
        // (0,0), even row, normal table: only Right and UpRight survive.
        assert_eq!(&t[0..6], &[X, X, 4, 1, X, X]);
    }

    #[test]
    fn parallel_precompute_matches_sequential() {
        let config = GridConfig::new(29, 31, 6).unwrap();
        let hex = HexOffset::new(false);
        let mut seq = vec![0; config.neighbor_table_len()];
        let mut par = vec![0; config.neighbor_table_len()];
        hex.compute_all_neighbors(&config, &Sequential, &mut seq);
        hex.compute_all_neighbors(&config, &RayonDispatch::new(), &mut par);
        assert_eq!(seq, par);
    }

    // ── Rings ───────────────────────────────────────────────────

    #[test]
    fn ring_two_on_4x4_odd() {
        let config = GridConfig::new(4, 4, 6).unwrap();
        let ring =
            HexOffset::new(true).neighbors_at_range(&config, &Sequential, c(1, 1), r(2));
        assert_eq!(ring, vec![12, 13, 14, 11, 7, 3, X, X, X, 0, X, 8]);
    }

    #[test]
    fn ring_two_corners() {
        let lines = HexOffset::new(true).ring_lines(c(1, 1), r(2));
        let origins: Vec<GridCoord> = lines.iter().map(|l| l.origin).collect();
        assert_eq!(
            origins,
            vec![c(0, 3), c(2, 3), c(3, 1), c(2, -1), c(0, -1), c(-1, 1)]
        );
        assert!(lines.iter().all(|l| l.len == 2));
    }

    #[test]
    fn ring_one_is_the_neighbour_set() {
        let config = GridConfig::new(4, 4, 6).unwrap();
        let hex = HexOffset::new(true);
        let mut ring = hex.neighbors_at_range(&config, &Sequential, c(1, 1), r(1));
        ring.sort_unstable();
        let mut expected = vec![4, 9, 10, 6, 2, 1];
        expected.sort_unstable();
        assert_eq!(ring, expected);
    }

    #[test]
    fn disk_places_rings_at_fixed_offsets() {
        let config = GridConfig::new(11, 11, 6).unwrap();
        let hex = HexOffset::new(false);
        let center = c(5, 4);
        let disk = hex.neighbors_within_range(&config, &RayonDispatch::new(), center, r(4));
        assert_eq!(disk.len(), 3 * 4 * 5);
        for k in 1..=4u32 {
            let start = (3 * k * (k - 1)) as usize;
            let end = start + 6 * k as usize;
            let ring = hex.neighbors_at_range(&config, &Sequential, center, r(k));
            assert_eq!(&disk[start..end], ring.as_slice(), "ring {k}");
        }
    }

    // ── Distance / layout ───────────────────────────────────────

    #[test]
    fn distance_examples() {
        let hex = HexOffset::new(true);
        assert_eq!(hex.distance(c(1, 1), c(1, 1)), 0);
        assert_eq!(hex.distance(c(1, 1), c(2, 1)), 1);
        assert_eq!(hex.distance(c(1, 1), c(1, 2)), 1);
        assert_eq!(hex.distance(c(1, 1), c(3, 2)), 2);
        // Up moves two rows: two hex steps.
        assert_eq!(hex.distance(c(1, 1), c(1, 3)), 2);
        assert_eq!(hex.distance(c(0, 0), c(4, 0)), 4);
    }

    #[test]
    fn cell_center_shifts_offset_rows() {
        let hex = HexOffset::new(true);
        let layout = WorldLayout::default();
        let even = hex.cell_center(c(0, 0), &layout);
        let odd = hex.cell_center(c(0, 1), &layout);
        assert!(odd[0] > even[0]);
        assert!(odd[1] > even[1]);
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_odd_5x6() {
        compliance::run_full_compliance(&HexOffset::new(true), 5, 6, 4);
    }

    #[test]
    fn compliance_even_6x5() {
        compliance::run_full_compliance(&HexOffset::new(false), 6, 5, 4);
    }

    #[test]
    fn compliance_single_row() {
        compliance::run_full_compliance(&HexOffset::new(true), 7, 1, 3);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_direction() -> impl Strategy<Value = Direction> {
        (0usize..Direction::COUNT).prop_map(|i| Direction::ALL[i])
    }

    proptest! {
        #[test]
        fn closed_form_matches_iterated_steps(
            x in -50i32..50,
            y in -50i32..50,
            dir in arb_direction(),
            distance in 0u32..40,
            odd in any::<bool>(),
        ) {
            let start = c(x, y);
            let mut walked = start;
            for _ in 0..distance {
                walked = step_once(walked, dir, is_offset(odd, walked.y));
            }
            let closed = step_in_direction(start, dir, distance, is_offset(odd, y));
            prop_assert_eq!(closed, walked);
        }

        #[test]
        fn ring_cells_are_at_exact_distance(
            odd in any::<bool>(),
            x in -3i32..9, y in -3i32..9,
            range in 1u32..8,
        ) {
            let hex = HexOffset::new(odd);
            let config = GridConfig::new(6, 6, 6).unwrap();
            let center = c(x, y);
            for line in hex.ring_lines(center, r(range)) {
                for cell in line.coords(&hex) {
                    prop_assert_eq!(hex.distance(center, cell), range);
                }
            }
            let ring = hex.neighbors_at_range(&config, &Sequential, center, r(range));
            prop_assert_eq!(ring.len(), 6 * range as usize);
        }
    }
}
