//! The core `Topology` trait.

use crate::layout::WorldLayout;
use crate::line::{self, Line};
use hexlat_core::{CellIndex, Direction, Dispatch, GridConfig, GridCoord};
use smallvec::SmallVec;
use std::fmt;
use std::num::NonZeroU32;

/// Adjacency rules for one grid shape.
///
/// A topology decides which coordinate offsets count as neighbours and how
/// rings of a given radius decompose into independent [`Line`]s. It never
/// owns cell data: every method receives the grid's [`GridConfig`] and
/// resolves coordinates through it, so the row-major index mapping has a
/// single source of truth.
///
/// # Slot order
///
/// [`neighbor_coords`](Self::neighbor_coords) returns exactly
/// [`NEIGHBOR_COUNT`](Self::NEIGHBOR_COUNT) coordinates in a fixed,
/// backend-defined order. That order is the slot layout of the grid's
/// neighbour table and callers may index into it positionally.
///
/// # Thread safety
///
/// `Send + Sync` is required because bulk precomputation and line tracing
/// share `&self` across dispatch workers.
pub trait Topology: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Neighbour slots per cell.
    const NEIGHBOR_COUNT: usize;

    /// Grouping hint handed to the dispatcher for per-cell bulk work.
    const BATCH_HINT: usize;

    /// Short human-readable name, used in log events.
    fn name(&self) -> &'static str;

    /// Immediate neighbour coordinates of `coord` in slot order.
    ///
    /// Coordinates may lie off-grid; callers resolve them to the sentinel.
    fn neighbor_coords(&self, coord: GridCoord) -> SmallVec<[GridCoord; 8]>;

    /// Translate `from` by `distance` steps in `direction`.
    ///
    /// `distance == 0` and `Direction::None` return `from` unchanged.
    fn step(&self, from: GridCoord, direction: Direction, distance: u32) -> GridCoord;

    /// The corner-anchored lines tracing the ring at exactly `range` from
    /// `center`, in output order.
    fn ring_lines(&self, center: GridCoord, range: NonZeroU32) -> SmallVec<[Line; 6]>;

    /// Graph distance between two cells on an unbounded lattice.
    fn distance(&self, a: GridCoord, b: GridCoord) -> u32;

    /// World-space center of `coord` under `layout`.
    fn cell_center(&self, coord: GridCoord, layout: &WorldLayout) -> [f32; 2];

    /// Number of raw slots a ring of `range` produces.
    fn ring_len(&self, range: NonZeroU32) -> usize {
        self.ring_lines(GridCoord::ZERO, range)
            .iter()
            .map(|l| l.len)
            .sum()
    }

    /// Lines of every ring `1..=range`, ring by ring.
    ///
    /// Ring `k`'s lines are contiguous and follow ring `k - 1`'s, so the
    /// traced output places each ring at a fixed offset.
    fn disk_lines(&self, center: GridCoord, range: NonZeroU32) -> Vec<Line> {
        (1..=range.get())
            .filter_map(NonZeroU32::new)
            .flat_map(|k| self.ring_lines(center, k))
            .collect()
    }

    /// Fill `table` with the immediate neighbour indices of every cell.
    ///
    /// `table` must hold `config.neighbor_table_len()` slots. One unit of
    /// work per cell; each unit writes only its own
    /// [`NEIGHBOR_COUNT`](Self::NEIGHBOR_COUNT) slots.
    fn compute_all_neighbors<D: Dispatch>(
        &self,
        config: &GridConfig,
        dispatch: &D,
        table: &mut [CellIndex],
    ) {
        debug_assert_eq!(table.len(), config.neighbor_table_len());
        dispatch.for_each_chunk(
            table,
            Self::NEIGHBOR_COUNT,
            Self::BATCH_HINT,
            |cell, slots| {
                let coord = config.coord_at(cell);
                for (slot, n) in slots.iter_mut().zip(self.neighbor_coords(coord)) {
                    *slot = config.resolve(n);
                }
            },
        );
    }

    /// Raw indices of the ring at exactly `range` from `center`.
    ///
    /// Off-grid cells are the sentinel. The result always has
    /// [`ring_len`](Self::ring_len) slots.
    fn neighbors_at_range<D: Dispatch>(
        &self,
        config: &GridConfig,
        dispatch: &D,
        center: GridCoord,
        range: NonZeroU32,
    ) -> Vec<CellIndex> {
        let lines = self.ring_lines(center, range);
        tracing::trace!(
            topology = self.name(),
            %center,
            range = range.get(),
            lines = lines.len(),
            "ring fan-out"
        );
        line::trace_lines(self, config, dispatch, &lines)
    }

    /// Raw indices of rings `1..=range` around `center`, ring by ring.
    ///
    /// Allocates `NEIGHBOR_COUNT * range * (range + 1) / 2` slots up front
    /// and does not bound `range`; the grid-level queries reject ranges past
    /// [`MAX_QUERY_SLOTS`](hexlat_core::index::MAX_QUERY_SLOTS).
    fn neighbors_within_range<D: Dispatch>(
        &self,
        config: &GridConfig,
        dispatch: &D,
        center: GridCoord,
        range: NonZeroU32,
    ) -> Vec<CellIndex> {
        let lines = self.disk_lines(center, range);
        tracing::trace!(
            topology = self.name(),
            %center,
            range = range.get(),
            lines = lines.len(),
            "disk fan-out"
        );
        line::trace_lines(self, config, dispatch, &lines)
    }
}

/// `value` as `i32`, clamped to `i32::MAX`.
#[inline]
pub(crate) fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
