//! The owning grid: cell values plus a precomputed neighbour table.

use crate::storage::FlatBuffer;
use hexlat_core::index::{check_range, check_slots, disk_slots, ring_slots, slot_position};
use hexlat_core::{
    Cancellation, CellIndex, Dispatch, GridConfig, GridCoord, GridError, RayonDispatch,
};
use hexlat_space::{HexOffset, Square8, Topology};
use std::num::NonZeroU32;

/// A square grid dispatching on the global rayon pool.
pub type SquareGrid<T> = Grid<T, Square8>;

/// An offset-hex grid dispatching on the global rayon pool.
pub type HexGrid<T> = Grid<T, HexOffset>;

/// A 2D grid storing one `T` per cell.
///
/// Construction allocates two flat buffers, `size` values and
/// `size * Topo::NEIGHBOR_COUNT` neighbour slots, and fills the neighbour
/// table immediately. Both buffers are released when the grid is dropped
/// or [`dispose`](Self::dispose)d.
///
/// Range-1 queries read the neighbour table; larger ranges fan out over
/// the topology's ring lines on the grid's dispatcher `D`.
///
/// # Examples
///
/// ```
/// use hexlat_core::GridCoord;
/// use hexlat_grid::SquareGrid;
/// use hexlat_space::Square8;
///
/// let mut grid: SquareGrid<u8> = SquareGrid::new(3, 3, Square8).unwrap();
/// grid.set(GridCoord::new(1, 1), 5).unwrap();
/// assert_eq!(*grid.get(GridCoord::new(1, 1)).unwrap(), 5);
///
/// let n = grid.neighbors_of(GridCoord::new(1, 1)).unwrap();
/// assert_eq!(n, &[3, 6, 7, 8, 5, 2, 1, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct Grid<T, Topo: Topology, D: Dispatch = RayonDispatch> {
    config: GridConfig,
    topology: Topo,
    dispatch: D,
    values: FlatBuffer<T>,
    neighbors: FlatBuffer<CellIndex>,
}

impl<T: Default, Topo: Topology> Grid<T, Topo> {
    /// Create a `width x length` grid on rayon's global pool.
    ///
    /// Fails with [`GridError::InvalidDimensions`] for a non-positive
    /// dimension and [`GridError::DimensionTooLarge`] when the cell count
    /// does not fit an `i32` index.
    pub fn new(width: i32, length: i32, topology: Topo) -> Result<Self, GridError> {
        Self::with_dispatch(width, length, topology, RayonDispatch::new())
    }
}

impl<T: Default, Topo: Topology, D: Dispatch> Grid<T, Topo, D> {
    /// Create a grid that runs neighbour work on `dispatch`.
    pub fn with_dispatch(
        width: i32,
        length: i32,
        topology: Topo,
        dispatch: D,
    ) -> Result<Self, GridError> {
        let config = GridConfig::new(width, length, Topo::NEIGHBOR_COUNT)?;
        let mut grid = Self {
            values: FlatBuffer::new(config.size()),
            neighbors: FlatBuffer::new(config.neighbor_table_len()),
            config,
            topology,
            dispatch,
        };
        tracing::debug!(
            topology = grid.topology.name(),
            width,
            length,
            cells = grid.config.size(),
            "grid constructed"
        );
        grid.recompute_neighbors();
        Ok(grid)
    }
}

impl<T, Topo: Topology, D: Dispatch> Grid<T, Topo, D> {
    // ── Accessors ───────────────────────────────────────────────

    /// The grid's dimensions.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The grid's topology.
    pub fn topology(&self) -> &Topo {
        &self.topology
    }

    /// The dispatcher used for neighbour work.
    pub fn dispatch(&self) -> &D {
        &self.dispatch
    }

    /// Cells per row.
    pub fn width(&self) -> i32 {
        self.config.width()
    }

    /// Number of rows.
    pub fn length(&self) -> i32 {
        self.config.length()
    }

    /// Total number of cells.
    pub fn size(&self) -> usize {
        self.config.size()
    }

    /// Flat index of `coord` under this grid's width.
    pub fn index_of(&self, coord: GridCoord) -> Result<CellIndex, GridError> {
        self.config.index_of(coord)
    }

    /// Coordinate of the flat `index` under this grid's width.
    pub fn coord_of(&self, index: CellIndex) -> Result<GridCoord, GridError> {
        self.config.coord_of(index)
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.config.contains(coord)
    }

    /// Whether `index` addresses a cell of this grid.
    pub fn is_valid_index(&self, index: CellIndex) -> bool {
        self.config.is_valid_index(index)
    }

    // ── Values ──────────────────────────────────────────────────

    /// The value at `coord`.
    pub fn get(&self, coord: GridCoord) -> Result<&T, GridError> {
        let i = self.config.check_bounds(coord)?;
        Ok(&self.values[i])
    }

    /// Mutable access to the value at `coord`.
    pub fn get_mut(&mut self, coord: GridCoord) -> Result<&mut T, GridError> {
        let i = self.config.check_bounds(coord)?;
        Ok(&mut self.values[i])
    }

    /// Overwrite the value at `coord`, returning the previous one.
    pub fn set(&mut self, coord: GridCoord, value: T) -> Result<T, GridError> {
        let slot = self.get_mut(coord)?;
        Ok(std::mem::replace(slot, value))
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[T] {
        self.values.as_slice()
    }

    /// Row-major `(coord, value)` pairs. Each call starts a fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &T)> + '_ {
        self.config.coords().zip(self.values.iter())
    }

    /// Visit every cell in row-major order.
    pub fn for_each<F: FnMut(GridCoord, &T)>(&self, mut visit: F) {
        for (coord, value) in self.iter() {
            visit(coord, value);
        }
    }

    // ── Immediate neighbours ────────────────────────────────────

    /// The precomputed neighbour slots of `coord`, in topology slot order.
    ///
    /// Off-grid slots hold [`NO_NEIGHBOR`](hexlat_core::NO_NEIGHBOR).
    pub fn neighbors_of(&self, coord: GridCoord) -> Result<&[CellIndex], GridError> {
        let i = self.config.check_bounds(coord)?;
        let k = Topo::NEIGHBOR_COUNT;
        Ok(&self.neighbors.as_slice()[i * k..(i + 1) * k])
    }

    /// Visit each in-grid immediate neighbour of `coord`.
    pub fn for_each_neighbor<F: FnMut(GridCoord, &T)>(
        &self,
        coord: GridCoord,
        visit: F,
    ) -> Result<(), GridError> {
        let slots = self.neighbors_of(coord)?;
        self.visit_slots(slots, visit);
        Ok(())
    }

    /// The full neighbour table, `NEIGHBOR_COUNT` slots per cell.
    pub fn neighbor_table(&self) -> &[CellIndex] {
        self.neighbors.as_slice()
    }

    /// Rebuild the neighbour table from the topology.
    ///
    /// Runs at construction. The result depends only on the dimensions and
    /// topology, so calling it again leaves the table unchanged.
    pub fn recompute_neighbors(&mut self) {
        self.topology
            .compute_all_neighbors(&self.config, &self.dispatch, self.neighbors.as_mut_slice());
        tracing::debug!(
            topology = self.topology.name(),
            units = self.config.size(),
            slots = self.neighbors.len(),
            "neighbour table rebuilt"
        );
    }

    // ── Ranged queries ──────────────────────────────────────────

    /// Validate a ring query before anything is allocated or dispatched.
    pub(crate) fn check_ring(
        &self,
        coord: GridCoord,
        range: i32,
    ) -> Result<NonZeroU32, GridError> {
        self.config.check_bounds(coord)?;
        let range = check_range(range)?;
        check_slots(range, ring_slots(Topo::NEIGHBOR_COUNT, range))
    }

    /// Validate a disk query before anything is allocated or dispatched.
    pub(crate) fn check_disk(
        &self,
        coord: GridCoord,
        range: i32,
    ) -> Result<NonZeroU32, GridError> {
        self.config.check_bounds(coord)?;
        let range = check_range(range)?;
        check_slots(range, disk_slots(Topo::NEIGHBOR_COUNT, range))
    }

    /// Raw slots of the ring at exactly `range` from `coord`.
    ///
    /// The result has `NEIGHBOR_COUNT * range` slots in ring order, with
    /// off-grid cells as the sentinel. `range == 1` returns the
    /// precomputed neighbours in slot order. Ranges whose result would exceed
    /// [`MAX_QUERY_SLOTS`](hexlat_core::index::MAX_QUERY_SLOTS) fail with
    /// [`GridError::RangeTooLarge`].
    pub fn neighbors_at_range(
        &self,
        coord: GridCoord,
        range: i32,
    ) -> Result<Vec<CellIndex>, GridError> {
        let range = self.check_ring(coord, range)?;
        Ok(self.ring(coord, range))
    }

    /// Raw slots of every ring `1..=range` around `coord`, ring by ring.
    ///
    /// Ring `k` starts at slot `NEIGHBOR_COUNT * k * (k - 1) / 2`.
    /// `range == 1` returns the precomputed neighbours in slot order.
    ///
    /// The result grows quadratically, `NEIGHBOR_COUNT * range * (range + 1)
    /// / 2` slots; beyond
    /// [`MAX_QUERY_SLOTS`](hexlat_core::index::MAX_QUERY_SLOTS) the query
    /// fails with [`GridError::RangeTooLarge`].
    pub fn neighbors_within_range(
        &self,
        coord: GridCoord,
        range: i32,
    ) -> Result<Vec<CellIndex>, GridError> {
        let range = self.check_disk(coord, range)?;
        Ok(self.disk(coord, range))
    }

    /// [`neighbors_at_range`](Self::neighbors_at_range) that fails with
    /// [`GridError::Cancelled`] instead of dispatching once `token` is set.
    pub fn neighbors_at_range_cancellable(
        &self,
        coord: GridCoord,
        range: i32,
        token: &Cancellation,
    ) -> Result<Vec<CellIndex>, GridError> {
        let range = self.check_ring(coord, range)?;
        token.check()?;
        Ok(self.ring(coord, range))
    }

    /// [`neighbors_within_range`](Self::neighbors_within_range) that fails
    /// with [`GridError::Cancelled`] instead of dispatching once `token` is
    /// set.
    pub fn neighbors_within_range_cancellable(
        &self,
        coord: GridCoord,
        range: i32,
        token: &Cancellation,
    ) -> Result<Vec<CellIndex>, GridError> {
        let range = self.check_disk(coord, range)?;
        token.check()?;
        Ok(self.disk(coord, range))
    }

    /// Visit each in-grid cell on the ring at exactly `range` from `coord`.
    pub fn for_each_neighbor_at_range<F: FnMut(GridCoord, &T)>(
        &self,
        coord: GridCoord,
        range: i32,
        visit: F,
    ) -> Result<(), GridError> {
        let slots = self.neighbors_at_range(coord, range)?;
        self.visit_slots(&slots, visit);
        Ok(())
    }

    /// Visit each in-grid cell within `range` of `coord`, ring by ring.
    pub fn for_each_neighbor_within_range<F: FnMut(GridCoord, &T)>(
        &self,
        coord: GridCoord,
        range: i32,
        visit: F,
    ) -> Result<(), GridError> {
        let slots = self.neighbors_within_range(coord, range)?;
        self.visit_slots(&slots, visit);
        Ok(())
    }

    /// Consume the grid and release its buffers.
    pub fn dispose(self) {
        tracing::debug!(
            topology = self.topology.name(),
            bytes = self.values.memory_bytes() + self.neighbors.memory_bytes(),
            "grid disposed"
        );
    }

    // ── Internals ───────────────────────────────────────────────

    /// Ring query on a validated center and range.
    pub(crate) fn ring(&self, coord: GridCoord, range: NonZeroU32) -> Vec<CellIndex> {
        if range.get() == 1 {
            return self.table_slots(coord);
        }
        self.topology
            .neighbors_at_range(&self.config, &self.dispatch, coord, range)
    }

    /// Disk query on a validated center and range.
    pub(crate) fn disk(&self, coord: GridCoord, range: NonZeroU32) -> Vec<CellIndex> {
        if range.get() == 1 {
            return self.table_slots(coord);
        }
        self.topology
            .neighbors_within_range(&self.config, &self.dispatch, coord, range)
    }

    fn table_slots(&self, coord: GridCoord) -> Vec<CellIndex> {
        self.neighbors_of(coord)
            .map(<[CellIndex]>::to_vec)
            .unwrap_or_default()
    }

    fn visit_slots<F: FnMut(GridCoord, &T)>(&self, slots: &[CellIndex], mut visit: F) {
        for &slot in slots {
            let Some(pos) = slot_position(slot, self.values.len()) else {
                continue;
            };
            visit(self.config.coord_at(pos), &self.values[pos]);
        }
    }
}
