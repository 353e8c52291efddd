//! Grid dimension configuration.

use crate::coord::GridCoord;
use crate::error::GridError;
use crate::index::{self, CellIndex};

/// Immutable grid dimensions and neighbourhood size.
///
/// Validated at construction: both dimensions must be at least 1 and the
/// cell count must fit a [`CellIndex`]. All values are fixed afterwards.
///
/// ```
/// use hexlat_core::GridConfig;
///
/// let config = GridConfig::new(4, 3, 6).unwrap();
/// assert_eq!(config.size(), 12);
/// assert_eq!(config.neighbor_table_len(), 72);
/// assert!(GridConfig::new(0, 3, 6).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridConfig {
    width: i32,
    length: i32,
    neighbor_count: usize,
}

impl GridConfig {
    /// Largest permitted cell count.
    pub const MAX_CELLS: i64 = CellIndex::MAX as i64;

    /// Create a configuration for a `width * length` grid whose cells each
    /// own `neighbor_count` neighbour slots.
    ///
    /// Returns `Err(GridError::InvalidDimensions)` if either dimension is
    /// below 1, or `Err(GridError::DimensionTooLarge)` if the cell count
    /// exceeds [`MAX_CELLS`](Self::MAX_CELLS).
    pub fn new(width: i32, length: i32, neighbor_count: usize) -> Result<Self, GridError> {
        if width < 1 || length < 1 {
            return Err(GridError::InvalidDimensions { width, length });
        }
        let cells = i64::from(width) * i64::from(length);
        if cells > Self::MAX_CELLS {
            return Err(GridError::DimensionTooLarge {
                width,
                length,
                max: Self::MAX_CELLS,
            });
        }
        Ok(Self {
            width,
            length,
            neighbor_count,
        })
    }

    /// Number of cells along a row.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Neighbour slots per cell.
    pub fn neighbor_count(&self) -> usize {
        self.neighbor_count
    }

    /// Total number of cells.
    pub fn size(&self) -> usize {
        self.width as usize * self.length as usize
    }

    /// Length of the flattened neighbour table.
    pub fn neighbor_table_len(&self) -> usize {
        self.size() * self.neighbor_count
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: GridCoord) -> bool {
        index::in_bounds(coord, self.width, self.length)
    }

    /// Whether `index` addresses a cell of this grid.
    pub fn is_valid_index(&self, index: CellIndex) -> bool {
        index::slot_position(index, self.size()).is_some()
    }

    /// Flat index of `coord`. See [`index::index_of`].
    pub fn index_of(&self, coord: GridCoord) -> Result<CellIndex, GridError> {
        index::index_of(coord, self.width)
    }

    /// Coordinate of `index`. See [`index::coord_of`].
    pub fn coord_of(&self, index: CellIndex) -> Result<GridCoord, GridError> {
        index::coord_of(index, self.width)
    }

    /// Coordinate of the storage position `position` (`< size`).
    #[inline]
    pub fn coord_at(&self, position: usize) -> GridCoord {
        index::coord_at(position, self.width)
    }

    /// Flat index of `coord` if inside the grid, else the sentinel.
    #[inline]
    pub fn resolve(&self, coord: GridCoord) -> CellIndex {
        index::resolve(coord, self.width, self.length)
    }

    /// Check that `coord` is inside the grid and return its storage position.
    pub fn check_bounds(&self, coord: GridCoord) -> Result<usize, GridError> {
        if !self.contains(coord) {
            return Err(GridError::CoordOutOfBounds {
                coord,
                width: self.width,
                length: self.length,
            });
        }
        Ok(self.resolve(coord) as usize)
    }

    /// Row-major cell coordinates, index 0 first.
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> + '_ {
        let width = self.width;
        (0..self.length).flat_map(move |y| (0..width).map(move |x| GridCoord::new(x, y)))
    }
}
