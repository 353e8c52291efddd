//! Row-major coordinate ⇄ flat-index conversion.
//!
//! `index = x + width * y`, `y = index / width`, `x = index - y * width`.
//! These functions are the single source of truth for the mapping; every
//! topology resolves neighbour coordinates through [`resolve`].

use crate::coord::GridCoord;
use crate::error::GridError;
use std::num::NonZeroU32;

/// A flat cell index, or [`NO_NEIGHBOR`] in raw neighbour results.
pub type CellIndex = i32;

/// Sentinel slot value meaning "no such neighbour" (off-grid).
pub const NO_NEIGHBOR: CellIndex = -1;

/// Most raw slots a single ranged query may return (256 MiB of indices).
pub const MAX_QUERY_SLOTS: u64 = 1 << 26;

fn check_width(width: i32) -> Result<(), GridError> {
    if width < 1 {
        // Conversion never reads the length, so report the smallest valid one.
        return Err(GridError::InvalidDimensions { width, length: 1 });
    }
    Ok(())
}

/// Flat index of `coord` in a grid of the given `width`.
///
/// Fails with [`GridError::NegativeCoord`] if either component is negative.
/// The coordinate is not checked against a length; use [`in_bounds`] for that.
///
/// ```
/// use hexlat_core::{index, GridCoord};
///
/// assert_eq!(index::index_of(GridCoord::new(2, 1), 4), Ok(6));
/// assert!(index::index_of(GridCoord::new(-1, 0), 4).is_err());
/// ```
pub fn index_of(coord: GridCoord, width: i32) -> Result<CellIndex, GridError> {
    check_width(width)?;
    if coord.is_negative() {
        return Err(GridError::NegativeCoord { coord });
    }
    let index = i64::from(coord.x) + i64::from(width) * i64::from(coord.y);
    CellIndex::try_from(index).map_err(|_| GridError::DimensionTooLarge {
        width,
        length: coord.y.saturating_add(1),
        max: i64::from(CellIndex::MAX),
    })
}

/// Coordinate of the flat `index` in a grid of the given `width`.
///
/// Fails with [`GridError::NegativeIndex`] if `index < 0`.
pub fn coord_of(index: CellIndex, width: i32) -> Result<GridCoord, GridError> {
    check_width(width)?;
    if index < 0 {
        return Err(GridError::NegativeIndex { index });
    }
    Ok(split(i64::from(index), width))
}

/// Coordinate of a storage position already known to lie inside a grid of
/// the given `width`.
///
/// The infallible counterpart of [`coord_of`] for callers holding a
/// validated width (such as a [`GridConfig`](crate::GridConfig)).
#[inline]
pub fn coord_at(position: usize, width: i32) -> GridCoord {
    let position = i64::try_from(position).unwrap_or(i64::MAX);
    split(position, width.max(1))
}

#[inline]
fn split(index: i64, width: i32) -> GridCoord {
    let width = i64::from(width);
    let y = index / width;
    let x = index - y * width;
    GridCoord::new(x as i32, i32::try_from(y).unwrap_or(i32::MAX))
}

/// `true` iff `0 <= x < width` and `0 <= y < length`. Never fails.
pub fn in_bounds(coord: GridCoord, width: i32, length: i32) -> bool {
    coord.x >= 0 && coord.y >= 0 && coord.x < width && coord.y < length
}

/// Flat index of `coord` if it is inside the grid, else [`NO_NEIGHBOR`].
///
/// This is the fold every neighbour computation uses to fill a slot.
#[inline]
pub fn resolve(coord: GridCoord, width: i32, length: i32) -> CellIndex {
    if in_bounds(coord, width, length) {
        coord.x + width * coord.y
    } else {
        NO_NEIGHBOR
    }
}

/// Storage position of a raw neighbour slot, or `None` for the sentinel
/// and for any index outside `[0, size)`.
#[inline]
pub fn slot_position(slot: CellIndex, size: usize) -> Option<usize> {
    usize::try_from(slot).ok().filter(|&i| i < size)
}

/// Validate a ranged-query radius.
///
/// Fails with [`GridError::InvalidRange`] for `range < 1`.
pub fn check_range(range: i32) -> Result<NonZeroU32, GridError> {
    u32::try_from(range)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(GridError::InvalidRange { range })
}

/// Raw slot count of the ring at exactly `range`: `neighbor_count * range`.
pub fn ring_slots(neighbor_count: usize, range: NonZeroU32) -> u64 {
    (neighbor_count as u64).saturating_mul(u64::from(range.get()))
}

/// Raw slot count of rings `1..=range`:
/// `neighbor_count * range * (range + 1) / 2`.
pub fn disk_slots(neighbor_count: usize, range: NonZeroU32) -> u64 {
    let r = u64::from(range.get());
    (r * (r + 1) / 2).saturating_mul(neighbor_count as u64)
}

/// Reject a query whose raw result would exceed [`MAX_QUERY_SLOTS`].
pub fn check_slots(range: NonZeroU32, slots: u64) -> Result<NonZeroU32, GridError> {
    if slots > MAX_QUERY_SLOTS {
        return Err(GridError::RangeTooLarge {
            range: i32::try_from(range.get()).unwrap_or(i32::MAX),
            slots,
            max: MAX_QUERY_SLOTS,
        });
    }
    Ok(range)
}
