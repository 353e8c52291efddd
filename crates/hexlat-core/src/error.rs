//! Error types for grid construction, conversion and queries.
//!
//! Every variant except [`GridError::Cancelled`] and
//! [`GridError::WorkerPanicked`] is an invalid-argument condition: it is
//! detected at the API boundary before any mutation or task dispatch, and is
//! never retried.
//!
//! Off-grid neighbours are *not* errors. They appear as the
//! [`NO_NEIGHBOR`](crate::NO_NEIGHBOR) sentinel in raw results and are
//! skipped by the filtered traversals.

use crate::coord::GridCoord;
use std::error::Error;
use std::fmt;

/// Errors from grid construction, coordinate conversion and neighbour queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid dimension is zero or negative.
    InvalidDimensions {
        /// Requested width.
        width: i32,
        /// Requested length.
        length: i32,
    },
    /// `width * length` does not fit the signed 32-bit index space.
    DimensionTooLarge {
        /// Requested width.
        width: i32,
        /// Requested length.
        length: i32,
        /// Largest permitted cell count.
        max: i64,
    },
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: GridCoord,
        /// Grid width.
        width: i32,
        /// Grid length.
        length: i32,
    },
    /// A coordinate with a negative component was passed to index conversion.
    NegativeCoord {
        /// The offending coordinate.
        coord: GridCoord,
    },
    /// A negative flat index was passed to coordinate conversion.
    NegativeIndex {
        /// The offending index.
        index: i32,
    },
    /// A ranged neighbour query was issued with `range < 1`.
    InvalidRange {
        /// The requested range.
        range: i32,
    },
    /// A ranged neighbour query would return more raw slots than
    /// [`MAX_QUERY_SLOTS`](crate::index::MAX_QUERY_SLOTS).
    RangeTooLarge {
        /// The requested range.
        range: i32,
        /// Raw slots the query would return.
        slots: u64,
        /// Largest permitted slot count.
        max: u64,
    },
    /// The query was cancelled before any work was dispatched.
    Cancelled,
    /// A background query panicked before producing its result.
    WorkerPanicked,
}

impl GridError {
    /// Returns `true` for the invalid-argument family of errors.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::Cancelled | Self::WorkerPanicked)
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, length } => {
                write!(
                    f,
                    "invalid grid dimensions {width}x{length}: both must be at least 1"
                )
            }
            Self::DimensionTooLarge { width, length, max } => {
                write!(f, "grid {width}x{length} exceeds the maximum of {max} cells")
            }
            Self::CoordOutOfBounds {
                coord,
                width,
                length,
            } => {
                write!(
                    f,
                    "coordinate {coord} out of bounds: x in [0, {width}), y in [0, {length})"
                )
            }
            Self::NegativeCoord { coord } => {
                write!(f, "coordinate {coord} has a negative component")
            }
            Self::NegativeIndex { index } => write!(f, "invalid index: {index}"),
            Self::InvalidRange { range } => {
                write!(f, "neighbour range must be at least 1, got {range}")
            }
            Self::RangeTooLarge { range, slots, max } => {
                write!(
                    f,
                    "neighbour range {range} needs {slots} slots, more than the maximum of {max}"
                )
            }
            Self::Cancelled => write!(f, "query cancelled before dispatch"),
            Self::WorkerPanicked => write!(f, "background query panicked"),
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_classification() {
        assert!(GridError::InvalidRange { range: 0 }.is_invalid_argument());
        assert!(GridError::NegativeIndex { index: -3 }.is_invalid_argument());
        assert!(GridError::RangeTooLarge {
            range: 1 << 20,
            slots: 1 << 42,
            max: 1 << 26
        }
        .is_invalid_argument());
        assert!(GridError::InvalidDimensions {
            width: 0,
            length: 2
        }
        .is_invalid_argument());
        assert!(!GridError::Cancelled.is_invalid_argument());
        assert!(!GridError::WorkerPanicked.is_invalid_argument());
    }

    #[test]
    fn display_mentions_the_offending_value() {
        let e = GridError::CoordOutOfBounds {
            coord: GridCoord::new(7, -1),
            width: 3,
            length: 4,
        };
        assert_eq!(
            e.to_string(),
            "coordinate (7, -1) out of bounds: x in [0, 3), y in [0, 4)"
        );
        assert_eq!(
            GridError::InvalidRange { range: 0 }.to_string(),
            "neighbour range must be at least 1, got 0"
        );
    }
}
