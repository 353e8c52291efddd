//! hexlat: square and hexagonal 2D grids with fast neighbour queries.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all hexlat sub-crates. For most users, adding `hexlat` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use hexlat::prelude::*;
//!
//! // A 16×16 hex grid whose odd rows are shifted half a cell right.
//! let mut grid: HexGrid<f32> = HexGrid::new(16, 16, HexOffset::new(true)).unwrap();
//! grid.set(GridCoord::new(8, 8), 1.0).unwrap();
//!
//! // Immediate neighbours come from the precomputed table.
//! let near = grid.neighbors_of(GridCoord::new(8, 8)).unwrap();
//! assert_eq!(near.len(), 6);
//!
//! // Rings and disks are traced in parallel; off-grid slots are -1.
//! let ring = grid.neighbors_at_range(GridCoord::new(8, 8), 3).unwrap();
//! assert_eq!(ring.len(), 18);
//!
//! // Filtered traversals skip off-grid cells.
//! let mut heat = 0.0;
//! grid.for_each_neighbor_within_range(GridCoord::new(7, 8), 2, |_, &v| heat += v)
//!     .unwrap();
//! assert_eq!(heat, 1.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hexlat-core` | Coordinates, directions, config, errors, dispatch |
//! | [`space`] | `hexlat-space` | Topologies, direction tables, line tracing, layout |
//! | [`grid`] | `hexlat-grid` | The owning grid, storage, background queries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`hexlat-core`).
///
/// Coordinates, directions, [`types::GridConfig`], the row-major
/// [`types::index`] conversions, [`types::GridError`] and the
/// [`types::Dispatch`] strategies.
pub use hexlat_core as types;

/// Grid topologies (`hexlat-space`).
///
/// The [`space::Topology`] trait and its backends [`space::Square8`] and
/// [`space::HexOffset`].
pub use hexlat_space as space;

/// Owning grids (`hexlat-grid`).
///
/// [`grid::Grid`] and its aliases, [`grid::FlatBuffer`] storage, and the
/// scoped and shared background query handles.
pub use hexlat_grid as grid;

/// Common imports for typical hexlat usage.
///
/// ```rust
/// use hexlat::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use hexlat_core::{
        Cancellation, CellIndex, Direction, GridConfig, GridCoord, GridError, NO_NEIGHBOR,
    };

    // Dispatch
    pub use hexlat_core::{Dispatch, RayonDispatch, Sequential};

    // Topologies
    pub use hexlat_space::{HexOffset, Square8, Topology, WorldLayout};

    // Grid
    pub use hexlat_grid::{Grid, HexGrid, QueryHandle, SquareGrid};
}
