//! Owning 2D grids with precomputed neighbour tables.
//!
//! A [`Grid`] stores one value per cell in a [`FlatBuffer`] and keeps a
//! second flat buffer with every cell's immediate neighbours, filled at
//! construction by the grid's [`Topology`](hexlat_space::Topology).
//!
//! # Architecture
//!
//! ```text
//! Grid<T, Topo, D>
//! ├── GridConfig        (width, length, neighbour count)
//! ├── FlatBuffer<T>     (size cell values)
//! ├── FlatBuffer<i32>   (size × NEIGHBOR_COUNT neighbour slots)
//! ├── Topo              (Square8 | HexOffset)
//! └── D                 (Sequential | RayonDispatch)
//! ```
//!
//! Range-1 queries slice the table. Larger ranges are traced line by line
//! on the dispatcher and joined before returning. Queries can also run in
//! the background, see [`background`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod background;
pub mod grid;
pub mod storage;

pub use background::{Disposal, DisposalReport, QueryHandle, QueryScope, ScopedQuery};
pub use grid::{Grid, HexGrid, SquareGrid};
pub use storage::FlatBuffer;
