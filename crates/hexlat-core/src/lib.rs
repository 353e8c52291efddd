//! Core types for the hexlat grid workspace.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! substrate shared by every topology and by the grid itself:
//!
//! - [`GridCoord`] and [`Direction`], the geometric vocabulary,
//! - [`GridConfig`] and the row-major [`index`] conversion functions,
//! - [`GridError`], the error taxonomy,
//! - [`Dispatch`], the fan-out/fan-in task primitive used for bulk and
//!   ring/disk neighbour computation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod coord;
pub mod direction;
pub mod dispatch;
pub mod error;
pub mod index;

pub use config::GridConfig;
pub use coord::GridCoord;
pub use direction::Direction;
pub use dispatch::{Cancellation, Dispatch, RayonDispatch, Sequential};
pub use error::GridError;
pub use index::{CellIndex, NO_NEIGHBOR};
