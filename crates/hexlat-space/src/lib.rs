//! Grid topologies for hexlat.
//!
//! This crate defines the [`Topology`] trait, the extension point through
//! which a grid precomputes immediate neighbours and enumerates rings and
//! disks, along with its two backends.
//!
//! # Backends
//!
//! - [`Square8`]: square grid, 8-connected (cardinals and diagonals)
//! - [`HexOffset`]: hexagonal grid in offset (zig-zag) row coordinates,
//!   6-connected, with a per-grid choice of which row parity is shifted
//!
//! # Ring and disk queries
//!
//! A ring is decomposed into corner-anchored [`Line`]s, each an independent
//! unit of work writing a disjoint slice of the result. A disk is the
//! concatenation of rings `1..=r`, so ring `k` always starts at the same
//! output position regardless of how the lines are scheduled.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod hex;
pub mod layout;
pub mod line;
pub mod square;
pub mod tables;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use hex::HexOffset;
pub use layout::WorldLayout;
pub use line::Line;
pub use square::Square8;
pub use topology::Topology;
