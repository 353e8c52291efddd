//! Ring and disk walk example.
//!
//! Demonstrates: build square and hex grids → fill values → query rings and
//! disks → sum values in range → place cells in world space → run queries
//! in the background and dispose once they drain.
//!
//! Run with `RUST_LOG=debug` to see grid lifecycle events.

use std::sync::Arc;

use hexlat_bench::{fill_with_index, query_centers};
use hexlat_core::{GridCoord, NO_NEIGHBOR};
use hexlat_grid::{HexGrid, SquareGrid};
use hexlat_space::{HexOffset, Square8, Topology, WorldLayout};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== hexlat ring walk ===\n");

    // --- Square grid ---
    let mut square = SquareGrid::<f32>::new(7, 7, Square8).unwrap();
    fill_with_index(&mut square).unwrap();
    let center = GridCoord::new(3, 3);

    println!("Square 7x7, center {center}");
    println!("  neighbours: {:?}", square.neighbors_of(center).unwrap());
    for r in 1..=3 {
        let ring = square.neighbors_at_range(center, r).unwrap();
        let mut sum = 0.0;
        square
            .for_each_neighbor_at_range(center, r, |_, &v| sum += v)
            .unwrap();
        println!("  ring {r}: {} slots, value sum {sum}", ring.len());
    }

    // --- Hex grid ---
    let mut hex = HexGrid::<f32>::new(9, 9, HexOffset::new(true)).unwrap();
    fill_with_index(&mut hex).unwrap();
    let center = GridCoord::new(4, 4);

    println!("\nHex 9x9 (odd rows offset), center {center}");
    let disk = hex.neighbors_within_range(center, 3).unwrap();
    let valid = disk.iter().filter(|&&i| i != NO_NEIGHBOR).count();
    println!("  disk r3: {} slots, {valid} on-grid", disk.len());

    let corner = GridCoord::new(0, 0);
    let ring = hex.neighbors_at_range(corner, 2).unwrap();
    println!("  ring 2 around {corner}: {ring:?}");

    // --- World positions ---
    let layout = WorldLayout::new([1.0, 1.0], [0.0, 0.0]);
    println!("\nCell centers with unit cells:");
    for coord in [GridCoord::new(0, 0), GridCoord::new(1, 0), GridCoord::new(0, 1)] {
        let sq = Square8.cell_center(coord, &layout);
        let hx = hex.topology().cell_center(coord, &layout);
        println!("  {coord}: square {sq:?}, hex {hx:?}");
    }

    // --- Background queries ---
    let hex = Arc::new(hex);
    let pending: Vec<_> = query_centers(9, 9, 4, 42)
        .into_iter()
        .map(|c| hex.spawn_neighbors_within_range(c, 2).unwrap())
        .collect();
    let report = hex.dispose_after(pending).wait().unwrap();
    println!(
        "\nDisposed after {} background queries (released: {})",
        report.drained.len(),
        report.released
    );

    println!("\n=== Done ===");
}
