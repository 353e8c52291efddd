//! Topology trait compliance test helpers.
//!
//! These functions verify that a [`Topology`] implementation satisfies the
//! invariants the grid relies on. Reused across the backend test modules
//! (Square8, HexOffset).

use crate::topology::Topology;
use hexlat_core::{GridConfig, GridCoord, RayonDispatch, Sequential, NO_NEIGHBOR};
use indexmap::IndexSet;
use std::num::NonZeroU32;

fn config_for<T: Topology>(width: i32, length: i32) -> GridConfig {
    GridConfig::new(width, length, T::NEIGHBOR_COUNT).expect("valid test dimensions")
}

fn table<T: Topology>(topo: &T, config: &GridConfig) -> Vec<i32> {
    let mut t = vec![0; config.neighbor_table_len()];
    topo.compute_all_neighbors(config, &Sequential, &mut t);
    t
}

fn ranges(max_range: u32) -> impl Iterator<Item = NonZeroU32> {
    (1..=max_range).filter_map(NonZeroU32::new)
}

/// Assert that every slot holds either the sentinel or an in-grid index,
/// and that a cell never lists itself.
pub fn assert_table_slots_valid<T: Topology>(topo: &T, config: &GridConfig) {
    let t = table(topo, config);
    assert_eq!(t.len(), config.size() * T::NEIGHBOR_COUNT);
    for (i, slots) in t.chunks(T::NEIGHBOR_COUNT).enumerate() {
        for &n in slots {
            assert!(
                n == NO_NEIGHBOR || config.is_valid_index(n),
                "cell {i} has out-of-range slot {n}"
            );
            assert_ne!(n, i as i32, "cell {i} lists itself");
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric<T: Topology>(topo: &T, config: &GridConfig) {
    let t = table(topo, config);
    let k = T::NEIGHBOR_COUNT;
    for a in 0..config.size() {
        for &b in t[a * k..(a + 1) * k].iter().filter(|&&b| b != NO_NEIGHBOR) {
            let b = b as usize;
            assert!(
                t[b * k..(b + 1) * k].contains(&(a as i32)),
                "neighbour symmetry violated: {b} in N({a}) but {a} not in N({b})"
            );
        }
    }
}

/// Assert that immediate neighbours are exactly the in-grid cells at
/// distance 1.
pub fn assert_neighbours_at_distance_one<T: Topology>(topo: &T, config: &GridConfig) {
    let t = table(topo, config);
    let k = T::NEIGHBOR_COUNT;
    for (a, coord) in config.coords().enumerate() {
        let listed: IndexSet<i32> = t[a * k..(a + 1) * k]
            .iter()
            .copied()
            .filter(|&n| n != NO_NEIGHBOR)
            .collect();
        let expected: IndexSet<i32> = config
            .coords()
            .filter(|&other| topo.distance(coord, other) == 1)
            .map(|other| config.resolve(other))
            .collect();
        assert_eq!(
            listed.len(),
            expected.len(),
            "neighbour count mismatch at {coord}"
        );
        assert!(
            listed.iter().all(|n| expected.contains(n)),
            "neighbours of {coord} are not the distance-1 cells"
        );
    }
}

/// Assert `distance(a, a) == 0` and `distance(a, b) == distance(b, a)`.
pub fn assert_distance_metric<T: Topology>(topo: &T, config: &GridConfig) {
    let cells: Vec<GridCoord> = config.coords().collect();
    for &a in &cells {
        assert_eq!(topo.distance(a, a), 0, "distance({a}, {a}) != 0");
        for &b in &cells {
            assert_eq!(
                topo.distance(a, b),
                topo.distance(b, a),
                "distance not symmetric for {a}, {b}"
            );
        }
    }
}

/// Assert ring size law: `NEIGHBOR_COUNT * r` raw slots for every center.
pub fn assert_ring_size_law<T: Topology>(topo: &T, config: &GridConfig, max_range: u32) {
    for center in config.coords() {
        for r in ranges(max_range) {
            let ring = topo.neighbors_at_range(config, &Sequential, center, r);
            assert_eq!(ring.len(), T::NEIGHBOR_COUNT * r.get() as usize);
            assert_eq!(ring.len(), topo.ring_len(r));
        }
    }
}

/// Assert that each ring lists exactly the in-grid cells at distance `r`,
/// each once.
pub fn assert_ring_complete<T: Topology>(topo: &T, config: &GridConfig, max_range: u32) {
    for center in config.coords() {
        for r in ranges(max_range) {
            let ring = topo.neighbors_at_range(config, &Sequential, center, r);
            let valid: Vec<i32> = ring.into_iter().filter(|&n| n != NO_NEIGHBOR).collect();
            let unique: IndexSet<i32> = valid.iter().copied().collect();
            assert_eq!(
                unique.len(),
                valid.len(),
                "ring {r} around {center} has duplicates"
            );
            let expected: IndexSet<i32> = config
                .coords()
                .filter(|&other| topo.distance(center, other) == r.get())
                .map(|other| config.resolve(other))
                .collect();
            assert_eq!(
                unique.len(),
                expected.len(),
                "ring {r} around {center} is incomplete"
            );
            assert!(unique.iter().all(|n| expected.contains(n)));
        }
    }
}

/// Assert disk size law and that disk layer `k` equals the ring at `k`.
pub fn assert_disk_layers_are_rings<T: Topology>(topo: &T, config: &GridConfig, max_range: u32) {
    let k = T::NEIGHBOR_COUNT;
    for center in config.coords() {
        for r in ranges(max_range) {
            let disk = topo.neighbors_within_range(config, &Sequential, center, r);
            let n = r.get() as usize;
            assert_eq!(disk.len(), k * n * (n + 1) / 2);
            let mut start = 0;
            for layer in ranges(r.get()) {
                let ring = topo.neighbors_at_range(config, &Sequential, center, layer);
                assert_eq!(&disk[start..start + ring.len()], ring.as_slice());
                start += ring.len();
            }
        }
    }
}

/// Assert that the rayon dispatcher reproduces the sequential results.
pub fn assert_dispatch_agnostic<T: Topology>(topo: &T, config: &GridConfig, max_range: u32) {
    let pool = RayonDispatch::new();
    let mut par = vec![0; config.neighbor_table_len()];
    topo.compute_all_neighbors(config, &pool, &mut par);
    assert_eq!(table(topo, config), par);

    for center in config.coords() {
        for r in ranges(max_range) {
            assert_eq!(
                topo.neighbors_within_range(config, &Sequential, center, r),
                topo.neighbors_within_range(config, &pool, center, r),
            );
        }
    }
}

/// Run all compliance checks on a `width x length` grid, probing ranges
/// `1..=max_range`.
pub fn run_full_compliance<T: Topology>(topo: &T, width: i32, length: i32, max_range: u32) {
    let config = config_for::<T>(width, length);
    assert_table_slots_valid(topo, &config);
    assert_neighbours_symmetric(topo, &config);
    assert_neighbours_at_distance_one(topo, &config);
    assert_distance_metric(topo, &config);
    assert_ring_size_law(topo, &config, max_range);
    assert_ring_complete(topo, &config, max_range);
    assert_disk_layers_are_rings(topo, &config, max_range);
    assert_dispatch_agnostic(topo, &config, max_range);
}
