//! Line tracing shared by every topology.
//!
//! A [`Line`] is one independent unit of ring work: starting at `origin`,
//! visit `len` cells, the `i`-th being `topology.step(origin, direction, i)`.
//! [`trace_lines`] pre-sizes the result, hands each line its own disjoint
//! slice, and dispatches all lines at once.

use crate::topology::Topology;
use hexlat_core::{CellIndex, Direction, Dispatch, GridConfig, GridCoord, NO_NEIGHBOR};

/// One corner-anchored run of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line {
    /// First cell of the line.
    pub origin: GridCoord,
    /// Direction the line is traced in.
    pub direction: Direction,
    /// Number of cells, origin included.
    pub len: usize,
}

impl Line {
    /// Create a line.
    pub const fn new(origin: GridCoord, direction: Direction, len: usize) -> Self {
        Self {
            origin,
            direction,
            len,
        }
    }

    /// Coordinates of the line's cells, origin first.
    pub fn coords<'a, T: Topology>(&'a self, topology: &'a T) -> impl Iterator<Item = GridCoord> + 'a {
        (0..self.len).map(move |i| topology.step(self.origin, self.direction, i as u32))
    }
}

/// Trace `lines` into one flat result, concatenated in the given order.
///
/// Each line writes `line.len` slots. Off-grid cells become [`NO_NEIGHBOR`].
/// Returns after every line has been traced.
pub fn trace_lines<T: Topology, D: Dispatch>(
    topology: &T,
    config: &GridConfig,
    dispatch: &D,
    lines: &[Line],
) -> Vec<CellIndex> {
    let total: usize = lines.iter().map(|l| l.len).sum();
    let mut out = vec![NO_NEIGHBOR; total];

    let mut segments = Vec::with_capacity(lines.len());
    let mut rest = out.as_mut_slice();
    for line in lines {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(line.len);
        segments.push(head);
        rest = tail;
    }

    dispatch.for_each_segment(segments, 1, |i, segment| {
        let line = &lines[i];
        for (slot, coord) in segment.iter_mut().zip(line.coords(topology)) {
            *slot = config.resolve(coord);
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square8;
    use hexlat_core::{RayonDispatch, Sequential};

    #[test]
    fn lines_concatenate_in_order() {
        let config = GridConfig::new(4, 4, 8).unwrap();
        let lines = [
            Line::new(GridCoord::new(0, 0), Direction::Right, 3),
            Line::new(GridCoord::new(3, 3), Direction::Down, 2),
        ];
        let out = trace_lines(&Square8, &config, &Sequential, &lines);
        assert_eq!(out, vec![0, 1, 2, 15, 11]);
    }

    #[test]
    fn off_grid_cells_become_sentinels() {
        let config = GridConfig::new(2, 2, 8).unwrap();
        let lines = [Line::new(GridCoord::new(-1, 1), Direction::Right, 4)];
        let out = trace_lines(&Square8, &config, &Sequential, &lines);
        assert_eq!(out, vec![NO_NEIGHBOR, 2, 3, NO_NEIGHBOR]);
    }

    #[test]
    fn empty_and_zero_length_lines() {
        let config = GridConfig::new(2, 2, 8).unwrap();
        assert!(trace_lines(&Square8, &config, &Sequential, &[]).is_empty());
        let lines = [
            Line::new(GridCoord::ZERO, Direction::Up, 0),
            Line::new(GridCoord::ZERO, Direction::Up, 2),
        ];
        assert_eq!(trace_lines(&Square8, &config, &Sequential, &lines), vec![0, 2]);
    }

    #[test]
    fn parallel_tracing_matches_sequential() {
        let config = GridConfig::new(16, 16, 8).unwrap();
        let lines: Vec<Line> = (0..32)
            .map(|i| Line::new(GridCoord::new(i % 16, i / 2), Direction::UpRight, 7))
            .collect();
        let seq = trace_lines(&Square8, &config, &Sequential, &lines);
        let par = trace_lines(&Square8, &config, &RayonDispatch::new(), &lines);
        assert_eq!(seq, par);
    }
}
