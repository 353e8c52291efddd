//! Per-topology direction step tables.
//!
//! Each table is indexed by [`Direction::ordinal`]. The tables are process
//! wide constants; grids share them without synchronisation.
//!
//! Hex grids use two tables. Rows are shifted by half a cell on alternate
//! rows, so a diagonal step from a shifted ("offset") row lands one column
//! further right than the same step from an unshifted ("normal") row.
//! `Up` and `Down` move two rows and therefore never change parity.

use hexlat_core::{Direction, GridCoord};

const fn c(x: i32, y: i32) -> GridCoord {
    GridCoord::new(x, y)
}

/// Square grid steps, also the slot order of the square neighbour table
/// (the first eight entries).
pub const SQUARE_STEPS: [GridCoord; Direction::COUNT] = [
    c(-1, 0),  // Left
    c(-1, 1),  // UpLeft
    c(0, 1),   // Up
    c(1, 1),   // UpRight
    c(1, 0),   // Right
    c(1, -1),  // DownRight
    c(0, -1),  // Down
    c(-1, -1), // DownLeft
    c(0, 0),   // None
];

/// Hex steps from a cell on a normal (unshifted) row.
pub const HEX_NORMAL_STEPS: [GridCoord; Direction::COUNT] = [
    c(-1, 0),  // Left
    c(-1, 1),  // UpLeft
    c(0, 2),   // Up
    c(0, 1),   // UpRight
    c(1, 0),   // Right
    c(0, -1),  // DownRight
    c(0, -2),  // Down
    c(-1, -1), // DownLeft
    c(0, 0),   // None
];

/// Hex steps from a cell on an offset (shifted) row.
pub const HEX_OFFSET_STEPS: [GridCoord; Direction::COUNT] = [
    c(-1, 0), // Left
    c(0, 1),  // UpLeft
    c(0, 2),  // Up
    c(1, 1),  // UpRight
    c(1, 0),  // Right
    c(1, -1), // DownRight
    c(0, -2), // Down
    c(0, -1), // DownLeft
    c(0, 0),  // None
];

/// Slot order of the square neighbour table.
pub const SQUARE_SLOTS: [Direction; 8] = [
    Direction::Left,
    Direction::UpLeft,
    Direction::Up,
    Direction::UpRight,
    Direction::Right,
    Direction::DownRight,
    Direction::Down,
    Direction::DownLeft,
];

/// Slot order of the hex neighbour table.
pub const HEX_SLOTS: [Direction; 6] = [
    Direction::Left,
    Direction::UpLeft,
    Direction::UpRight,
    Direction::Right,
    Direction::DownRight,
    Direction::DownLeft,
];

/// Look up `direction` in `table`.
#[inline]
pub fn step(table: &[GridCoord; Direction::COUNT], direction: Direction) -> GridCoord {
    table[direction.ordinal()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_never_moves() {
        for table in [&SQUARE_STEPS, &HEX_NORMAL_STEPS, &HEX_OFFSET_STEPS] {
            assert_eq!(step(table, Direction::None), GridCoord::ZERO);
        }
    }

    #[test]
    fn square_steps_are_antisymmetric() {
        for d in Direction::ALL {
            let fwd = step(&SQUARE_STEPS, d);
            let back = step(&SQUARE_STEPS, d.opposite());
            assert_eq!(fwd + back, GridCoord::ZERO, "{d}");
        }
    }

    #[test]
    fn hex_diagonals_invert_across_tables() {
        // A diagonal step changes row parity, so stepping back uses the other table.
        for d in Direction::ALL.into_iter().filter(|d| d.is_diagonal()) {
            let there = step(&HEX_NORMAL_STEPS, d);
            let back = step(&HEX_OFFSET_STEPS, d.opposite());
            assert_eq!(there + back, GridCoord::ZERO, "{d}");
        }
    }

    #[test]
    fn hex_orthogonals_match_across_tables() {
        for d in Direction::ALL.into_iter().filter(|d| d.is_orthogonal()) {
            assert_eq!(step(&HEX_NORMAL_STEPS, d), step(&HEX_OFFSET_STEPS, d), "{d}");
        }
    }
}
