//! Symbolic step directions shared by every topology.

use std::fmt;

/// One of the eight compass steps on a 2D grid, plus [`Direction::None`].
///
/// The discriminant is the ordinal used to index per-topology direction
/// tables, so the declaration order is load-bearing.
///
/// ```
/// use hexlat_core::Direction;
///
/// assert_eq!(Direction::Left.ordinal(), 0);
/// assert_eq!(Direction::None.ordinal(), 8);
/// assert_eq!(Direction::from_ordinal(4), Some(Direction::Right));
/// assert_eq!(Direction::UpLeft.opposite(), Direction::DownRight);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// `-x`.
    Left = 0,
    /// `-x`, `+y`.
    UpLeft,
    /// `+y`.
    Up,
    /// `+x`, `+y`.
    UpRight,
    /// `+x`.
    Right,
    /// `+x`, `-y`.
    DownRight,
    /// `-y`.
    Down,
    /// `-x`, `-y`.
    DownLeft,
    /// No movement.
    None,
}

impl Direction {
    /// Number of directions including [`Direction::None`].
    pub const COUNT: usize = 9;

    /// All directions in ordinal order.
    pub const ALL: [Direction; Self::COUNT] = [
        Direction::Left,
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::None,
    ];

    /// Table index of this direction.
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Inverse of [`ordinal`](Self::ordinal).
    pub const fn from_ordinal(ordinal: usize) -> Option<Self> {
        if ordinal < Self::COUNT {
            Some(Self::ALL[ordinal])
        } else {
            None
        }
    }

    /// `Left`, `Right`, `Up` and `Down`.
    pub const fn is_orthogonal(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Up | Self::Down)
    }

    /// `UpLeft`, `UpRight`, `DownRight` and `DownLeft`.
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::UpLeft | Self::UpRight | Self::DownRight | Self::DownLeft
        )
    }

    /// The direction pointing the other way. `None` is its own opposite.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::UpLeft => Self::DownRight,
            Self::Up => Self::Down,
            Self::UpRight => Self::DownLeft,
            Self::Right => Self::Left,
            Self::DownRight => Self::UpLeft,
            Self::Down => Self::Up,
            Self::DownLeft => Self::UpRight,
            Self::None => Self::None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::UpLeft => "up-left",
            Self::Up => "up",
            Self::UpRight => "up-right",
            Self::Right => "right",
            Self::DownRight => "down-right",
            Self::Down => "down",
            Self::DownLeft => "down-left",
            Self::None => "none",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_declaration_order() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.ordinal(), i);
            assert_eq!(Direction::from_ordinal(i), Some(*d));
        }
        assert_eq!(Direction::from_ordinal(9), None);
    }

    #[test]
    fn orthogonal_and_diagonal_partition_moves() {
        for d in Direction::ALL {
            if d == Direction::None {
                assert!(!d.is_orthogonal() && !d.is_diagonal());
            } else {
                assert_ne!(d.is_orthogonal(), d.is_diagonal(), "{d}");
            }
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
        }
    }
}
