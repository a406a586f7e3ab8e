//! Cardinal directions and in-place rotations.

use serde::{Deserialize, Serialize};

/// One of the four cardinal directions of the maze grid.
///
/// The discriminant doubles as the wall-mask bit index and as the
/// fixed priority order used by the planner and tracer (N, E, S, W).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// +y
    #[default]
    North = 0,
    /// +x
    East = 1,
    /// -y
    South = 2,
    /// -x
    West = 3,
}

impl Direction {
    /// All directions in planner priority order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Index 0..4 (N, E, S, W).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Direction from an index, wrapping modulo 4.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Wall-mask bit for this side of a cell.
    #[inline]
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// The direction rotated 180°.
    #[inline]
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The direction after one 90° clockwise turn.
    #[inline]
    pub fn right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The direction after one 90° counter-clockwise turn.
    #[inline]
    pub fn left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Grid offset `(dx, dy)` of one step in this direction.
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Number of clockwise quarter turns from `self` to `target` (0..4).
    #[inline]
    pub fn quarter_turns_to(self, target: Direction) -> usize {
        (target.index() + 4 - self.index()) % 4
    }

    /// Rotations needed to face `target` from `self`.
    ///
    /// Three clockwise quarter turns collapse into a single left turn;
    /// every other case is expressed as right turns, so a reversal is
    /// always two right turns.
    pub fn rotations_to(self, target: Direction) -> &'static [Rotation] {
        match self.quarter_turns_to(target) {
            0 => &[],
            1 => &[Rotation::Right],
            2 => &[Rotation::Right, Rotation::Right],
            _ => &[Rotation::Left],
        }
    }

    /// Lowercase character used by the mms protocol (`n`, `e`, `s`, `w`).
    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::East => 'e',
            Direction::South => 's',
            Direction::West => 'w',
        }
    }

    /// Name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single 90° in-place rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Counter-clockwise
    Left,
    /// Clockwise
    Right,
}

impl Rotation {
    /// Heading after applying this rotation.
    #[inline]
    pub fn apply(self, heading: Direction) -> Direction {
        match self {
            Rotation::Left => heading.left(),
            Rotation::Right => heading.right(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
    }

    #[test]
    fn test_left_right() {
        assert_eq!(Direction::North.right(), Direction::East);
        assert_eq!(Direction::North.left(), Direction::West);
        assert_eq!(Direction::West.right(), Direction::North);
        for dir in Direction::ALL {
            assert_eq!(dir.left().right(), dir);
        }
    }

    #[test]
    fn test_bits_are_distinct() {
        let mask = Direction::ALL.iter().fold(0u8, |m, d| m | d.bit());
        assert_eq!(mask, 0b1111);
    }

    #[test]
    fn test_rotations_to() {
        let h = Direction::North;
        assert!(h.rotations_to(Direction::North).is_empty());
        assert_eq!(h.rotations_to(Direction::East), &[Rotation::Right]);
        assert_eq!(
            h.rotations_to(Direction::South),
            &[Rotation::Right, Rotation::Right]
        );
        assert_eq!(h.rotations_to(Direction::West), &[Rotation::Left]);
    }

    #[test]
    fn test_rotations_reach_target() {
        for from in Direction::ALL {
            for to in Direction::ALL {
                let end = from
                    .rotations_to(to)
                    .iter()
                    .fold(from, |h, r| r.apply(h));
                assert_eq!(end, to, "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_mms_chars() {
        let chars: String = Direction::ALL.iter().map(|d| d.as_char()).collect();
        assert_eq!(chars, "nesw");
    }
}
