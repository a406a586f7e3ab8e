//! Cell coordinates and robot pose.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Integer coordinate of a maze cell.
///
/// `(0, 0)` is the south-west corner; x grows East, y grows North.
/// Coordinates are signed so that stepping off the grid is representable
/// and can be rejected by bounds checks instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl Cell {
    /// Create a new cell coordinate
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The south-west corner, where every run starts.
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    /// Adjacent coordinate in `direction` (may be out of bounds)
    #[inline]
    pub fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.offset();
        Cell::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Dead-reckoned robot pose: occupied cell and facing direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Pose {
    /// Cell currently occupied
    pub cell: Cell,
    /// Current heading
    pub heading: Direction,
}

impl Pose {
    /// Create a pose
    pub fn new(cell: Cell, heading: Direction) -> Self {
        Self { cell, heading }
    }

    /// Cell directly ahead of the robot
    #[inline]
    pub fn ahead(&self) -> Cell {
        self.cell.step(self.heading)
    }
}
