//! Wall and visitation storage for the maze grid.
//!
//! Uses flat per-field arrays indexed `y * width + x`, one byte per cell
//! for the wall mask and one for the visited flag.

use crate::core::{Cell, Direction};

use super::config::GridConfig;

/// Per-cell wall knowledge and visitation flags.
///
/// ## Wall mask layout
///
/// ```text
/// bit 0 = North, bit 1 = East, bit 2 = South, bit 3 = West
/// ```
///
/// Walls are always kept symmetric: a wall registered on one side of a
/// cell is mirrored onto the facing side of the in-bounds neighbor.
/// Visited flags only ever go from `false` to `true`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    /// Wall bitmask per cell
    walls: Vec<u8>,
    /// Visited flag per cell (0 = never occupied, 1 = occupied at least once)
    visited: Vec<u8>,
    /// Grid width in cells
    width: usize,
    /// Grid height in cells
    height: usize,
}

impl MazeGrid {
    /// Create an empty grid: no walls known, nothing visited
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            walls: vec![0; size],
            visited: vec![0; size],
            width,
            height,
        }
    }

    /// Create a grid sized from configuration
    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check if a cell lies inside the grid
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    /// Convert a cell to its flat array index
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if self.in_bounds(cell) {
            Some(cell.y as usize * self.width + cell.x as usize)
        } else {
            None
        }
    }

    /// Convert a flat array index back to a cell
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).map(|i| self.cell_at(i))
    }

    /// Record a wall on `direction` side of `cell`.
    ///
    /// Also sets the mirrored bit on the neighbor across that side when the
    /// neighbor is in bounds. Repeated calls are no-ops and out-of-bounds
    /// cells are ignored.
    ///
    /// Returns `true` if the cell's own mask changed.
    pub fn register_wall(&mut self, cell: Cell, direction: Direction) -> bool {
        let Some(i) = self.index(cell) else {
            return false;
        };

        let before = self.walls[i];
        self.walls[i] |= direction.bit();

        if let Some(j) = self.index(cell.step(direction)) {
            self.walls[j] |= direction.opposite().bit();
        }

        before != self.walls[i]
    }

    /// Is there a known wall on `direction` side of `cell`?
    ///
    /// Out-of-bounds cells report no knowledge (`false`).
    #[inline]
    pub fn has_wall(&self, cell: Cell, direction: Direction) -> bool {
        self.index(cell)
            .is_some_and(|i| self.walls[i] & direction.bit() != 0)
    }

    /// Raw wall bitmask for a cell (0 when out of bounds)
    #[inline]
    pub fn wall_mask(&self, cell: Cell) -> u8 {
        self.index(cell).map_or(0, |i| self.walls[i])
    }

    /// Mark a cell as physically occupied. Idempotent.
    pub fn mark_visited(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.visited[i] = 1;
        }
    }

    /// Has the robot ever occupied this cell?
    #[inline]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.visited[i] != 0)
    }

    /// Number of visited cells
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v != 0).count()
    }

    /// In-bounds neighbor across `direction`, ignoring walls
    #[inline]
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let next = cell.step(direction);
        self.in_bounds(next).then_some(next)
    }

    /// In-bounds neighbor across `direction` with no known wall between
    #[inline]
    pub fn open_neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        if self.has_wall(cell, direction) {
            None
        } else {
            self.neighbor(cell, direction)
        }
    }

    /// Register every wall on the outer edge of the grid
    pub fn enclose_boundary(&mut self) {
        let (w, h) = (self.width as i32, self.height as i32);
        for x in 0..w {
            self.register_wall(Cell::new(x, 0), Direction::South);
            self.register_wall(Cell::new(x, h - 1), Direction::North);
        }
        for y in 0..h {
            self.register_wall(Cell::new(0, y), Direction::West);
            self.register_wall(Cell::new(w - 1, y), Direction::East);
        }
    }

    /// Render walls as ASCII art (north row first), for debugging
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                out.push('+');
                let north = self.has_wall(Cell::new(x, y), Direction::North);
                out.push_str(if north { "---" } else { "   " });
            }
            out.push_str("+\n");
            for x in 0..self.width as i32 {
                let cell = Cell::new(x, y);
                out.push(if self.has_wall(cell, Direction::West) {
                    '|'
                } else {
                    ' '
                });
                out.push_str(if self.is_visited(cell) { " . " } else { "   " });
            }
            let last = Cell::new(self.width as i32 - 1, y);
            out.push(if self.has_wall(last, Direction::East) {
                '|'
            } else {
                ' '
            });
            out.push('\n');
        }
        for x in 0..self.width as i32 {
            out.push('+');
            let south = self.has_wall(Cell::new(x, 0), Direction::South);
            out.push_str(if south { "---" } else { "   " });
        }
        out.push_str("+\n");
        out
    }
}
