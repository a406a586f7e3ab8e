//! Ground-truth wall layout.

use vyuha::core::{Cell, Direction};
use vyuha::grid::MazeGrid;
use vyuha::planning::{FloodMode, flood_fill};

/// Real walls of a maze.
///
/// Backed by a fully enclosed [`MazeGrid`], so walls are always mirrored
/// between neighbors and the perimeter is always closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeLayout {
    grid: MazeGrid,
}

impl MazeLayout {
    /// Enclosed maze with no interior walls
    pub fn new(width: usize, height: usize) -> Self {
        let mut grid = MazeGrid::new(width, height);
        grid.enclose_boundary();
        Self { grid }
    }

    /// Wrap an existing wall grid, closing its perimeter
    pub fn from_grid(mut grid: MazeGrid) -> Self {
        grid.enclose_boundary();
        Self { grid }
    }

    /// Maze width in cells
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Maze height in cells
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Underlying wall grid
    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    /// Is `cell` inside the maze?
    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.grid.in_bounds(cell)
    }

    /// Is there a wall on `direction` side of `cell`? Cells outside the maze
    /// are solid.
    pub fn wall(&self, cell: Cell, direction: Direction) -> bool {
        !self.grid.in_bounds(cell) || self.grid.has_wall(cell, direction)
    }

    /// Add a wall (mirrored onto the neighbor)
    pub fn set_wall(&mut self, cell: Cell, direction: Direction) {
        self.grid.register_wall(cell, direction);
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.grid.cells()
    }

    /// Number of cells reachable from `from` through open sides
    pub fn reachable_from(&self, from: Cell) -> usize {
        flood_fill(&self.grid, &[from], FloodMode::Full).reachable_count()
    }

    /// Can every cell be reached from `from`?
    pub fn is_connected(&self, from: Cell) -> bool {
        self.reachable_from(from) == self.grid.cell_count()
    }

    /// ASCII rendering
    pub fn to_ascii(&self) -> String {
        self.grid.to_ascii()
    }
}
