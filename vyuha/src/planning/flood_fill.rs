//! Multi-source breadth-first flood fill.

use std::collections::VecDeque;

use log::trace;

use crate::core::{Cell, Direction};
use crate::grid::MazeGrid;

/// Which cells the flood may pass through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloodMode {
    /// Optimistic: every cell without a known wall in between is passable,
    /// visited or not. Used while searching to pull the robot into
    /// unexplored territory.
    Full,
    /// Confirmed: only visited cells are seeded and expanded, so every
    /// distance is backed by walls the robot has actually sensed.
    Restricted,
}

impl FloodMode {
    /// May the flood seed or expand into `cell`?
    #[inline]
    pub fn admits(self, grid: &MazeGrid, cell: Cell) -> bool {
        match self {
            FloodMode::Full => true,
            FloodMode::Restricted => grid.is_visited(cell),
        }
    }
}

/// Shortest grid distance from every cell to the goal set.
///
/// Produced fresh by each [`flood_fill`] call and never updated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    distances: Vec<u32>,
    width: usize,
    height: usize,
}

impl DistanceField {
    /// Sentinel stored for cells the flood never reached
    pub const UNREACHABLE: u32 = u32::MAX;

    fn unreachable(width: usize, height: usize) -> Self {
        Self {
            distances: vec![Self::UNREACHABLE; width * height],
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        if cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
        {
            Some(cell.y as usize * self.width + cell.x as usize)
        } else {
            None
        }
    }

    /// Distance of `cell` to the nearest goal, `None` if unreachable or out of bounds
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.index(cell)
            .map(|i| self.distances[i])
            .filter(|&d| d != Self::UNREACHABLE)
    }

    /// Raw distance including the sentinel (out of bounds reads as unreachable)
    #[inline]
    pub fn raw(&self, cell: Cell) -> u32 {
        self.index(cell)
            .map_or(Self::UNREACHABLE, |i| self.distances[i])
    }

    /// Was `cell` reached by the flood?
    #[inline]
    pub fn is_reachable(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    /// Number of reached cells
    pub fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|&&d| d != Self::UNREACHABLE)
            .count()
    }

    /// Field width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    fn set(&mut self, cell: Cell, distance: u32) {
        if let Some(i) = self.index(cell) {
            self.distances[i] = distance;
        }
    }
}

/// Flood the grid outward from `goals`.
///
/// Goals start at distance 0 and the frontier expands in FIFO order through
/// unwalled in-bounds neighbors, checked North, East, South, West. A cell's
/// distance is written exactly once, on first discovery, which is what makes
/// the result a true BFS distance. In [`FloodMode::Restricted`] unvisited
/// goals are not seeded and unvisited neighbors are never entered.
pub fn flood_fill(grid: &MazeGrid, goals: &[Cell], mode: FloodMode) -> DistanceField {
    let mut field = DistanceField::unreachable(grid.width(), grid.height());
    let mut queue = VecDeque::with_capacity(grid.cell_count());

    for &goal in goals {
        if !grid.in_bounds(goal) || !mode.admits(grid, goal) {
            continue;
        }
        if field.raw(goal) == DistanceField::UNREACHABLE {
            field.set(goal, 0);
            queue.push_back(goal);
        }
    }

    while let Some(cell) = queue.pop_front() {
        let d = field.raw(cell);
        for dir in Direction::ALL {
            let Some(next) = grid.open_neighbor(cell, dir) else {
                continue;
            };
            if !mode.admits(grid, next) || field.raw(next) != DistanceField::UNREACHABLE {
                continue;
            }
            field.set(next, d + 1);
            queue.push_back(next);
        }
    }

    trace!(
        "[Flood] {:?} fill from {} goals reached {}/{} cells",
        mode,
        goals.len(),
        field.reachable_count(),
        grid.cell_count()
    );

    field
}
