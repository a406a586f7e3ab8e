//! Random maze generation.
//!
//! Randomized Prim's algorithm over a fully walled grid, followed by the
//! competition constraints:
//!
//! 1. The central goal region has no interior walls and a closed
//!    perimeter with exactly one random entrance
//! 2. The start corner has walls south and west plus exactly one of
//!    north or east
//!
//! Forcing those walls can cut the spanning tree, so a final pass reopens
//! random unconstrained walls until every cell is reachable again.

use std::collections::VecDeque;

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use vyuha::core::{Cell, Direction};
use vyuha::grid::GridConfig;

use super::MazeLayout;
use crate::error::{Error, Result};

/// Smallest side length that leaves room for the goal region and start rule
pub const MIN_SIDE: usize = 3;

/// Seeded maze generator.
pub struct MazeGenerator {
    width: usize,
    height: usize,
    rng: SmallRng,
}

impl MazeGenerator {
    /// Create a generator; `seed == 0` draws the seed from entropy.
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Self> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(Error::Config(format!(
                "maze must be at least {}x{}, got {}x{}",
                MIN_SIDE, MIN_SIDE, width, height
            )));
        }
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Ok(Self { width, height, rng })
    }

    /// Generate the next maze.
    pub fn generate(&mut self) -> MazeLayout {
        let mut carver = Carver::walled(self.width, self.height);
        let goals = GridConfig {
            width: self.width,
            height: self.height,
        }
        .center_cells();

        self.carve_prim(&mut carver);
        self.shape_goal_region(&mut carver, &goals);
        self.shape_start(&mut carver);
        self.reconnect(&mut carver, &goals);

        carver.into_layout()
    }

    fn carve_prim(&mut self, carver: &mut Carver) {
        let mut in_tree = vec![false; carver.cell_count()];
        let mut frontier: Vec<(Cell, Direction)> = Vec::new();

        let root = Cell::ORIGIN;
        in_tree[carver.index(root)] = true;
        carver.push_edges(root, &mut frontier);

        while !frontier.is_empty() {
            let pick = self.rng.gen_range(0..frontier.len());
            let (cell, dir) = frontier.swap_remove(pick);
            let next = cell.step(dir);
            let (a, b) = (carver.index(cell), carver.index(next));
            if in_tree[a] != in_tree[b] {
                carver.open(cell, dir);
                let fresh = if in_tree[a] { next } else { cell };
                in_tree[carver.index(fresh)] = true;
                carver.push_edges(fresh, &mut frontier);
            }
        }
    }

    fn shape_goal_region(&mut self, carver: &mut Carver, goals: &[Cell]) {
        let mut perimeter = Vec::new();
        for &cell in goals {
            for dir in Direction::ALL {
                let next = cell.step(dir);
                if !carver.in_bounds(next) {
                    continue;
                }
                if goals.contains(&next) {
                    carver.open(cell, dir);
                } else {
                    carver.close(cell, dir);
                    perimeter.push((cell, dir));
                }
            }
        }

        if perimeter.is_empty() {
            return;
        }
        let (cell, dir) = perimeter[self.rng.gen_range(0..perimeter.len())];
        carver.open(cell, dir);
        debug!("[Maze] Goal entrance: {} side of {}", dir, cell);
    }

    fn shape_start(&mut self, carver: &mut Carver) {
        let start = Cell::ORIGIN;
        if self.rng.gen_range(0..2) == 0 {
            carver.close(start, Direction::North);
            carver.open(start, Direction::East);
        } else {
            carver.open(start, Direction::North);
            carver.close(start, Direction::East);
        }
    }

    /// Reopen walls between the reachable region and the rest until the
    /// maze is connected. Walls of the start cell and of the goal region
    /// stay untouched.
    fn reconnect(&mut self, carver: &mut Carver, goals: &[Cell]) {
        let start = Cell::ORIGIN;
        let locked = |c: Cell| c == start || goals.contains(&c);

        loop {
            let reached = carver.reachable(start);
            if reached.iter().all(|&r| r) {
                return;
            }

            let mut candidates = Vec::new();
            for cell in carver.cells() {
                if !reached[carver.index(cell)] || locked(cell) {
                    continue;
                }
                for dir in Direction::ALL {
                    let next = cell.step(dir);
                    if carver.in_bounds(next)
                        && !reached[carver.index(next)]
                        && !locked(next)
                    {
                        candidates.push((cell, dir));
                    }
                }
            }

            if candidates.is_empty() {
                warn!("[Maze] Could not reconnect generated maze");
                return;
            }
            let (cell, dir) = candidates[self.rng.gen_range(0..candidates.len())];
            debug!("[Maze] Reopening {} side of {} to reconnect", dir, cell);
            carver.open(cell, dir);
        }
    }
}

/// Generate a single maze.
pub fn generate_maze(width: usize, height: usize, seed: u64) -> Result<MazeLayout> {
    Ok(MazeGenerator::new(width, height, seed)?.generate())
}

/// Mutable wall masks with both carving and closing.
struct Carver {
    width: usize,
    height: usize,
    walls: Vec<u8>,
}

impl Carver {
    fn walled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            walls: vec![0x0F; width * height],
        }
    }

    fn cell_count(&self) -> usize {
        self.walls.len()
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    fn index(&self, cell: Cell) -> usize {
        cell.y as usize * self.width + cell.x as usize
    }

    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).flat_map(move |y| (0..w).map(move |x| Cell::new(x, y)))
    }

    fn is_open(&self, cell: Cell, dir: Direction) -> bool {
        self.walls[self.index(cell)] & dir.bit() == 0
    }

    fn open(&mut self, cell: Cell, dir: Direction) {
        let next = cell.step(dir);
        if !self.in_bounds(cell) || !self.in_bounds(next) {
            return;
        }
        let (i, j) = (self.index(cell), self.index(next));
        self.walls[i] &= !dir.bit();
        self.walls[j] &= !dir.opposite().bit();
    }

    fn close(&mut self, cell: Cell, dir: Direction) {
        let next = cell.step(dir);
        if !self.in_bounds(cell) || !self.in_bounds(next) {
            return;
        }
        let (i, j) = (self.index(cell), self.index(next));
        self.walls[i] |= dir.bit();
        self.walls[j] |= dir.opposite().bit();
    }

    fn push_edges(&self, cell: Cell, frontier: &mut Vec<(Cell, Direction)>) {
        for dir in Direction::ALL {
            if self.in_bounds(cell.step(dir)) {
                frontier.push((cell, dir));
            }
        }
    }

    fn reachable(&self, from: Cell) -> Vec<bool> {
        let mut seen = vec![false; self.cell_count()];
        let mut queue = VecDeque::from([from]);
        seen[self.index(from)] = true;
        while let Some(cell) = queue.pop_front() {
            for dir in Direction::ALL {
                let next = cell.step(dir);
                if self.in_bounds(next) && self.is_open(cell, dir) && !seen[self.index(next)] {
                    seen[self.index(next)] = true;
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    fn into_layout(self) -> MazeLayout {
        let mut layout = MazeLayout::new(self.width, self.height);
        for cell in self.cells() {
            for dir in Direction::ALL {
                if !self.is_open(cell, dir) {
                    layout.set_wall(cell, dir);
                }
            }
        }
        layout
    }
}
