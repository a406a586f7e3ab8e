//! Return-path and fast-path construction.
//!
//! Both routes are planned only through visited cells so that every move
//! is backed by sensed walls. The return trip additionally has a fallback
//! that cannot fail: retracing the exploration log backwards.

use log::{error, info};

use crate::core::{Cell, Direction};
use crate::grid::MazeGrid;
use crate::planning::{FloodMode, flood_fill, trace_path};

/// How a return path was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReturnStrategy {
    /// Shortest route home through visited cells
    Smart,
    /// Exploration log reversed with every heading flipped
    Fallback,
}

/// A return path together with the strategy that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnRoute {
    /// Headings from the current cell back to the start
    pub path: Vec<Direction>,
    /// Which attempt succeeded
    pub strategy: ReturnStrategy,
}

/// Retrace the exploration log: reverse it and flip every heading 180°.
///
/// Always valid because it only revisits cells the robot has already driven
/// through, and always the same length as the log.
pub fn fallback_return_path(exploration_log: &[Direction]) -> Vec<Direction> {
    exploration_log
        .iter()
        .rev()
        .map(|dir| dir.opposite())
        .collect()
}

/// Build the path from `current` back to `start`.
///
/// Tries a restricted flood fill seeded at `start` and a restricted trace
/// from `current`; if `current` is unreachable or the trace fails or comes
/// back empty, falls back to [`fallback_return_path`].
pub fn build_return_path(
    grid: &MazeGrid,
    current: Cell,
    start: Cell,
    exploration_log: &[Direction],
) -> ReturnRoute {
    let field = flood_fill(grid, &[start], FloodMode::Restricted);

    if field.is_reachable(current) {
        match trace_path(grid, &field, current, FloodMode::Restricted) {
            Ok(path) if !path.is_empty() => {
                info!("[Route] Return path: smart route. Move count: {}", path.len());
                return ReturnRoute {
                    path,
                    strategy: ReturnStrategy::Smart,
                };
            }
            Ok(_) => {}
            Err(e) => info!("[Route] Smart return failed ({})", e.code()),
        }
    }

    info!("[Route] Smart return failed. Using reversed exploration path as fallback.");
    let path = fallback_return_path(exploration_log);
    info!(
        "[Route] Return path: fallback retrace. Move count: {}",
        path.len()
    );
    ReturnRoute {
        path,
        strategy: ReturnStrategy::Fallback,
    }
}

/// Build the timed route from `start` to the goal region.
///
/// Restricted flood fill from `goals`, restricted trace from `start`. When
/// `start` is unreachable or the trace fails the result is empty, which the
/// controller treats as an already-completed fast run.
pub fn build_fast_path(grid: &MazeGrid, start: Cell, goals: &[Cell]) -> Vec<Direction> {
    let field = flood_fill(grid, goals, FloodMode::Restricted);

    if !field.is_reachable(start) {
        error!("[Route] No visited-only path from {} to the goal region", start);
        return Vec::new();
    }

    match trace_path(grid, &field, start, FloodMode::Restricted) {
        Ok(path) => {
            info!("[Route] Fast path ready. Move count: {}", path.len());
            path
        }
        Err(e) => {
            error!("[Route] Fast path trace failed: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::path_cells;
    use crate::core::Direction::*;

    fn visit_path(grid: &mut MazeGrid, start: Cell, path: &[Direction]) -> Cell {
        let cells = path_cells(start, path);
        for &cell in &cells {
            grid.mark_visited(cell);
        }
        *cells.last().unwrap()
    }

    #[test]
    fn test_fallback_reverses_and_flips() {
        assert_eq!(fallback_return_path(&[North, North, East]), vec![West, South, South]);
        assert!(fallback_return_path(&[]).is_empty());
    }

    #[test]
    fn test_fallback_same_length() {
        let log = vec![North, East, East, South, East, North, North, West];
        let back = fallback_return_path(&log);
        assert_eq!(back.len(), log.len());
        let end = path_cells(Cell::ORIGIN, &log).last().copied().unwrap();
        let home = path_cells(end, &back).last().copied().unwrap();
        assert_eq!(home, Cell::ORIGIN);
    }

    #[test]
    fn test_return_uses_fallback_without_visited_route() {
        let mut grid = MazeGrid::new(10, 10);
        grid.mark_visited(Cell::ORIGIN);
        // Current cell was never marked visited, so the restricted fill cannot reach it
        let route = build_return_path(&grid, Cell::new(1, 2), Cell::ORIGIN, &[North, North, East]);
        assert_eq!(route.strategy, ReturnStrategy::Fallback);
        assert_eq!(route.path, vec![West, South, South]);
    }

    #[test]
    fn test_return_shortcuts_detour() {
        // Log wanders north, east, then back south; a direct route exists
        let mut grid = MazeGrid::new(10, 10);
        let log = vec![North, North, East, East, South, South];
        let current = visit_path(&mut grid, Cell::ORIGIN, &log);
        assert_eq!(current, Cell::new(2, 0));
        // The bottom row between was also visited on some earlier pass
        grid.mark_visited(Cell::new(1, 0));

        let route = build_return_path(&grid, current, Cell::ORIGIN, &log);
        assert_eq!(route.strategy, ReturnStrategy::Smart);
        assert_eq!(route.path, vec![West, West]);
    }

    #[test]
    fn test_return_never_crosses_known_walls() {
        let mut grid = MazeGrid::new(4, 4);
        let log = vec![North, East, East, South];
        let current = visit_path(&mut grid, Cell::ORIGIN, &log);
        grid.mark_visited(Cell::new(1, 0));
        grid.register_wall(Cell::new(1, 0), Direction::East);
        grid.register_wall(Cell::new(1, 0), Direction::West);

        let route = build_return_path(&grid, current, Cell::ORIGIN, &log);
        let cells = path_cells(current, &route.path);
        assert_eq!(cells.last(), Some(&Cell::ORIGIN));
        for (pair, dir) in cells.windows(2).zip(&route.path) {
            assert!(!grid.has_wall(pair[0], *dir));
        }
        assert_eq!(route.path.len(), 4);
    }

    #[test]
    fn test_fast_path_empty_when_goal_unvisited() {
        let mut grid = MazeGrid::new(10, 10);
        grid.mark_visited(Cell::ORIGIN);
        let goals = [Cell::new(4, 4)];
        assert!(build_fast_path(&grid, Cell::ORIGIN, &goals).is_empty());
    }

    #[test]
    fn test_fast_path_through_visited_cells() {
        let mut grid = MazeGrid::new(6, 6);
        let log = vec![East, East, East, North, North, North];
        let end = visit_path(&mut grid, Cell::ORIGIN, &log);
        let path = build_fast_path(&grid, Cell::ORIGIN, &[end]);
        assert_eq!(path, log);
    }
}
