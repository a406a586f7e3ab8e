//! Turn a distance field into a concrete move sequence.

use log::{trace, warn};

use crate::core::{Cell, Direction};
use crate::error::PlanningError;
use crate::grid::MazeGrid;

use super::flood_fill::{DistanceField, FloodMode};

/// Walk downhill through `field` from `start` until a goal (distance 0).
///
/// Each step takes the first direction in N, E, S, W order whose neighbor
/// is unwalled, in bounds, visited when `mode` is
/// [`FloodMode::Restricted`], and exactly one closer to the goal. The walk
/// is capped at the grid's cell count.
///
/// A start that is already a goal yields an empty path. Failures are
/// returned as [`PlanningError`] values for the caller to substitute.
pub fn trace_path(
    grid: &MazeGrid,
    field: &DistanceField,
    start: Cell,
    mode: FloodMode,
) -> Result<Vec<Direction>, PlanningError> {
    let Some(mut current_dist) = field.get(start) else {
        return Err(PlanningError::Unreachable { cell: start });
    };

    let limit = grid.cell_count();
    let mut path = Vec::with_capacity(current_dist as usize);
    let mut cell = start;

    while current_dist != 0 {
        if path.len() >= limit {
            warn!("[Trace] Step ceiling of {} reached at {}", limit, cell);
            return Err(PlanningError::StepLimitExceeded { limit });
        }

        let next = Direction::ALL.into_iter().find_map(|dir| {
            let neighbor = grid.open_neighbor(cell, dir)?;
            if !mode.admits(grid, neighbor) {
                return None;
            }
            (field.get(neighbor) == Some(current_dist - 1)).then_some((dir, neighbor))
        });

        let Some((dir, neighbor)) = next else {
            warn!("[Trace] Path trace stuck at {} (distance {})", cell, current_dist);
            return Err(PlanningError::TraceStuck { cell });
        };

        path.push(dir);
        cell = neighbor;
        current_dist -= 1;
    }

    trace!("[Trace] {} -> {} in {} moves", start, cell, path.len());
    Ok(path)
}

/// Cells visited when following `path` from `start`, including `start`.
pub fn path_cells(start: Cell, path: &[Direction]) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(path.len() + 1);
    cells.push(start);
    let mut cell = start;
    for &dir in path {
        cell = cell.step(dir);
        cells.push(cell);
    }
    cells
}
