//! Shortest-path planning over the maze grid.
//!
//! Planning is a two-step affair:
//!
//! 1. [`flood_fill`] computes a [`DistanceField`] from a goal set, either
//!    optimistically over the whole grid or restricted to visited cells
//! 2. [`trace_path`] follows the field downhill from a start cell and
//!    returns the headings to drive
//!
//! ```rust
//! use vyuha::core::Cell;
//! use vyuha::grid::MazeGrid;
//! use vyuha::planning::{FloodMode, flood_fill, trace_path};
//!
//! let grid = MazeGrid::new(10, 10);
//! let goals = [Cell::new(4, 4), Cell::new(4, 5), Cell::new(5, 4), Cell::new(5, 5)];
//!
//! let field = flood_fill(&grid, &goals, FloodMode::Full);
//! assert_eq!(field.get(Cell::ORIGIN), Some(8));
//!
//! let path = trace_path(&grid, &field, Cell::ORIGIN, FloodMode::Full).unwrap();
//! assert_eq!(path.len(), 8);
//! ```

mod flood_fill;
mod tracer;

pub use flood_fill::{DistanceField, FloodMode, flood_fill};
pub use tracer::{path_cells, trace_path};
