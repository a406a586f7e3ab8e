//! Maze grid model.
//!
//! - [`MazeGrid`]: wall masks and visited flags with symmetric wall updates
//! - [`GridConfig`]: grid dimensions and the central goal region

mod config;
mod storage;

pub use config::GridConfig;
pub use storage::MazeGrid;
