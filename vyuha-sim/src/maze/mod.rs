//! Ground-truth mazes.
//!
//! - [`MazeLayout`]: the real walls a simulated mouse drives through
//! - [`maz_format`]: the `x y n e s w` text format used by the mms simulator
//! - [`generator`]: seeded random maze generation

pub mod generator;
mod layout;
pub mod maz_format;

pub use generator::{MazeGenerator, generate_maze};
pub use layout::MazeLayout;
pub use maz_format::{load_maz, parse_maz, save_maz, write_maz};
