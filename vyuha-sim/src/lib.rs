//! # Vyuha-Sim: Hardware-Free Maze Simulation
//!
//! Everything needed to exercise the [`vyuha`] decision engine without a
//! robot:
//!
//! - [`maze`]: ground-truth layouts, `.maz` files and random generation
//! - [`mouse`]: an in-process mouse implementing the drive traits
//! - [`mms`]: a client for the mms simulator's stdin/stdout protocol
//! - [`visualization`]: SVG rendering of what the controller displayed
//! - [`harness`]: batch runs over a directory of mazes
//!
//! ## Example
//!
//! ```rust
//! use vyuha::SolverConfig;
//! use vyuha_sim::harness::simulate;
//! use vyuha_sim::maze::generate_maze;
//! use vyuha_sim::HarnessConfig;
//!
//! let layout = generate_maze(10, 10, 42)?;
//! let config = HarnessConfig {
//!     solver: SolverConfig::default(),
//!     ..Default::default()
//! };
//! let report = simulate(&layout, &config);
//! assert!(report.success, "{}", report.reason);
//! # Ok::<(), vyuha_sim::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod harness;
pub mod maze;
pub mod mms;
pub mod mouse;
pub mod visualization;

pub use config::HarnessConfig;
pub use error::{Error, Result};
pub use harness::{BatchReport, RunReport, run_all, simulate};
pub use maze::MazeLayout;
pub use mms::{MmsClient, MmsOverlay};
pub use mouse::SimulatedMouse;
pub use visualization::SvgOverlay;
