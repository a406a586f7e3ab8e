//! # Vyuha: Flood-Fill Maze Solving Engine
//!
//! Decision engine for a micromouse robot in a rectangular cell maze. The
//! robot explores from a corner start cell toward a central goal region,
//! returns home, then replays the fastest route it has proven safe.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vyuha::{PhaseController, SolverConfig};
//! # use vyuha::drive::{Actuator, WallSensor};
//! # struct Mouse;
//! # impl WallSensor for Mouse {
//! #     fn wall_front(&mut self) -> vyuha::Result<bool> { Ok(false) }
//! #     fn wall_left(&mut self) -> vyuha::Result<bool> { Ok(false) }
//! #     fn wall_right(&mut self) -> vyuha::Result<bool> { Ok(false) }
//! # }
//! # impl Actuator for Mouse {
//! #     fn turn_left(&mut self) -> vyuha::Result<()> { Ok(()) }
//! #     fn turn_right(&mut self) -> vyuha::Result<()> { Ok(()) }
//! #     fn move_forward(&mut self) -> vyuha::Result<()> { Ok(()) }
//! # }
//!
//! let config = SolverConfig::default();
//! let mut controller = PhaseController::new(config, Mouse)?;
//! let summary = controller.run()?;
//! println!("Finished at {} in {} moves", summary.pose.cell, summary.stats.total_moves());
//! # Ok::<(), vyuha::Error>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! - Cells are `(x, y)` with `(0, 0)` at the bottom-left
//! - **North** is `+y`, **East** is `+x`
//! - Turns are quarter turns: left is counter-clockwise
//!
//! ## Architecture
//!
//! - [`core`]: Cell, Direction, Rotation and Pose
//! - [`grid`]: Wall masks and visited flags
//! - [`planning`]: Flood fill and path tracing
//! - [`controller`]: Phase state machine and route construction
//! - [`drive`]: Sensor, actuator and display collaborator traits
//! - [`config`]: YAML-loadable solver configuration
//!
//! ## Run Phases
//!
//! ```text
//!   ┌─────────────┐  goal entered  ┌─────────────┐  path done  ┌─────────────┐
//!   │  Searching  │───────────────►│  Returning  │────────────►│   FastRun   │
//!   │ (sense+plan)│                │  (replay)   │             │  (replay)   │
//!   └─────────────┘                └─────────────┘             └──────┬──────┘
//!                                                                      │ goal / path done
//!                                                                      ▼
//!                                                              ┌─────────────┐
//!                                                              │  Finished   │
//!                                                              └─────────────┘
//! ```

pub mod config;
pub mod controller;
pub mod core;
pub mod drive;
pub mod error;
pub mod grid;
pub mod planning;

// Re-export main types at crate root
pub use config::SolverConfig;
pub use controller::{Phase, PhaseController, RunStats, RunSummary, StepOutcome};
pub use error::{ConfigError, Error, PlanningError, Result};

// Re-export collaborator traits
pub use drive::{Actuator, DisplayOverlay, MazeDrive, NullOverlay, OverlayColor, WallSensor};
