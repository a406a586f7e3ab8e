//! Four-phase run controller.
//!
//! - [`PhaseController`]: owns the run state and drives the
//!   Searching → Returning → FastRun → Finished sequence
//! - [`routes`]: return-path and fast-path construction over visited cells
//! - [`Phase`], [`PathCursor`], [`StepOutcome`]: state machine types

mod machine;
pub mod routes;
mod state;

pub use machine::{PhaseController, RunStats, RunSummary};
pub use routes::{
    ReturnRoute, ReturnStrategy, build_fast_path, build_return_path, fallback_return_path,
};
pub use state::{PathCursor, Phase, StepOutcome};
