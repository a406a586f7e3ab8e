//! Fundamental types shared by every module.
//!
//! - [`Cell`]: integer grid coordinate
//! - [`Direction`]: cardinal direction, wall bit and priority order
//! - [`Rotation`]: single 90° turn
//! - [`Pose`]: occupied cell plus heading

mod cell;
mod direction;

pub use cell::{Cell, Pose};
pub use direction::{Direction, Rotation};
