//! Yaw animation for the displayed trophy.
//!
//! The [`RotationController`] owns the object's current angle and eases it
//! toward the selected slide's target along the shortest arc, or spins it
//! continuously while auto-rotate is on.

/// Shortest-arc and wrapping helpers.
pub mod angle;
/// Slide-driven yaw controller.
pub mod controller;

pub use angle::{even_spacing, shortest_arc, wrap_positive};
pub use controller::{RotationController, RotationMode, RotationState};
