//! Shared utilities.
//!
//! Helpers for frame timing used by hosts and the headless driver.

pub mod frame_timing;

pub use frame_timing::FrameTiming;
