// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Turntable award viewer core.
//!
//! Plinth drives the yaw of a displayed trophy from a carousel of award
//! slides. Each slide owns a target angle; the rotation controller eases the
//! current angle toward it along the shortest arc, or spins continuously
//! while auto-rotate is on.
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - one viewer session: slide deck, rotation, timers
//! - [`rotation::RotationController`] - the per-frame yaw smoothing core
//! - [`carousel::SlideDeck`] - ordered slides and their target angles
//! - [`input::InputProcessor`] - UI events and key presses to commands
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! The host owns the frame loop. Every rendered frame it calls
//! [`viewer::Viewer::update`] with the current instant and the frame delta,
//! and applies the returned yaw to its scene object. Input handlers call
//! [`viewer::Viewer::execute`] between frames. Nothing runs in the
//! background: resume and auto-advance timers are deadlines compared against
//! the instant the host passes in.
//!
//! With the `server` feature, [`server`] provides the local development
//! static file server used to preview the web presentation.

pub mod asset;
pub mod carousel;
pub mod error;
pub mod input;
pub mod options;
pub mod rotation;
#[cfg(feature = "server")]
pub mod server;
pub mod util;
pub mod viewer;

pub use error::PlinthError;
pub use viewer::{Viewer, ViewerCommand, ViewerFrame};
